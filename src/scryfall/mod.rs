//! Scryfall API surface: card data model and paginated search.

mod card;
mod search;

pub use card::{CardFace, CardRecord, ImageFormat};
pub use search::{SearchClient, SearchError};
