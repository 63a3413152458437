//! Card data model for Scryfall search results.
//!
//! A [`CardRecord`] is one printing returned by the search API. Single-faced
//! cards carry an `image_uris` map keyed by image format; double-faced cards
//! instead carry a `card_faces` sequence where each face has its own map.
//! Unknown payload fields are preserved in a flattened side map so new API
//! fields never break deserialization.

use std::collections::HashMap;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One search result describing a single card printing.
///
/// Immutable once fetched; the run owns the full result set for its duration.
#[derive(Debug, Clone, Deserialize)]
pub struct CardRecord {
    /// Card name, e.g. `"Delver of Secrets // Insectile Aberration"`.
    #[serde(default)]
    pub name: String,

    /// Set code, lowercase on the wire, e.g. `"isd"`.
    #[serde(default)]
    pub set: String,

    /// Collector number within the set. A string: promos use suffixes like `"123p"`.
    #[serde(default)]
    pub collector_number: String,

    /// Canonical detail-page URL on scryfall.com.
    #[serde(default)]
    pub scryfall_uri: String,

    /// Image URLs keyed by format name, present on single-faced cards.
    #[serde(default)]
    pub image_uris: Option<HashMap<String, String>>,

    /// Per-face image sources, present on double-faced cards.
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,

    /// Remaining API fields, kept for forward compatibility.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One side of a multi-sided card.
#[derive(Debug, Clone, Deserialize)]
pub struct CardFace {
    /// Face name, e.g. `"Insectile Aberration"`.
    #[serde(default)]
    pub name: String,

    /// Image URLs keyed by format name. Some faces (e.g. adventure halves)
    /// have no images of their own.
    #[serde(default)]
    pub image_uris: Option<HashMap<String, String>>,

    /// Remaining API fields, kept for forward compatibility.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Image formats exposed by the Scryfall image API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Small,
    Normal,
    Large,
    Png,
    #[value(name = "art_crop")]
    ArtCrop,
    #[value(name = "border_crop")]
    BorderCrop,
}

impl ImageFormat {
    /// The wire name used as the `image_uris` map key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Normal => "normal",
            Self::Large => "large",
            Self::Png => "png",
            Self::ArtCrop => "art_crop",
            Self::BorderCrop => "border_crop",
        }
    }

    /// File extension for downloads in this format.
    ///
    /// Only the `png` format serves PNG bytes; every other format is JPEG.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => ".png",
            _ => ".jpg",
        }
    }

    /// Whether this is the default format (`png`).
    #[must_use]
    pub fn is_default(self) -> bool {
        self == Self::Png
    }
}

impl Default for ImageFormat {
    fn default() -> Self {
        Self::Png
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_card_record_deserializes_single_faced() {
        let json = r#"{
            "name": "Lightning Bolt",
            "set": "lea",
            "collector_number": "161",
            "scryfall_uri": "https://scryfall.com/card/lea/161/lightning-bolt?utm_source=api",
            "image_uris": {"png": "https://cards.example/bolt.png"}
        }"#;
        let card: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Lightning Bolt");
        assert_eq!(card.set, "lea");
        assert!(card.image_uris.is_some());
        assert!(card.card_faces.is_none());
    }

    #[test]
    fn test_card_record_deserializes_double_faced() {
        let json = r#"{
            "name": "Delver of Secrets // Insectile Aberration",
            "set": "isd",
            "collector_number": "51",
            "scryfall_uri": "https://scryfall.com/card/isd/51/delver",
            "card_faces": [
                {"name": "Delver of Secrets", "image_uris": {"png": "https://cards.example/front.png"}},
                {"name": "Insectile Aberration", "image_uris": {"png": "https://cards.example/back.png"}}
            ]
        }"#;
        let card: CardRecord = serde_json::from_str(json).unwrap();
        let faces = card.card_faces.unwrap();
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[1].name, "Insectile Aberration");
    }

    #[test]
    fn test_card_record_keeps_unknown_fields_in_extra() {
        let json = r#"{"name": "Ornithopter", "cmc": 0.0, "rarity": "common"}"#;
        let card: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(card.extra.get("rarity").and_then(|v| v.as_str()), Some("common"));
    }

    #[test]
    fn test_card_record_missing_fields_default_to_empty() {
        let card: CardRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(card.name, "");
        assert_eq!(card.scryfall_uri, "");
        assert!(card.image_uris.is_none());
    }

    #[test]
    fn test_image_format_wire_names() {
        assert_eq!(ImageFormat::Png.as_str(), "png");
        assert_eq!(ImageFormat::ArtCrop.as_str(), "art_crop");
        assert_eq!(ImageFormat::BorderCrop.as_str(), "border_crop");
    }

    #[test]
    fn test_image_format_extension() {
        assert_eq!(ImageFormat::Png.extension(), ".png");
        assert_eq!(ImageFormat::Large.extension(), ".jpg");
        assert_eq!(ImageFormat::Small.extension(), ".jpg");
    }

    #[test]
    fn test_image_format_serde_round_trip() {
        let parsed: ImageFormat = serde_json::from_str(r#""art_crop""#).unwrap();
        assert_eq!(parsed, ImageFormat::ArtCrop);
        assert_eq!(serde_json::to_string(&ImageFormat::Png).unwrap(), r#""png""#);
    }

    #[test]
    fn test_image_format_default_is_png() {
        assert!(ImageFormat::default().is_default());
        assert!(!ImageFormat::Large.is_default());
    }
}
