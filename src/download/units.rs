//! Card face resolution: turning one card record into its download units.
//!
//! A single-faced card (one `image_uris` map) yields exactly one unit for the
//! requested format, or a [`ResolveError::FormatUnavailable`] if the format
//! key is missing. A multi-faced card yields one unit per face that exposes
//! the format; faces without it are silently skipped. The second emitted
//! unit is marked as the rear side.

use thiserror::Error;

use crate::scryfall::{CardFace, CardRecord, ImageFormat};

/// One concrete image to fetch, derived from a card and an optional face.
///
/// Ephemeral: created per iteration and discarded once its outcome is logged.
#[derive(Debug, Clone, Copy)]
pub struct DownloadUnit<'a> {
    /// Direct-fetch image URL.
    pub url: &'a str,
    /// The card this unit belongs to.
    pub card: &'a CardRecord,
    /// The face this unit images, when the card is multi-faced.
    pub face: Option<&'a CardFace>,
    /// Whether this unit is the rear side of a multi-faced card.
    pub rear: bool,
}

/// Per-card resolution errors. Counted and logged, never fatal to the run.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The requested image format key is missing on a single-image card.
    ///
    /// Distinct from a network error: no fetch is attempted for this card.
    #[error("no '{format}' image for {card}")]
    FormatUnavailable {
        /// Name of the affected card.
        card: String,
        /// The format that was requested.
        format: ImageFormat,
    },
}

impl ResolveError {
    /// Creates a format-unavailable error for `card`.
    pub fn format_unavailable(card: impl Into<String>, format: ImageFormat) -> Self {
        Self::FormatUnavailable {
            card: card.into(),
            format,
        }
    }
}

/// Lazy, finite, non-restartable sequence of download units for one card.
///
/// Obtained from [`units`]. The iterator borrows the card record and consumes
/// its face cursor as it advances.
#[derive(Debug)]
pub struct UnitIter<'a> {
    card: &'a CardRecord,
    format: ImageFormat,
    inner: Inner<'a>,
}

#[derive(Debug)]
enum Inner<'a> {
    /// Single-faced card: the one URL, taken on first `next()`.
    Single(Option<&'a str>),
    /// Multi-faced card: remaining faces plus the count emitted so far.
    Faces {
        faces: std::slice::Iter<'a, CardFace>,
        emitted: usize,
    },
    /// Card with neither image set: contributes nothing.
    Empty,
}

impl<'a> Iterator for UnitIter<'a> {
    type Item = DownloadUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Single(url) => url.take().map(|url| DownloadUnit {
                url,
                card: self.card,
                face: None,
                rear: false,
            }),
            Inner::Faces { faces, emitted } => {
                for face in faces.by_ref() {
                    let Some(url) = face
                        .image_uris
                        .as_ref()
                        .and_then(|uris| uris.get(self.format.as_str()))
                        .filter(|url| !url.is_empty())
                    else {
                        continue;
                    };
                    let rear = *emitted == 1;
                    *emitted += 1;
                    return Some(DownloadUnit {
                        url,
                        card: self.card,
                        face: Some(face),
                        rear,
                    });
                }
                None
            }
            Inner::Empty => None,
        }
    }
}

/// Resolves the download units for one card in the requested format.
///
/// # Errors
///
/// Returns [`ResolveError::FormatUnavailable`] when the card has a single
/// `image_uris` map that lacks the requested format. Multi-faced cards never
/// error here: faces without the format are skipped.
pub fn units(card: &CardRecord, format: ImageFormat) -> Result<UnitIter<'_>, ResolveError> {
    let inner = if let Some(uris) = &card.image_uris {
        let url = uris
            .get(format.as_str())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ResolveError::format_unavailable(&card.name, format))?;
        Inner::Single(Some(url))
    } else if let Some(faces) = &card.card_faces {
        Inner::Faces {
            faces: faces.iter(),
            emitted: 0,
        }
    } else {
        Inner::Empty
    };

    Ok(UnitIter {
        card,
        format,
        inner,
    })
}
