//! Filename synthesis for download units.
//!
//! Pure, deterministic mapping from (template, card, format, face, rear flag)
//! to a sanitized filename with no path separators and no directory prefix.
//!
//! Two modes:
//! - canonical (`{original}`): reuse the card's detail-page path verbatim,
//!   joined with hyphens, always with a `.png` extension;
//! - template: substitute `{set_code}`, `{number}`, `{name}`, `{face}` and
//!   `{format}` tokens, with ` (front)`/` (rear)` and ` (format)` suffixes
//!   when the corresponding token is absent.
//!
//! Sanitization runs exactly once, after all substitutions, so substituted
//! field values (a card name containing a slash, say) cannot reintroduce
//! path separators.

use crate::scryfall::{CardFace, CardRecord, ImageFormat};

/// Sentinel template selecting canonical mode.
pub const CANONICAL_TEMPLATE: &str = "{original}";

/// Detail-page URL prefix stripped in canonical mode.
const CANONICAL_URI_PREFIX: &str = "https://scryfall.com/card/";

/// Fixed extension for canonical-mode filenames, regardless of format.
const CANONICAL_EXTENSION: &str = ".png";

/// Synthesizes the filename for one download unit.
#[must_use]
pub fn synthesize(
    template: &str,
    card: &CardRecord,
    format: ImageFormat,
    face: Option<&CardFace>,
    rear: bool,
) -> String {
    if template == CANONICAL_TEMPLATE {
        return canonical_filename(card, face.is_some(), rear);
    }

    let mut name = template
        .replace("{set_code}", &card.set.to_uppercase())
        .replace("{number}", &card.collector_number)
        .replace("{name}", &card.name);

    if name.contains("{face}")
        && let Some(face) = face
    {
        name = name.replace("{face}", &face.name);
    } else if face.is_some() {
        name.push_str(side_suffix(rear));
    }

    if name.contains("{format}") {
        name = name.replace("{format}", format.as_str());
    } else if !format.is_default() {
        name.push_str(&format!(" ({format})"));
    }

    format!("{}{}", sanitize_filename(&name), format.extension())
}

/// Derives the canonical filename from the card's detail-page reference path.
fn canonical_filename(card: &CardRecord, has_face: bool, rear: bool) -> String {
    let path = card
        .scryfall_uri
        .strip_prefix(CANONICAL_URI_PREFIX)
        .unwrap_or(&card.scryfall_uri);
    let path = path.split('?').next().unwrap_or(path);

    let mut name = if path.is_empty() {
        "card".to_string()
    } else {
        path.to_string()
    };
    if has_face {
        name.push_str(side_suffix(rear));
    }

    format!("{}{CANONICAL_EXTENSION}", sanitize_filename(&name))
}

fn side_suffix(rear: bool) -> &'static str {
    if rear { " (rear)" } else { " (front)" }
}

/// Sanitizes filename for filesystem safety.
///
/// Forward slashes collapse to hyphens; the remaining unsafe set
/// `\ * ? : " < > |` and control characters map to underscores.
pub(crate) fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' => '-',
            '\\' | '*' | '?' | ':' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
