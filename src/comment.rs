//! Comment ingestion and normalization.
//!
//! Input arrives as loosely-typed JSON (exported from chat tools and
//! spreadsheets, so any field may be missing or the wrong type). Raw records
//! keep their fields as [`serde_json::Value`] and normalization turns each
//! into a well-formed [`Comment`], synthesizing a deterministic reaction
//! count when the source value is unusable.

use serde::Deserialize;
use serde_json::Value;

use crate::hash;

/// Display name substituted for blank or missing authors.
pub const ANONYMOUS: &str = "Anonymous";

/// Top-level input document: a comment list plus an optional logo path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollageInput {
    #[serde(default)]
    pub comments: Vec<RawComment>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// One record as it appears in the input JSON, before normalization.
///
/// Every field tolerates any JSON type; garbage is handled in
/// [`RawComment::normalize`], not rejected at parse time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub comment: Value,
    #[serde(default, rename = "numberOfReaction")]
    pub number_of_reaction: Value,
}

/// A normalized comment ready for layout and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub reactions: f64,
}

impl RawComment {
    /// Normalize a raw record at position `index` in the input list.
    ///
    /// Non-string or blank authors become [`ANONYMOUS`]; non-string comments
    /// become empty. A reaction count that is not a finite number is replaced
    /// by a value sampled from the normalized author and text, so the same
    /// record always renders the same pill.
    pub fn normalize(&self, index: usize) -> Comment {
        let author = match self.author.as_str() {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => ANONYMOUS.to_string(),
        };
        let text = self.comment.as_str().unwrap_or("").to_string();
        let reactions = match self.number_of_reaction.as_f64() {
            Some(n) if n.is_finite() => n,
            _ => {
                let seed = format!("{author}|{text}");
                f64::from(hash::sample(&seed, &index.to_string(), 3, 99))
            }
        };
        Comment {
            author,
            text,
            reactions,
        }
    }
}

impl Comment {
    /// Reaction count formatted for the pill: integral values lose the
    /// trailing `.0`.
    pub fn reaction_label(&self) -> String {
        if self.reactions.fract() == 0.0 && self.reactions.abs() < 1e15 {
            format!("{}", self.reactions as i64)
        } else {
            format!("{}", self.reactions)
        }
    }

    /// Avatar initials: first letters of the first two name parts, or the
    /// first two characters of a single-part name, uppercased. `"A"` when
    /// the name has no parts at all.
    pub fn initials(&self) -> String {
        let parts: Vec<&str> = self.author.split_whitespace().collect();
        match parts.len() {
            0 => "A".to_string(),
            1 => parts[0].chars().take(2).collect::<String>().to_uppercase(),
            _ => parts[..2]
                .iter()
                .filter_map(|p| p.chars().next())
                .collect::<String>()
                .to_uppercase(),
        }
    }
}
