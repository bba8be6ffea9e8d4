//! Color presets: a named dominant color plus an optional fixed card color.
//!
//! Presets come from an optional JSON file; when the file is absent,
//! unreadable or empty the builtin set is used. A preset without a card
//! color leaves card backgrounds to the pastel palette derived from the
//! dominant color.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::color::{self, Rgb};
use crate::error::IkonografError;

/// One color scheme for a collage.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub dominant_color: String,
    #[serde(default)]
    pub card_color: Option<String>,
}

impl Preset {
    /// The dominant color, falling back to the default when malformed.
    pub fn dominant(&self) -> Rgb {
        color::normalize_color(&self.dominant_color)
    }

    /// The fixed card color, if present and plausibly a hex string.
    pub fn card(&self) -> Option<&str> {
        self.card_color
            .as_deref()
            .filter(|c| c.starts_with('#'))
    }
}

fn builtin(name: &str, dominant: &str, card: &str) -> Preset {
    Preset {
        name: name.to_string(),
        dominant_color: dominant.to_string(),
        card_color: Some(card.to_string()),
    }
}

/// The builtin preset set, used whenever no preset file is supplied.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        builtin("Dominus Blue", "#2E6AA8", "#DCE8FF"),
        builtin("Biały", "#F2F2F2", "#FFFFFF"),
        builtin("Czarny", "#0F1117", "#20242E"),
        builtin("Apple Like", "#DCE1E7", "#F5F6F7"),
        builtin("Promo (Złoty)", "#C8A14A", "#F4E6C0"),
        builtin("Emerald Forest", "#2F8F6B", "#D7F0E4"),
        builtin("Amber Glow", "#C9852B", "#FFE3B0"),
        builtin("Rose Quartz", "#C86C8A", "#F6D6DF"),
        builtin("Deep Violet", "#5A4BA6", "#E1DDF6"),
        builtin("Slate Teal", "#3B6C7A", "#D3E6EB"),
    ]
}

/// On-disk preset document: `{ "presets": [...] }`.
#[derive(Debug, Default, Deserialize)]
struct PresetFile {
    #[serde(default)]
    presets: Vec<Preset>,
}

/// Load presets from a JSON file, or the builtin set when `path` is `None`.
///
/// A file whose `presets` list is missing or empty also falls back to the
/// builtins, so a stub file never produces a collage with no usable scheme.
pub fn load_presets(path: Option<&Path>) -> Result<Vec<Preset>, IkonografError> {
    let Some(path) = path else {
        return Ok(builtin_presets());
    };
    let data = fs::read_to_string(path)?;
    let file: PresetFile = serde_json::from_str(&data)?;
    if file.presets.is_empty() {
        return Ok(builtin_presets());
    }
    Ok(file.presets)
}

/// Resolve a preset selector: a zero-based index or a case-insensitive name.
pub fn find_preset<'a>(presets: &'a [Preset], selector: &str) -> Result<&'a Preset, IkonografError> {
    if let Ok(index) = selector.parse::<usize>() {
        return presets.get(index).ok_or_else(|| {
            IkonografError::Preset(format!(
                "index {index} out of range (have {} presets)",
                presets.len()
            ))
        });
    }
    presets
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(selector))
        .ok_or_else(|| IkonografError::Preset(format!("no preset named {selector:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_count_and_first() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 10);
        assert_eq!(presets[0].name, "Dominus Blue");
        assert_eq!(presets[0].dominant_color, "#2E6AA8");
    }

    #[test]
    fn test_find_by_index() {
        let presets = builtin_presets();
        assert_eq!(find_preset(&presets, "3").unwrap().name, "Apple Like");
        assert!(find_preset(&presets, "10").is_err());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let presets = builtin_presets();
        assert_eq!(
            find_preset(&presets, "emerald forest").unwrap().dominant_color,
            "#2F8F6B"
        );
        assert!(find_preset(&presets, "No Such Scheme").is_err());
    }

    #[test]
    fn test_card_color_filtered() {
        let mut preset = builtin_presets().remove(0);
        assert_eq!(preset.card(), Some("#DCE8FF"));
        preset.card_color = Some("blue".to_string());
        assert_eq!(preset.card(), None);
        preset.card_color = None;
        assert_eq!(preset.card(), None);
    }

    #[test]
    fn test_dominant_falls_back_when_malformed() {
        let preset = Preset {
            name: "Broken".to_string(),
            dominant_color: "chartreuse".to_string(),
            card_color: None,
        };
        assert_eq!(preset.dominant(), Rgb::DEFAULT);
    }

    #[test]
    fn test_parse_preset_file_document() {
        let file: PresetFile = serde_json::from_str(
            r##"{"presets": [{"name": "Mono", "dominantColor": "#333333"}]}"##,
        )
        .unwrap();
        assert_eq!(file.presets[0].name, "Mono");
        assert!(file.presets[0].card_color.is_none());
    }

    #[test]
    fn test_empty_preset_file_falls_back() {
        let file: PresetFile = serde_json::from_str("{}").unwrap();
        assert!(file.presets.is_empty());
    }

    #[test]
    fn test_load_missing_path_uses_builtins() {
        let presets = load_presets(None).unwrap();
        assert_eq!(presets, builtin_presets());
    }
}
