//! Hex color parsing and the palette math behind card backgrounds.
//!
//! Only 6-digit `#rrggbb` strings parse; anything else is treated as absent
//! and the operations that take hex strings pass their first argument
//! through unchanged, so a malformed color degrades to "no change" rather
//! than an error.

/// Fallback dominant color when input is malformed.
pub const DEFAULT_COLOR: &str = "#2E6AA8";

/// Pastel card backgrounds, nudged toward the dominant color at render time.
const PASTEL_BASES: [&str; 5] = ["#cfe4ff", "#d7f0d1", "#ffe3b0", "#ffd6c2", "#cfe5e0"];

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parsed form of [`DEFAULT_COLOR`].
    pub const DEFAULT: Rgb = Rgb { r: 0x2E, g: 0x6A, b: 0xA8 };

    /// Parse `#rrggbb`. Returns `None` for any other shape, including
    /// 3-digit shorthand and missing `#`.
    pub fn from_hex(s: &str) -> Option<Rgb> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation toward `other`, rounded half-up.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Add `delta` to every channel, clamped to `[0, 255]`.
    pub fn offset(self, delta: i32) -> Rgb {
        let shift = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
        Rgb {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }
}

/// Parse a color, falling back to [`Rgb::DEFAULT`] when malformed.
pub fn normalize_color(s: &str) -> Rgb {
    Rgb::from_hex(s).unwrap_or(Rgb::DEFAULT)
}

/// Mix `a` toward `b` by `t`. Returns `a` unchanged when either fails to
/// parse.
pub fn mix(a: &str, b: &str, t: f32) -> String {
    match (Rgb::from_hex(a), Rgb::from_hex(b)) {
        (Some(ca), Some(cb)) => ca.lerp(cb, t).to_hex(),
        _ => a.to_string(),
    }
}

/// Mix white toward `hex`: `t` is how far from white toward the color.
pub fn tint(hex: &str, t: f32) -> String {
    mix("#ffffff", hex, t)
}

/// Shift every channel by `delta`. Returns `hex` unchanged when it fails to
/// parse.
pub fn adjust(hex: &str, delta: i32) -> String {
    match Rgb::from_hex(hex) {
        Some(c) => c.offset(delta).to_hex(),
        None => hex.to_string(),
    }
}

/// Five pastel card backgrounds, each pulled 15% toward the dominant color
/// so cards read as part of the scheme.
pub fn pastel_palette(dominant: &str) -> [String; 5] {
    PASTEL_BASES.map(|base| mix(base, dominant, 0.15))
}

/// Five variations of a fixed card color: two tints, the base, two shades.
pub fn card_palette(base: &str) -> [String; 5] {
    [
        mix(base, "#ffffff", 0.15),
        mix(base, "#ffffff", 0.3),
        base.to_string(),
        mix(base, "#000000", 0.06),
        mix(base, "#000000", 0.12),
    ]
}
