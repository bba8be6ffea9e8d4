//! Text rasterization for the collage.
//!
//! Two faces are supported: the builtin Spleen bitmap face (no files needed,
//! glyphs scaled nearest-neighbor to the requested size) and an optional TTF
//! loaded from disk, rendered anti-aliased through ab_glyph. Both expose the
//! same measurement function the text fitter consumes, so fitting and
//! drawing always agree on widths.

use std::path::Path;

use ab_glyph::{Font as _, FontArc, ScaleFont as _, point};
use image::RgbaImage;
use spleen_font::{FONT_12X24, PSF2Font};

use crate::color::Rgb;
use crate::error::IkonografError;
use crate::scene::draw::blend_pixel;
use crate::text::Measure;

const BITMAP_GLYPH_W: usize = 12;
const BITMAP_GLYPH_H: usize = 24;

/// A text face usable for both measurement and drawing.
pub enum TypeFace {
    /// Builtin Spleen 12x24 bitmap face. Fixed advance of half the font
    /// size per character.
    Bitmap,
    /// A TrueType/OpenType face loaded at startup.
    Ttf(FontArc),
}

impl TypeFace {
    /// Load a TTF or OTF face from disk.
    pub fn from_ttf_path(path: &Path) -> Result<TypeFace, IkonografError> {
        let data = std::fs::read(path)?;
        let font = FontArc::try_from_vec(data)
            .map_err(|e| IkonografError::Font(format!("{}: {e}", path.display())))?;
        Ok(TypeFace::Ttf(font))
    }

    /// Width of `text` at `font_size`, in pixels.
    pub fn measure(&self, text: &str, font_size: u32) -> f32 {
        match self {
            TypeFace::Bitmap => text.chars().count() as f32 * bitmap_advance(font_size),
            TypeFace::Ttf(font) => {
                let scaled = font.as_scaled(font_size as f32);
                text.chars()
                    .map(|ch| scaled.h_advance(font.glyph_id(ch)))
                    .sum()
            }
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Bold is a one-pixel horizontal smear, the same trick for both faces.
    pub fn draw_text(
        &self,
        img: &mut RgbaImage,
        x: f32,
        y: f32,
        text: &str,
        font_size: u32,
        color: Rgb,
        bold: bool,
    ) {
        match self {
            TypeFace::Bitmap => draw_bitmap_text(img, x, y, text, font_size, color, bold),
            TypeFace::Ttf(font) => draw_ttf_text(font, img, x, y, text, font_size, color, bold),
        }
    }

    /// Draw `text` centered on `(cx, cy)`.
    pub fn draw_text_centered(
        &self,
        img: &mut RgbaImage,
        cx: f32,
        cy: f32,
        text: &str,
        font_size: u32,
        color: Rgb,
        bold: bool,
    ) {
        let w = self.measure(text, font_size);
        self.draw_text(
            img,
            cx - w / 2.0,
            cy - font_size as f32 / 2.0,
            text,
            font_size,
            color,
            bold,
        );
    }
}

impl Measure for TypeFace {
    fn text_width(&self, text: &str, font_size: u32) -> f32 {
        self.measure(text, font_size)
    }
}

fn bitmap_advance(font_size: u32) -> f32 {
    (font_size as f32 * 0.5).round().max(1.0)
}

/// Fetch a Spleen glyph as a flat 12x24 bitmap, substituting `?` for
/// characters the face lacks.
fn bitmap_glyph(spleen: &mut PSF2Font, ch: char) -> Option<Vec<u8>> {
    let mut fetch = |ch: char| -> Option<Vec<u8>> {
        let utf8 = ch.to_string();
        let rows = spleen.glyph_for_utf8(utf8.as_bytes())?;
        let mut bitmap = vec![0u8; BITMAP_GLYPH_W * BITMAP_GLYPH_H];
        for (row_y, row) in rows.enumerate() {
            for (col_x, on) in row.enumerate() {
                if row_y < BITMAP_GLYPH_H && col_x < BITMAP_GLYPH_W && on {
                    bitmap[row_y * BITMAP_GLYPH_W + col_x] = 1;
                }
            }
        }
        Some(bitmap)
    };
    fetch(ch).or_else(|| fetch('?'))
}

fn draw_bitmap_text(
    img: &mut RgbaImage,
    x: f32,
    y: f32,
    text: &str,
    font_size: u32,
    color: Rgb,
    bold: bool,
) {
    // Font data is compiled in; construction cannot fail for a valid build.
    let mut spleen = PSF2Font::new(FONT_12X24).unwrap();
    let advance = bitmap_advance(font_size);
    let cell_w = advance as usize;
    let cell_h = font_size as usize;
    if cell_w == 0 || cell_h == 0 {
        return;
    }

    let mut caret = x;
    for ch in text.chars() {
        if let Some(bitmap) = bitmap_glyph(&mut spleen, ch) {
            // Nearest-neighbor scale from the 12x24 master to the cell.
            for dy in 0..cell_h {
                for dx in 0..cell_w {
                    let sx = dx * BITMAP_GLYPH_W / cell_w;
                    let sy = dy * BITMAP_GLYPH_H / cell_h;
                    if bitmap[sy * BITMAP_GLYPH_W + sx] != 0 {
                        let px = (caret + dx as f32).round() as i64;
                        let py = (y + dy as f32).round() as i64;
                        blend_pixel(img, px, py, color, 1.0);
                        if bold {
                            blend_pixel(img, px + 1, py, color, 1.0);
                        }
                    }
                }
            }
        }
        caret += advance;
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_ttf_text(
    font: &FontArc,
    img: &mut RgbaImage,
    x: f32,
    y: f32,
    text: &str,
    font_size: u32,
    color: Rgb,
    bold: bool,
) {
    let scaled = font.as_scaled(font_size as f32);
    let baseline = y + scaled.ascent();
    let mut caret = x;
    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        let advance = scaled.h_advance(glyph_id);
        let glyph = glyph_id.with_scale_and_position(font_size as f32, point(caret, baseline));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|px, py, coverage| {
                let gx = px as i64 + bounds.min.x as i64;
                let gy = py as i64 + bounds.min.y as i64;
                blend_pixel(img, gx, gy, color, coverage);
                if bold {
                    blend_pixel(img, gx + 1, gy, color, coverage);
                }
            });
        }
        caret += advance;
    }
}
