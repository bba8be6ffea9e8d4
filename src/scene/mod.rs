//! Scene composition: background, logo panel and comment cards.
//!
//! The composer takes raw comments plus a preset and paints the finished
//! collage into an [`RgbaImage`]. Everything visual hangs off two inputs,
//! the dominant color and the per-comment deterministic draws, so the same
//! input document always produces the same pixels.

pub mod draw;
pub mod face;

use std::str::FromStr;

use image::{RgbaImage, imageops};

use crate::color::{self, Rgb};
use crate::comment::{Comment, RawComment};
use crate::error::IkonografError;
use crate::hash;
use crate::layout::{self, BASE_CELL_H, Layout, PixelRect};
use crate::preset::Preset;
use crate::text;
use self::draw::{Paint, fill_circle, fill_diamond, fill_rounded_rect};
use self::face::TypeFace;

/// Author name and comment body ink.
const INK_TEXT: Rgb = Rgb { r: 0x1d, g: 0x22, b: 0x30 };
/// Reaction pill ink.
const INK_PILL: Rgb = Rgb { r: 0x1a, g: 0x1f, b: 0x2e };
const SHADOW: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Output canvas shapes, each mapped to a fixed pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// 16:9, 1920x1080.
    Wide,
    /// 4:3, 1600x1200.
    Standard,
    /// 1:1, 1400x1400.
    Square,
    /// 3:4, 1350x1800.
    Portrait,
    /// 9:16, 1080x1920.
    Tall,
}

impl AspectRatio {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AspectRatio::Wide => (1920, 1080),
            AspectRatio::Standard => (1600, 1200),
            AspectRatio::Square => (1400, 1400),
            AspectRatio::Portrait => (1350, 1800),
            AspectRatio::Tall => (1080, 1920),
        }
    }
}

impl FromStr for AspectRatio {
    type Err = IkonografError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "16:9" => Ok(AspectRatio::Wide),
            "4:3" => Ok(AspectRatio::Standard),
            "1:1" => Ok(AspectRatio::Square),
            "3:4" => Ok(AspectRatio::Portrait),
            "9:16" => Ok(AspectRatio::Tall),
            other => Err(IkonografError::InvalidArgument(format!(
                "unknown aspect ratio {other:?} (expected 16:9, 4:3, 1:1, 3:4 or 9:16)"
            ))),
        }
    }
}

/// Everything a render needs besides the comments themselves.
pub struct SceneOptions<'a> {
    pub width: u32,
    pub height: u32,
    pub preset: &'a Preset,
    pub logo: Option<&'a RgbaImage>,
    pub face: &'a TypeFace,
}

/// Summary of one render, for status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub width: u32,
    pub height: u32,
    pub comments: usize,
    pub placed: usize,
    pub overflow: usize,
}

/// Render a collage.
///
/// Comments that found no grid slot are counted in the report's `overflow`
/// and silently omitted from the canvas.
pub fn render(comments: &[RawComment], opts: &SceneOptions<'_>) -> (RgbaImage, RenderReport) {
    let dominant = opts.preset.dominant();
    let mut img = RgbaImage::new(opts.width, opts.height);
    draw::diagonal_gradient(&mut img, dominant, dominant.offset(-40));

    let grid = layout::build_layout(comments.len(), opts.width, opts.height);
    let palette = match opts.preset.card() {
        Some(card) => color::card_palette(card),
        None => color::pastel_palette(&dominant.to_hex()),
    };

    draw_logo_panel(&mut img, grid.center_rect, dominant, opts.logo);

    for (index, (raw, slot)) in comments.iter().zip(&grid.placements).enumerate() {
        let prepared = raw.normalize(index);
        draw_comment_card(
            &mut img,
            slot.rect,
            &prepared,
            dominant,
            &palette,
            &grid,
            opts.face,
        );
    }

    let placed = grid.placements.len();
    let report = RenderReport {
        width: opts.width,
        height: opts.height,
        comments: comments.len(),
        placed,
        overflow: comments.len() - placed,
    };
    (img, report)
}

/// Offset translucent silhouette standing in for a blurred drop shadow.
fn drop_shadow(img: &mut RgbaImage, rect: PixelRect, radius: f32, dy: f32, alpha: f32) {
    let shifted = PixelRect {
        y: rect.y + dy,
        ..rect
    };
    fill_rounded_rect(img, shifted, radius, Paint::translucent(SHADOW, alpha), None);
}

fn draw_logo_panel(img: &mut RgbaImage, rect: PixelRect, dominant: Rgb, logo: Option<&RgbaImage>) {
    let radius = 26.0;
    drop_shadow(img, rect, radius, 8.0, 0.12);
    fill_rounded_rect(
        img,
        rect,
        radius,
        Paint::opaque(dominant.offset(-10)),
        Some(Paint::opaque(dominant.offset(20))),
    );

    let Some(logo) = logo else { return };
    let pad = 28.0;
    let box_w = rect.w - pad * 2.0;
    let box_h = rect.h - pad * 2.0;
    if box_w < 1.0 || box_h < 1.0 || logo.width() == 0 || logo.height() == 0 {
        return;
    }
    let scale = (box_w / logo.width() as f32).min(box_h / logo.height() as f32);
    let w = ((logo.width() as f32 * scale) as u32).max(1);
    let h = ((logo.height() as f32 * scale) as u32).max(1);
    let x = rect.x + (rect.w - w as f32) / 2.0;
    let y = rect.y + (rect.h - h as f32) / 2.0;
    let scaled = imageops::resize(logo, w, h, imageops::FilterType::Triangle);
    imageops::overlay(img, &scaled, x.round() as i64, y.round() as i64);
}

#[allow(clippy::too_many_arguments)]
fn draw_comment_card(
    img: &mut RgbaImage,
    rect: PixelRect,
    data: &Comment,
    dominant: Rgb,
    palette: &[String; 5],
    grid: &Layout,
    typeface: &TypeFace,
) {
    let scale = (grid.cell_h / BASE_CELL_H).clamp(0.65, 1.0);
    let radius = (18.0 * scale).round();
    let slot = (hash::utf16_len(&data.author) + hash::utf16_len(&data.text)) % palette.len();
    let fill = color::normalize_color(&palette[slot]);

    drop_shadow(img, rect, radius, 6.0, 0.1);
    fill_rounded_rect(
        img,
        rect,
        radius,
        Paint::opaque(fill),
        Some(Paint::translucent(SHADOW, 0.05)),
    );

    let pad = (16.0 * scale).round();
    let content_x = rect.x + pad;
    let content_y = rect.y + pad;
    let content_w = rect.w - pad * 2.0;

    // Avatar with initials.
    let avatar_r = (18.0 * scale).round();
    let avatar_x = content_x + avatar_r;
    let avatar_y = content_y + avatar_r;
    fill_circle(img, avatar_x, avatar_y, avatar_r, Paint::opaque(dominant.offset(10)));
    typeface.draw_text_centered(
        img,
        avatar_x,
        avatar_y,
        &data.initials(),
        (14.0 * scale).round() as u32,
        Rgb { r: 255, g: 255, b: 255 },
        true,
    );

    // Author line.
    let author_size = (15.0 * scale).round() as u32;
    let author = truncate_text(typeface, &data.author, content_w - 80.0, author_size);
    typeface.draw_text(
        img,
        content_x + avatar_r * 2.0 + 8.0,
        content_y + 2.0,
        &author,
        author_size,
        INK_TEXT,
        true,
    );

    // Corner accent mark.
    let mark_size = (14.0 * scale).round();
    fill_diamond(
        img,
        rect.x + rect.w - pad - 12.0 + mark_size / 2.0,
        content_y + 2.0 + mark_size / 2.0,
        mark_size * 0.4,
        Paint::opaque(dominant.offset(20)),
    );

    // Comment body.
    let comment_y = content_y + (48.0 * scale).round();
    let comment_h = rect.h - pad * 2.0 - (56.0 * scale).round();
    let fitted = text::fit_text(typeface, &data.text, content_w, comment_h, scale);
    for (i, line) in fitted.lines.iter().enumerate() {
        typeface.draw_text(
            img,
            content_x,
            comment_y + (i as u32 * fitted.line_height) as f32,
            line,
            fitted.font_size,
            INK_TEXT,
            false,
        );
    }

    // Reaction pills.
    let reaction_y = rect.y + rect.h - pad - (26.0 * scale).round();
    draw_reaction_pill(
        img,
        typeface,
        content_x,
        reaction_y,
        PillMark::Disc,
        &data.reaction_label(),
        dominant,
        scale,
    );
    let second = hash::sample(&data.author, &hash::utf16_len(&data.text).to_string(), 0, 2) == 0;
    if second {
        draw_reaction_pill(
            img,
            typeface,
            content_x + (74.0 * scale).round(),
            reaction_y,
            PillMark::Diamond,
            "1",
            dominant,
            scale,
        );
    }
}

/// Marks standing in for the pill glyphs.
#[derive(Clone, Copy)]
enum PillMark {
    Disc,
    Diamond,
}

#[allow(clippy::too_many_arguments)]
fn draw_reaction_pill(
    img: &mut RgbaImage,
    typeface: &TypeFace,
    x: f32,
    y: f32,
    mark: PillMark,
    count: &str,
    dominant: Rgb,
    scale: f32,
) {
    let w = (60.0 * scale).round();
    let h = (24.0 * scale).round();
    let r = (12.0 * scale).round();
    let hex = dominant.to_hex();
    let fill = color::normalize_color(&color::tint(&hex, 0.75));
    let border = color::normalize_color(&color::tint(&hex, 0.6));
    fill_rounded_rect(
        img,
        PixelRect { x, y, w, h },
        r,
        Paint::opaque(fill),
        Some(Paint::opaque(border)),
    );

    let mark_r = 5.0 * scale;
    let mark_x = x + (8.0 * scale).round() + mark_r;
    let mark_y = y + h / 2.0 + 1.0;
    match mark {
        PillMark::Disc => fill_circle(img, mark_x, mark_y, mark_r, Paint::opaque(INK_PILL)),
        PillMark::Diamond => fill_diamond(img, mark_x, mark_y, mark_r, Paint::opaque(INK_PILL)),
    }

    let count_size = (14.0 * scale).round() as u32;
    typeface.draw_text(
        img,
        x + (26.0 * scale).round(),
        y + h / 2.0 + 1.0 - count_size as f32 / 2.0,
        count,
        count_size,
        INK_PILL,
        false,
    );
}

/// Drop characters from the end until the text fits `max_w`, then swap the
/// last kept character for an ellipsis. Untouched text comes back as-is.
fn truncate_text(typeface: &TypeFace, full: &str, max_w: f32, font_size: u32) -> String {
    let mut t = full.to_string();
    while typeface.measure(&t, font_size) > max_w && t.chars().count() > 1 {
        t.pop();
    }
    if t == full {
        t
    } else {
        t.pop();
        format!("{t}\u{2026}")
    }
}
