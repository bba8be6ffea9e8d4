//! Raster drawing primitives over an RGBA canvas.
//!
//! Rounded rectangles, circles and diamond marks are rendered from signed
//! distance fields, giving one pixel of analytic anti-aliasing without any
//! supersampling. The canvas is always opaque; alpha on a [`Paint`] only
//! controls source-over blending against what is already there.

use image::{Rgba, RgbaImage};

use crate::color::Rgb;
use crate::layout::PixelRect;

/// A solid color with a blend factor.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f32,
}

impl Paint {
    pub fn opaque(color: Rgb) -> Self {
        Self { color, alpha: 1.0 }
    }

    pub fn translucent(color: Rgb, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

/// Source-over blend of one pixel. Out-of-bounds coordinates are ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgb, alpha: f32) {
    if alpha <= 0.0 || x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let a = alpha.min(1.0);
    let px = img.get_pixel_mut(x as u32, y as u32);
    let Rgba([dr, dg, db, _]) = *px;
    let mix = |src: u8, dst: u8| -> u8 {
        (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8
    };
    *px = Rgba([
        mix(color.r, dr),
        mix(color.g, dg),
        mix(color.b, db),
        255,
    ]);
}

/// Axis-aligned rectangle fill, no anti-aliasing.
pub fn fill_rect(img: &mut RgbaImage, rect: PixelRect, paint: Paint) {
    let x0 = rect.x.floor().max(0.0) as i64;
    let y0 = rect.y.floor().max(0.0) as i64;
    let x1 = (rect.x + rect.w).ceil() as i64;
    let y1 = (rect.y + rect.h).ceil() as i64;
    for y in y0..y1 {
        for x in x0..x1 {
            blend_pixel(img, x, y, paint.color, paint.alpha);
        }
    }
}

/// Signed distance from a pixel center to the boundary of a rounded
/// rectangle. Negative inside.
fn rounded_rect_sdf(px: f32, py: f32, rect: PixelRect, radius: f32) -> f32 {
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let cx = rect.x + rect.w / 2.0;
    let cy = rect.y + rect.h / 2.0;
    let qx = (px - cx).abs() - (rect.w / 2.0 - r);
    let qy = (py - cy).abs() - (rect.h / 2.0 - r);
    let ax = qx.max(0.0);
    let ay = qy.max(0.0);
    (ax * ax + ay * ay).sqrt() + qx.max(qy).min(0.0) - r
}

/// Fill a rounded rectangle, optionally tracing a one-pixel border in a
/// second paint.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    rect: PixelRect,
    radius: f32,
    fill: Paint,
    border: Option<Paint>,
) {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return;
    }
    let x0 = (rect.x - 1.0).floor().max(0.0) as i64;
    let y0 = (rect.y - 1.0).floor().max(0.0) as i64;
    let x1 = (rect.x + rect.w + 1.0).ceil() as i64;
    let y1 = (rect.y + rect.h + 1.0).ceil() as i64;
    for y in y0..y1 {
        for x in x0..x1 {
            let sdf = rounded_rect_sdf(x as f32 + 0.5, y as f32 + 0.5, rect, radius);
            let coverage = (0.5 - sdf).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(img, x, y, fill.color, fill.alpha * coverage);
            }
            if let Some(stroke) = border {
                let edge = (1.0 - sdf.abs()).clamp(0.0, 1.0);
                if edge > 0.0 {
                    blend_pixel(img, x, y, stroke.color, stroke.alpha * edge);
                }
            }
        }
    }
}

/// Anti-aliased disc.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, paint: Paint) {
    if radius <= 0.0 {
        return;
    }
    let x0 = (cx - radius - 1.0).floor().max(0.0) as i64;
    let y0 = (cy - radius - 1.0).floor().max(0.0) as i64;
    let x1 = (cx + radius + 1.0).ceil() as i64;
    let y1 = (cy + radius + 1.0).ceil() as i64;
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let sdf = (dx * dx + dy * dy).sqrt() - radius;
            let coverage = (0.5 - sdf).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(img, x, y, paint.color, paint.alpha * coverage);
            }
        }
    }
}

/// Anti-aliased diamond (a square rotated 45 degrees), used as the accent
/// mark on reaction pills.
pub fn fill_diamond(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, paint: Paint) {
    if radius <= 0.0 {
        return;
    }
    let x0 = (cx - radius - 1.0).floor().max(0.0) as i64;
    let y0 = (cy - radius - 1.0).floor().max(0.0) as i64;
    let x1 = (cx + radius + 1.0).ceil() as i64;
    let y1 = (cy + radius + 1.0).ceil() as i64;
    // L1 distance; scaled so the anti-aliased band stays about a pixel wide.
    let scale = std::f32::consts::FRAC_1_SQRT_2;
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = (x as f32 + 0.5 - cx).abs();
            let dy = (y as f32 + 0.5 - cy).abs();
            let sdf = (dx + dy - radius) * scale;
            let coverage = (0.5 - sdf).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend_pixel(img, x, y, paint.color, paint.alpha * coverage);
            }
        }
    }
}

/// Fill the whole canvas with a diagonal gradient from `from` (top-left) to
/// `to` (bottom-right).
pub fn diagonal_gradient(img: &mut RgbaImage, from: Rgb, to: Rgb) {
    let w = img.width() as f32;
    let h = img.height() as f32;
    let denom = w * w + h * h;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let t = (x as f32 * w + y as f32 * h) / denom;
            let c = from.lerp(to, t);
            img.put_pixel(x, y, Rgba([c.r, c.g, c.b, 255]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32, color: Rgb) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([color.r, color.g, color.b, 255]))
    }

    const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_blend_opaque_replaces() {
        let mut img = canvas(4, 4, WHITE);
        blend_pixel(&mut img, 1, 1, BLACK, 1.0);
        assert_eq!(*img.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_blend_half_alpha_mixes() {
        let mut img = canvas(2, 2, WHITE);
        blend_pixel(&mut img, 0, 0, BLACK, 0.5);
        let Rgba([r, g, b, a]) = *img.get_pixel(0, 0);
        assert_eq!((r, g, b, a), (128, 128, 128, 255));
    }

    #[test]
    fn test_blend_out_of_bounds_ignored() {
        let mut img = canvas(2, 2, WHITE);
        blend_pixel(&mut img, -1, 0, BLACK, 1.0);
        blend_pixel(&mut img, 0, 5, BLACK, 1.0);
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_rounded_rect_fills_center_skips_corner() {
        let mut img = canvas(40, 40, WHITE);
        let rect = PixelRect { x: 4.0, y: 4.0, w: 32.0, h: 32.0 };
        fill_rounded_rect(&mut img, rect, 10.0, Paint::opaque(BLACK), None);
        // Center is solidly inside.
        assert_eq!(*img.get_pixel(20, 20), Rgba([0, 0, 0, 255]));
        // The rect corner pixel lies outside the rounded boundary.
        assert_eq!(*img.get_pixel(4, 4), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_rounded_rect_border_marks_edge() {
        let mut img = canvas(40, 40, WHITE);
        let rect = PixelRect { x: 4.0, y: 4.0, w: 32.0, h: 32.0 };
        let red = Rgb { r: 255, g: 0, b: 0 };
        fill_rounded_rect(&mut img, rect, 4.0, Paint::opaque(WHITE), Some(Paint::opaque(red)));
        // Pixel centers sit half a pixel off the boundary, so the stroke
        // lands at partial coverage: reddish, not pure red.
        let Rgba([r, g, _, _]) = *img.get_pixel(20, 4);
        assert!(r > 200 && g < 192, "edge pixel not stroked: r={r} g={g}");
        // Deep interior stays fill-colored.
        assert_eq!(*img.get_pixel(20, 20), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_circle_center_and_outside() {
        let mut img = canvas(20, 20, WHITE);
        fill_circle(&mut img, 10.0, 10.0, 6.0, Paint::opaque(BLACK));
        assert_eq!(*img.get_pixel(10, 10), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_diamond_narrower_than_bounding_box() {
        let mut img = canvas(20, 20, WHITE);
        fill_diamond(&mut img, 10.0, 10.0, 6.0, Paint::opaque(BLACK));
        assert_eq!(*img.get_pixel(10, 10), Rgba([0, 0, 0, 255]));
        // The bounding-box corner of a diamond is empty.
        assert_eq!(*img.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut img = canvas(10, 10, BLACK);
        diagonal_gradient(&mut img, WHITE, BLACK);
        let Rgba([tl, ..]) = *img.get_pixel(0, 0);
        let Rgba([br, ..]) = *img.get_pixel(9, 9);
        assert!(tl > br, "gradient not descending: {tl} -> {br}");
    }

    #[test]
    fn test_fill_rect_covers_exact_area() {
        let mut img = canvas(10, 10, WHITE);
        fill_rect(&mut img, PixelRect { x: 2.0, y: 2.0, w: 3.0, h: 3.0 }, Paint::opaque(BLACK));
        assert_eq!(*img.get_pixel(2, 2), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(4, 4), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
    }
}
