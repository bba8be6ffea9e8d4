//! Multi-pass text fitting for comment cards.
//!
//! Given a text string and a bounding box, the fitter walks a descending
//! font-size ladder and accepts the largest size whose greedily-wrapped lines
//! fit the box vertically. When nothing fits it wraps at the smallest size
//! and truncates the last allowed line with an ellipsis trimmed to the box
//! width.
//!
//! Width measurement is an injected capability ([`Measure`]) so the fitter
//! has no dependency on any rendering context and tests run headlessly.

/// Width measurement for a run of text at a given font size, treated as a
/// pure function of `(text, font_size)`.
pub trait Measure {
    /// Rendered width of `text` in pixels at `font_size` pixels.
    fn text_width(&self, text: &str, font_size: u32) -> f32;
}

/// Appended to the last line when the text is truncated.
pub const ELLIPSIS: char = '\u{2026}';

/// Extra pixels of leading per line: line height = font size + 4.
pub const LINE_SPACING: u32 = 4;

/// Base font sizes tried largest-first, before scaling.
const FONT_LADDER: [u32; 4] = [14, 13, 12, 11];

/// Floor for scaled ladder entries.
const MIN_FONT_SIZE: u32 = 10;

/// A wrapped (and possibly truncated) text block ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedText {
    pub font_size: u32,
    pub line_height: u32,
    /// Lines top to bottom; never more than `floor(box_h / line_height)`.
    pub lines: Vec<String>,
}

impl FittedText {
    /// Total height of the block in pixels.
    pub fn height(&self) -> u32 {
        self.lines.len() as u32 * self.line_height
    }
}

/// Fit `text` into a `box_w` x `box_h` box.
///
/// The ladder is `[14, 13, 12, 11]` scaled by `scale`, rounded, floored at
/// 10. The first size whose wrapped line count fits vertically wins; if none
/// does, the text is truncated at the smallest size (ellipsis on the last
/// kept line, trimmed until it fits the width) and re-wrapped.
///
/// A single word wider than `box_w` still gets its own line — there is no
/// mid-word breaking, so such a line can exceed the box width.
pub fn fit_text(measure: &dyn Measure, text: &str, box_w: f32, box_h: f32, scale: f32) -> FittedText {
    let sizes: Vec<u32> = FONT_LADDER
        .iter()
        .map(|&s| (((s as f32) * scale).round() as u32).max(MIN_FONT_SIZE))
        .collect();

    for &size in &sizes {
        let line_height = size + LINE_SPACING;
        let lines = wrap_words(measure, text, size, box_w);
        if lines.len() as f32 * line_height as f32 <= box_h {
            return FittedText {
                font_size: size,
                line_height,
                lines,
            };
        }
    }

    // Nothing fit: truncate at the smallest size and wrap what remains.
    let size = sizes[sizes.len() - 1];
    let line_height = size + LINE_SPACING;
    let clipped = truncate_to_fit(measure, text, size, box_w, box_h, line_height);
    let mut lines = wrap_words(measure, &clipped, size, box_w);
    let max_lines = max_drawable_lines(box_h, line_height);
    lines.truncate(max_lines);
    FittedText {
        font_size: size,
        line_height,
        lines,
    }
}

/// Lines that fit a box of height `box_h`: zero when the box is shorter than
/// a single line.
fn max_drawable_lines(box_h: f32, line_height: u32) -> usize {
    let n = (box_h / line_height as f32).floor();
    if n.is_sign_negative() { 0 } else { n as usize }
}

/// Greedy word wrap: add one word at a time, breaking when the trial line
/// (measured with its trailing space, as a canvas would draw it) exceeds
/// `box_w` and the line already holds a word.
fn wrap_words(measure: &dyn Measure, text: &str, font_size: u32, box_w: f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    for (i, word) in words.iter().enumerate() {
        let trial = format!("{line}{word} ");
        if measure.text_width(&trial, font_size) > box_w && i > 0 {
            lines.push(line.trim().to_string());
            line = format!("{word} ");
        } else {
            line = trial;
        }
    }
    lines.push(line.trim().to_string());
    lines
}

/// Truncate `text` so it wraps into at most the number of lines the box
/// allows at `font_size`.
///
/// The last kept line gets an ellipsis and loses characters from its end one
/// at a time until it fits `box_w`. Kept lines are joined with a single space
/// and re-wrapped by the caller; this can shift breaks for multi-line
/// truncations and is preserved behavior, not an accident to fix.
fn truncate_to_fit(
    measure: &dyn Measure,
    text: &str,
    font_size: u32,
    box_w: f32,
    box_h: f32,
    line_height: u32,
) -> String {
    let lines = wrap_words(measure, text, font_size, box_w);
    let max_lines = max_drawable_lines(box_h, line_height).max(1);
    if lines.len() <= max_lines {
        return text.to_string();
    }

    let mut kept = lines[..max_lines].to_vec();
    let mut last = kept.pop().unwrap_or_default();
    while measure.text_width(&format!("{last}{ELLIPSIS}"), font_size) > box_w
        && last.chars().count() > 1
    {
        last.pop();
    }
    kept.push(format!("{last}{ELLIPSIS}"));
    kept.join(" ")
}
