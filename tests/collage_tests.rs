//! End-to-end rendering tests over the public API.

use pretty_assertions::assert_eq;

use ikonograf::comment::{CollageInput, RawComment};
use ikonograf::preset::{Preset, builtin_presets};
use ikonograf::scene::{AspectRatio, SceneOptions, face::TypeFace, render};

fn sample_comments(n: usize) -> Vec<RawComment> {
    let docs: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "author": format!("Commenter {i}"),
                "comment": format!("This is comment {i}, with enough words to wrap onto a couple of lines."),
                "numberOfReaction": i * 3,
            })
        })
        .collect();
    docs.into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect()
}

fn opts<'a>(preset: &'a Preset, face: &'a TypeFace, w: u32, h: u32) -> SceneOptions<'a> {
    SceneOptions {
        width: w,
        height: h,
        preset,
        logo: None,
        face,
    }
}

#[test]
fn render_is_byte_identical_across_runs() {
    let presets = builtin_presets();
    let face = TypeFace::Bitmap;
    let comments = sample_comments(12);
    let (a, ra) = render(&comments, &opts(&presets[0], &face, 960, 540));
    let (b, rb) = render(&comments, &opts(&presets[0], &face, 960, 540));
    assert_eq!(ra, rb);
    assert_eq!(a.into_raw(), b.into_raw());
}

#[test]
fn report_conserves_every_comment() {
    let presets = builtin_presets();
    let face = TypeFace::Bitmap;
    for count in [0, 1, 7, 30, 80] {
        let comments = sample_comments(count);
        let (_, report) = render(&comments, &opts(&presets[1], &face, 480, 270));
        assert_eq!(report.comments, count);
        assert_eq!(report.placed + report.overflow, count);
    }
}

#[test]
fn empty_input_still_draws_the_center_panel() {
    let presets = builtin_presets();
    let face = TypeFace::Bitmap;
    let (img, report) = render(&[], &opts(&presets[0], &face, 480, 270));
    assert_eq!(report.placed, 0);
    // The panel fill differs from the gradient, so the canvas cannot be a
    // pure two-color ramp.
    let center = img.get_pixel(240, 135);
    let corner = img.get_pixel(2, 2);
    assert_ne!(center, corner);
}

#[test]
fn card_and_pastel_palettes_produce_different_collages() {
    let face = TypeFace::Bitmap;
    let with_card = builtin_presets().remove(0);
    let mut without_card = with_card.clone();
    without_card.card_color = None;
    let comments = sample_comments(6);
    let (a, _) = render(&comments, &opts(&with_card, &face, 480, 270));
    let (b, _) = render(&comments, &opts(&without_card, &face, 480, 270));
    assert_ne!(a.into_raw(), b.into_raw());
}

#[test]
fn full_document_parses_and_renders() {
    let document: CollageInput = serde_json::from_str(
        r#"{
            "comments": [
                {"author": "Ola", "comment": "Świetny pomysł!", "numberOfReaction": 21},
                {"author": "", "comment": "anonymous praise"},
                {"author": "Marek", "comment": 7, "numberOfReaction": "many"},
                {}
            ]
        }"#,
    )
    .unwrap();
    let presets = builtin_presets();
    let face = TypeFace::Bitmap;
    let (img, report) = render(&document.comments, &opts(&presets[5], &face, 480, 270));
    assert_eq!(report.comments, 4);
    assert_eq!(report.placed, 4);
    assert_eq!(img.dimensions(), (480, 270));
}

#[test]
fn aspect_ratios_drive_canvas_dimensions() {
    let presets = builtin_presets();
    let face = TypeFace::Bitmap;
    let (w, h) = "3:4".parse::<AspectRatio>().unwrap().dimensions();
    let comments = sample_comments(3);
    let (img, report) = render(&comments, &opts(&presets[0], &face, w, h));
    assert_eq!(img.dimensions(), (1350, 1800));
    assert_eq!((report.width, report.height), (1350, 1800));
}

#[test]
fn tall_canvas_with_many_comments_renders() {
    let presets = builtin_presets();
    let face = TypeFace::Bitmap;
    let comments = sample_comments(60);
    let (img, report) = render(&comments, &opts(&presets[9], &face, 540, 960));
    assert_eq!(img.dimensions(), (540, 960));
    assert_eq!(report.placed + report.overflow, 60);
}
