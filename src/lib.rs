//! # Ikonograf
//!
//! Deterministic comment-collage renderer. A JSON list of comments goes in,
//! a finished "ikonografika" image comes out: cards packed on a grid around
//! a central logo panel, colored from a preset, with every layout and style
//! choice derived from string hashes so identical input always produces
//! identical pixels.
//!
//! ## Quick start
//!
//! ```
//! use ikonograf::preset::builtin_presets;
//! use ikonograf::scene::{SceneOptions, face::TypeFace, render};
//!
//! let presets = builtin_presets();
//! let face = TypeFace::Bitmap;
//! let opts = SceneOptions {
//!     width: 480,
//!     height: 270,
//!     preset: &presets[0],
//!     logo: None,
//!     face: &face,
//! };
//! let (image, report) = render(&[], &opts);
//! assert_eq!(image.dimensions(), (480, 270));
//! assert_eq!(report.comments, 0);
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`hash`] | Deterministic sampling from string seeds |
//! | [`comment`] | Input parsing and comment normalization |
//! | [`layout`] | Grid bin-packing around the reserved center panel |
//! | [`text`] | Font-size ladder fitting and word wrap |
//! | [`color`] | Hex color math and card palettes |
//! | [`preset`] | Named color schemes, builtin and file-loaded |
//! | [`scene`] | Composition: background, logo panel, cards, pills |
//! | [`error`] | Error types |

pub mod color;
pub mod comment;
pub mod error;
pub mod hash;
pub mod layout;
pub mod preset;
pub mod scene;
pub mod text;

pub use error::IkonografError;
pub use layout::{Layout, build_layout};
pub use scene::{AspectRatio, RenderReport, SceneOptions, render};
