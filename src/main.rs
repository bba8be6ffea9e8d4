//! # Ikonograf CLI
//!
//! Command-line interface for rendering comment collages.
//!
//! ## Usage
//!
//! ```bash
//! # Render comments.json with the first builtin preset
//! ikonograf render comments.json
//!
//! # Pick a preset by name and a portrait canvas
//! ikonograf render comments.json --preset "Emerald Forest" --aspect 3:4
//!
//! # Use a TTF face and a custom output path
//! ikonograf render comments.json --font Inter.ttf -o collage.png
//!
//! # List available presets
//! ikonograf presets
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ikonograf::{
    IkonografError,
    comment::CollageInput,
    preset,
    scene::{AspectRatio, SceneOptions, face::TypeFace, render},
};

/// Ikonograf - deterministic comment collage renderer
#[derive(Parser, Debug)]
#[command(name = "ikonograf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a collage from a JSON comment document
    Render {
        /// Input JSON file with comments and an optional logo path
        input: PathBuf,

        /// Output image path (PNG or JPEG by extension)
        #[arg(short, long, default_value = "ikonografika.png")]
        output: PathBuf,

        /// Preset index or name
        #[arg(long, default_value = "0")]
        preset: String,

        /// Canvas aspect ratio: 16:9, 4:3, 1:1, 3:4 or 9:16
        #[arg(long, default_value = "16:9")]
        aspect: String,

        /// Logo image for the center panel (overrides the input document)
        #[arg(long)]
        logo: Option<PathBuf>,

        /// TTF/OTF font file (builtin bitmap face when omitted)
        #[arg(long)]
        font: Option<PathBuf>,

        /// JSON file with custom presets
        #[arg(long, value_name = "FILE")]
        presets_file: Option<PathBuf>,
    },

    /// List available presets
    Presets {
        /// JSON file with custom presets
        #[arg(long, value_name = "FILE")]
        presets_file: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), IkonografError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            preset,
            aspect,
            logo,
            font,
            presets_file,
        } => {
            let data = std::fs::read_to_string(&input)?;
            let document: CollageInput = serde_json::from_str(&data)?;

            let presets = preset::load_presets(presets_file.as_deref())?;
            let selected = preset::find_preset(&presets, &preset)?;

            let ratio: AspectRatio = aspect.parse()?;
            let (width, height) = ratio.dimensions();

            let face = match font {
                Some(path) => TypeFace::from_ttf_path(&path)?,
                None => TypeFace::Bitmap,
            };

            let logo_path = logo.or_else(|| document.logo.clone().map(PathBuf::from));
            let logo_img = match &logo_path {
                Some(path) => Some(
                    image::open(path)
                        .map_err(|e| IkonografError::Image(format!("{}: {e}", path.display())))?
                        .to_rgba8(),
                ),
                None => None,
            };

            let opts = SceneOptions {
                width,
                height,
                preset: selected,
                logo: logo_img.as_ref(),
                face: &face,
            };
            let (img, report) = render(&document.comments, &opts);

            save_image(&img, &output)?;

            println!(
                "Wrote {} ({}x{}) | comments: {} | placed: {}",
                output.display(),
                report.width,
                report.height,
                report.comments,
                report.placed,
            );
            if report.overflow > 0 {
                println!("Comments that did not fit: {}", report.overflow);
            }
            Ok(())
        }

        Commands::Presets { presets_file } => {
            let presets = preset::load_presets(presets_file.as_deref())?;
            for (idx, p) in presets.iter().enumerate() {
                let card = p.card_color.as_deref().unwrap_or("-");
                println!("{idx:>2}  {}  dominant {}  card {}", p.name, p.dominant_color, card);
            }
            Ok(())
        }
    }
}

/// Save as PNG or JPEG by extension. JPEG has no alpha channel, so the
/// canvas is flattened first.
fn save_image(img: &image::RgbaImage, path: &PathBuf) -> Result<(), IkonografError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let result = if ext == "jpg" || ext == "jpeg" {
        image::DynamicImage::ImageRgba8(img.clone()).to_rgb8().save(path)
    } else {
        img.save(path)
    };
    result.map_err(|e| IkonografError::Image(format!("{}: {e}", path.display())))
}
