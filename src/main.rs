//! Placeholder Ball Texture Generator
//!
//! Reads a scene JSON listing sphere objects (name + normalized material
//! color), writes one `<name>.bmp` per object into the output directory and
//! maintains `textures_manifest.json` there. Textures already on disk are
//! never rewritten, so re-running after adding scene entries only fills the
//! gaps.
//!
//! Example:
//!   cargo run -- \
//!     --scene assets/scene/objects/sphere.json \
//!     --out-dir assets/textures

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ball_textures::{run, GenOptions};

#[derive(Parser, Debug)]
#[command(about = "Generate placeholder ball textures from a scene file", version, long_about = None)]
struct Args {
    /// Scene description listing the balls to texture.
    #[arg(long, default_value = "assets/scene/objects/sphere.json")]
    scene: PathBuf,
    /// Directory receiving the .bmp files and the manifest.
    #[arg(long, default_value = "assets/textures")]
    out_dir: PathBuf,
    /// Preferred TrueType font for the numerals; falls back to a built-in
    /// bitmap font when unavailable.
    #[arg(long, default_value = "arial.ttf")]
    font: PathBuf,
    #[arg(long, default_value_t = 100.0)]
    font_size: f32,
    /// Label used for names without a numeric token.
    #[arg(long, default_value = "?")]
    placeholder: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let summary = run(&GenOptions {
        scene_path: args.scene,
        out_dir: args.out_dir,
        font_path: args.font,
        font_size: args.font_size,
        placeholder: args.placeholder,
    })?;
    println!(
        "Textures: {} generated, {} already present, {} skipped; manifest {}.",
        summary.generated,
        summary.reused,
        summary.skipped,
        if summary.manifest_written { "updated" } else { "unchanged" }
    );
    Ok(())
}
