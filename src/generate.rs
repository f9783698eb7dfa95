//! The batch loop: for each scene record either confirm an existing texture
//! on disk or synthesize and write a new one, then persist the manifest once
//! at the end if anything changed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::font::LabelFont;
use crate::label::label_for_name;
use crate::manifest::Manifest;
use crate::scene;
use crate::texture;

pub struct GenOptions {
    pub scene_path: PathBuf,
    pub out_dir: PathBuf,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub placeholder: String,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Textures rasterized and written this run.
    pub generated: usize,
    /// Records whose texture already existed on disk.
    pub reused: usize,
    /// Malformed records skipped with a warning.
    pub skipped: usize,
    pub manifest_written: bool,
}

/// Run the whole batch. Scene parse failures are fatal and happen before
/// anything is created; everything after that is per-record.
pub fn run(opts: &GenOptions) -> Result<RunSummary> {
    let entries = scene::load_scene(&opts.scene_path)?;

    // Loading the font up front keeps the fallback notice ahead of the
    // per-ball output, and avoids re-reading it for every texture.
    let font = LabelFont::load(&opts.font_path, opts.font_size);
    let mut manifest = Manifest::load(&opts.out_dir);
    let mut summary = RunSummary::default();

    fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("create output dir {:?}", opts.out_dir))?;

    for (i, value) in entries.into_iter().enumerate() {
        let record = match scene::parse_record(value) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("warning: skipping scene entry {i}: {e:#}");
                summary.skipped += 1;
                continue;
            }
        };

        let relative_path = format!("{}.bmp", record.name);
        let target = opts.out_dir.join(&relative_path);

        if target.exists() {
            // Never rewrite an existing texture; repair the manifest entry
            // if it disagrees.
            manifest.record(&record.name, &relative_path);
            summary.reused += 1;
            continue;
        }

        let label = label_for_name(&record.name, &opts.placeholder);
        let img = texture::synthesize(&label, record.material.color, &font);
        img.save(&target)
            .with_context(|| format!("write texture {:?}", target))?;

        manifest.record(&record.name, &relative_path);
        // A file hit the disk, so the manifest is rewritten even when the
        // mapping itself already carried this entry.
        manifest.mark_changed();
        summary.generated += 1;
    }

    summary.manifest_written = manifest.save_if_changed()?;
    Ok(summary)
}
