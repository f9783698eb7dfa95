//! Scene file parsing: a JSON array of sphere records, each with a name and
//! a normalized material color.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SphereRecord {
    pub name: String,
    pub material: Material,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Material {
    pub color: [f32; 3],
}

impl SphereRecord {
    /// Record invariants: non-empty name, finite color components in [0,1].
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            anyhow::bail!("empty object name");
        }
        for (i, c) in self.material.color.iter().enumerate() {
            if !c.is_finite() || !(0.0..=1.0).contains(c) {
                anyhow::bail!("color component {i} out of range for '{}': {c}", self.name);
            }
        }
        Ok(())
    }
}

/// Load the scene file. Failure here is fatal: an unreadable file or a
/// document that is not a JSON array aborts the run before anything is
/// written. Entries come back as raw values so the caller can skip the
/// malformed ones individually.
pub fn load_scene(path: &Path) -> Result<Vec<serde_json::Value>> {
    let txt = fs::read_to_string(path).with_context(|| format!("read scene {:?}", path))?;
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&txt).with_context(|| format!("parse scene {:?}", path))?;
    Ok(entries)
}

/// Decode one raw scene entry, checking invariants.
pub fn parse_record(value: serde_json::Value) -> Result<SphereRecord> {
    let record: SphereRecord =
        serde_json::from_value(value).context("unexpected record shape")?;
    record.validate()?;
    Ok(record)
}
