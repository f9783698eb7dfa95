//! Texture manifest: persisted name -> relative path mapping used to avoid
//! regenerating textures across runs.
//!
//! A missing, empty or malformed manifest is not fatal; the run restarts from
//! an empty mapping and rebuilds entries as it goes.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const MANIFEST_FILE: &str = "textures_manifest.json";

#[derive(Debug, Default)]
pub struct Manifest {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    changed: bool,
}

impl Manifest {
    /// Load the manifest from `out_dir`, falling back to an empty mapping
    /// with a console notice when the file is absent or unparseable.
    pub fn load(out_dir: &Path) -> Self {
        let path = out_dir.join(MANIFEST_FILE);
        let mut entries = BTreeMap::new();
        match fs::read_to_string(&path) {
            Ok(txt) => {
                let txt = txt.trim();
                if !txt.is_empty() {
                    match serde_json::from_str::<BTreeMap<String, String>>(txt) {
                        Ok(map) => entries = map,
                        Err(_) => println!("Invalid JSON in manifest, initializing as empty."),
                    }
                }
            }
            Err(_) => println!("Manifest not found, will create new one if needed."),
        }
        Manifest { path, entries, changed: false }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Record `name -> relative_path`, flagging the run as changed when the
    /// entry is new or differs from what was loaded.
    pub fn record(&mut self, name: &str, relative_path: &str) {
        if self.get(name) != Some(relative_path) {
            self.entries.insert(name.to_string(), relative_path.to_string());
            self.changed = true;
        }
    }

    /// Force a manifest write at the end of the run even when the mapping is
    /// textually identical (a texture was re-generated on disk).
    pub fn mark_changed(&mut self) {
        self.changed = true;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the manifest back, pretty-printed, only when something changed.
    /// Returns whether a write happened.
    pub fn save_if_changed(&self) -> Result<bool> {
        if !self.changed {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).with_context(|| format!("write manifest {:?}", self.path))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_empty_and_skips_save() {
        let tmp = tempfile::tempdir().unwrap();
        let m = Manifest::load(tmp.path());
        assert!(m.is_empty());
        assert!(!m.save_if_changed().unwrap());
        assert!(!tmp.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn empty_and_corrupt_files_reset_to_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);

        fs::write(&path, "  \n").unwrap();
        assert!(Manifest::load(tmp.path()).is_empty());

        fs::write(&path, "{ broken").unwrap();
        assert!(Manifest::load(tmp.path()).is_empty());
    }

    #[test]
    fn record_tracks_changes_and_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let mut m = Manifest::load(tmp.path());
        m.record("ball_7", "ball_7.bmp");
        assert!(m.is_changed());
        assert!(m.save_if_changed().unwrap());

        let mut reloaded = Manifest::load(tmp.path());
        assert_eq!(reloaded.get("ball_7"), Some("ball_7.bmp"));
        assert_eq!(reloaded.len(), 1);

        // Re-recording the same entry is a no-op
        reloaded.record("ball_7", "ball_7.bmp");
        assert!(!reloaded.is_changed());
        assert!(!reloaded.save_if_changed().unwrap());
    }
}
