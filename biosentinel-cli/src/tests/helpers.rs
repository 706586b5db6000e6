//! Test helpers for writing feature files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const TIGER_SURGE: &str = r#"{
  "species": "Panthera tigris",
  "latitude": 21.5,
  "longitude": 79.1,
  "recentCount": 300,
  "historicalBaseline": 100,
  "humanProximity": 0.7
}"#;

pub(super) const BURNING_AREA: &str = r#"{
  "fireHotspotCount": 64,
  "vegetationIndex": 0.35,
  "lastUpdate": "2025-06-01T12:00:00"
}"#;

pub(super) const AI_IMAGE: &str = r#"{
  "aiLabel": "AI-Generated",
  "aiConfidence": 0.9,
  "pixelStd": 40.0,
  "edgeDensity": 0.0,
  "uniqueColors": 12,
  "colorRatio": 0.0
}"#;

pub(super) const MUDDY_RIVER: &str = r#"{
  "dominantColor": { "r": 150, "g": 100, "b": 80 },
  "colorVariance": 65,
  "station": { "do": 5.8, "bod": 4.5, "coliform": 12000, "ph": 7.1 }
}"#;

/// Temporary directory that keeps its files alive for a test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn parse_json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("report should be JSON")
}
