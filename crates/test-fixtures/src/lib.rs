//! Test fixture loader for relia golden systems.
//!
//! Provides typed deserialization of the fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// A golden system: a JSON system definition plus its known minimal cut sets.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSystem {
    pub description: String,
    /// A system definition in the `relia-graph` JSON format.
    pub system: serde_json::Value,
    /// Expected minimal cut sets with direct source-sink paths ignored.
    pub expected_cut_sets: Vec<Vec<String>>,
    /// Expected minimal cut sets when direct paths make the system uncuttable.
    /// Absent when the system has no direct path.
    #[serde(default)]
    pub expected_cut_sets_uncuttable: Option<Vec<Vec<String>>>,
}

impl GoldenSystem {
    /// Expected cut sets under the "uncuttable" direct-path policy.
    pub fn expected_uncuttable(&self) -> &[Vec<String>] {
        self.expected_cut_sets_uncuttable
            .as_deref()
            .unwrap_or(&self.expected_cut_sets)
    }
}

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.join("golden").exists() {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a golden system by file stem, e.g. `load_golden_system("bridge")`.
pub fn load_golden_system(name: &str) -> GoldenSystem {
    load_fixture(&format!("golden/systems/{name}.json"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// File stems of every golden system.
pub fn golden_system_names() -> Vec<String> {
    list_fixtures("golden/systems")
        .into_iter()
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .collect()
}
