//! Test fixture loader for PubOracle golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
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

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
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
    paths.sort();
    paths
}

/// Relative path (from the fixtures root) of a listed fixture file.
pub fn relative_fixture_path(path: &std::path::Path) -> String {
    let root = fixtures_root();
    path.strip_prefix(&root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// `[item, count]` pair as stored in the golden files.
pub type CountPair = (String, u64);

/// Golden similarity-merge scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeScenario {
    pub description: String,
    /// Raw items, counted in order to build the occurrence table.
    pub items: Vec<String>,
    pub top_n: usize,
    pub look_ahead: usize,
    pub threshold: f64,
    pub similarity: String,
    pub expected_ranked: Vec<CountPair>,
    pub expected_excluded: Vec<CountPair>,
}

/// `[source, target, weight]` edge as stored in the golden files.
pub type EdgeTriple = (String, String, f64);

/// Golden co-occurrence graph scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphScenario {
    pub description: String,
    pub vocabulary: Vec<String>,
    pub records: Vec<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub allow_loops: bool,
    #[serde(default)]
    pub directed: bool,
    pub combine_weights: Option<String>,
    pub expected_edges: Vec<EdgeTriple>,
    #[serde(default)]
    pub expected_isolated: Vec<String>,
}

/// Load every merge scenario under `golden/merge`.
pub fn merge_scenarios() -> Vec<(String, MergeScenario)> {
    list_fixtures("golden/merge")
        .iter()
        .map(|p| {
            let rel = relative_fixture_path(p);
            let scenario = load_fixture(&rel);
            (rel, scenario)
        })
        .collect()
}

/// Load every graph scenario under `golden/graph`.
pub fn graph_scenarios() -> Vec<(String, GraphScenario)> {
    list_fixtures("golden/graph")
        .iter()
        .map(|p| {
            let rel = relative_fixture_path(p);
            let scenario = load_fixture(&rel);
            (rel, scenario)
        })
        .collect()
}
