//! Test fixture loader for Causeway golden graphs.
//!
//! Provides typed deserialization of the fixture JSON files and helper functions
//! for loading them in tests and benches across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

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

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
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

/// Load every golden graph under `graphs/`.
pub fn load_graph_fixtures() -> Vec<GraphFixture> {
    list_fixtures("graphs")
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}

// --- Typed fixtures ---

/// A golden graph together with the answers every query must produce on it.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub graph: FixtureGraph,
    #[serde(default)]
    pub d_separation: Vec<SeparationCase>,
    #[serde(default)]
    pub backdoor: Vec<CriterionCase>,
    #[serde(default)]
    pub frontdoor: Vec<CriterionCase>,
    #[serde(default)]
    pub identification: Vec<IdentificationCase>,
}

/// Same shape as the engine's graph spec, kept separate so fixtures do not
/// depend on the crates under test.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureGraph {
    pub variables: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub latent: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeparationCase {
    pub x: Vec<String>,
    pub y: Vec<String>,
    #[serde(default)]
    pub z: Vec<String>,
    pub expected: bool,
}

/// `set` is the adjustment set (backdoor) or mediator set (frontdoor).
#[derive(Debug, Clone, Deserialize)]
pub struct CriterionCase {
    pub x: Vec<String>,
    pub y: Vec<String>,
    #[serde(default)]
    pub set: Vec<String>,
    pub expected: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentificationCase {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub max_size: usize,
    pub expected: ExpectedIdentification,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedIdentification {
    /// "backdoor", "frontdoor", or "unidentifiable".
    pub kind: String,
    #[serde(default)]
    pub set: Vec<String>,
}
