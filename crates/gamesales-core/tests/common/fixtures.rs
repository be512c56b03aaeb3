//! Test fixture loading utilities

use std::path::PathBuf;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Path of the sample dataset as a string
pub fn games_csv() -> String {
    fixture_path("games.csv").to_string_lossy().into_owned()
}
