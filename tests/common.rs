//! Shared test helpers.

use tempfile::TempDir;

/// Create a temp directory for anchor files.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_workdir() -> TempDir {
    tempfile::Builder::new()
        .prefix("spo_auth_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir")
}
