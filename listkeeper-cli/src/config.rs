//! Environment file loading
//!
//! Settings come from flags, then environment variables, then env files.
//! Env files never override variables that are already set.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Names the env file explicitly; skips the default search when set
pub const ENV_FILE_VAR: &str = "LISTKEEPER_ENV_FILE";

/// Searched in order when `LISTKEEPER_ENV_FILE` is unset
const DEFAULT_ENV_FILES: &[&str] = &["config.env", "../config.env", ".env"];

/// Load env files, returning the paths that were read.
///
/// Missing default files are skipped silently. An explicitly named file
/// that cannot be read is an error.
pub fn load_env_files() -> Result<Vec<PathBuf>> {
    if let Ok(explicit) = std::env::var(ENV_FILE_VAR) {
        let path = PathBuf::from(explicit);
        dotenvy::from_path(&path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        return Ok(vec![path]);
    }

    Ok(DEFAULT_ENV_FILES
        .iter()
        .map(Path::new)
        .filter(|path| path.is_file())
        .filter(|path| dotenvy::from_path(path).is_ok())
        .map(Path::to_path_buf)
        .collect())
}

/// Resolve the database URL or explain how to provide one.
pub fn require_database_url(flag: Option<String>) -> Result<String> {
    flag.filter(|url| !url.is_empty()).context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or config.env",
    )
}
