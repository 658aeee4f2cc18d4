//! Environment configuration helpers

use std::path::PathBuf;
use tracing::debug;

/// Load a `.env` file from the current directory or its ancestors
///
/// Variables already set in the process environment win. Returns the path
/// of the file that was loaded, if any.
pub fn load_env_file() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded environment file");
            Some(path)
        }
        Err(e) => {
            debug!("No environment file loaded: {e}");
            None
        }
    }
}

/// Read a secret from the environment
///
/// Unset, empty and whitespace-only values all count as absent.
pub fn secret_from_env(name: &str) -> Option<String> {
    normalize_secret(std::env::var(name).ok())
}

/// Trim a secret, treating empty and whitespace-only values as absent
pub fn normalize_secret(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
