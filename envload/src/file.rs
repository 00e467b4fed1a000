//! Seeding the process environment from `.env` files

use crate::error::EnvError;
use crate::source::{resolve, ProcessEnv};
use std::path::{Path, PathBuf};

/// Default path of the environment file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Variable that overrides [`DEFAULT_ENV_FILE`].
pub const ENV_FILE_KEY: &str = "ENV_FILE";

/// Load `KEY=VALUE` lines from the file named by `ENV_FILE` (or `.env`).
///
/// Variables that are already set in the process environment keep their
/// values. Returns the path that was loaded.
///
/// # Errors
///
/// Returns [`EnvError::Load`] if the file is missing or malformed.
pub fn load() -> Result<PathBuf, EnvError> {
    let path = PathBuf::from(resolve(&ProcessEnv, ENV_FILE_KEY, DEFAULT_ENV_FILE));
    load_from(&path)?;
    Ok(path)
}

/// Load `KEY=VALUE` lines from `path` without overriding existing variables.
///
/// # Errors
///
/// Returns [`EnvError::Load`] if the file is missing or malformed.
pub fn load_from(path: impl AsRef<Path>) -> Result<(), EnvError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading environment file");
    dotenvy::from_path(path)?;
    Ok(())
}
