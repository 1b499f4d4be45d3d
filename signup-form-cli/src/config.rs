//! Loading the validation policy from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use signup_form::policy::{FormPolicy, PolicyError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid policy in {}: {source}", .path.display())]
    Invalid { path: PathBuf, source: PolicyError },
}

/// Load a policy from a JSON file. A missing file yields the default policy.
pub fn load_policy(path: &Path) -> Result<FormPolicy, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_policy(path, &contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FormPolicy::default()),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse and check a policy read from `path`.
fn parse_policy(path: &Path, json: &str) -> Result<FormPolicy, ConfigError> {
    let policy: FormPolicy = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    policy.validated().map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}
