//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "signup";
const APPLICATION: &str = "signup-form";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/signup-form` or `~/.cache/signup-form`
/// - macOS: `~/Library/Caches/dev.signup.signup-form`
/// - Windows: `C:\Users\<User>\AppData\Local\signup\signup-form\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/signup-form` or `~/.config/signup-form`
/// - macOS: `~/Library/Application Support/dev.signup.signup-form`
/// - Windows: `C:\Users\<User>\AppData\Roaming\signup\signup-form\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the policy file.
pub fn policy_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("policy.json"))
}
