//! Environment-driven configuration for the `traitscribe` binary.
//!
//! Values come from process environment variables, with `.env.local` and
//! `.env` at the repository root loaded first (existing variables win).

use std::path::PathBuf;

/// Default input file when none is passed on the command line
pub const DATA_PATH_VAR: &str = "TRAITSCRIBE_DATA_PATH";
/// Log filter directive used when `RUST_LOG` is unset
pub const LOG_VAR: &str = "TRAITSCRIBE_LOG";
/// Prefix tier blocks with their unit range
pub const SHOW_RANGES_VAR: &str = "TRAITSCRIBE_SHOW_RANGES";

pub const DEFAULT_LOG_FILTER: &str = "traitscribe_engine=info";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub data_path: Option<PathBuf>,
    pub log_filter: String,
    pub show_ranges: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_ranges: false,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            data_path: non_empty(DATA_PATH_VAR).map(PathBuf::from),
            log_filter: non_empty(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            show_ranges: non_empty(SHOW_RANGES_VAR)
                .map(|value| is_truthy(&value))
                .unwrap_or(false),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load `.env.local` then `.env` from the repository root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
