//! External-facing adapters: configuration and trait data loading.

pub mod config;
pub mod loader;

pub use config::{load_dotenv_from_repo_root, EngineConfig};
pub use loader::{LoadError, TraitLoader};
