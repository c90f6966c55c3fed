//! Configuration file loading for gemcat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./gemcat.toml` or `./.gemcat.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/gemcat/config.toml`
//! 4. Fallback: `~/.config/gemcat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileApiConfig, FileConfig, FileGenerationConfig};
pub use loader::ConfigLoader;
