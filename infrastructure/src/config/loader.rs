//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./gemcat.toml` or `./.gemcat.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/gemcat/config.toml`
    /// 4. Fallback: `~/.config/gemcat/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().filter(|path| path.exists()),
            Self::project_config_path(),
            config_path.cloned(),
        )
    }

    /// Merge defaults and the given files in order; later sources win.
    fn load_from(
        global: Option<PathBuf>,
        project: Option<PathBuf>,
        explicit: Option<PathBuf>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        for path in [global, project, explicit].into_iter().flatten() {
            figment = figment.merge(Toml::file(path));
        }
        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/gemcat/config.toml if set,
    /// otherwise falls back to ~/.config/gemcat/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gemcat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["gemcat.toml", ".gemcat.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./gemcat.toml or ./.gemcat.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemcat_domain::Model;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.api.model.is_none());
        assert!(config.api.base_url.is_none());
        assert!(config.generation.temperature.is_none());
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "explicit.toml",
            r#"
                [api]
                model = "gemini-2.0-flash"

                [generation]
                temperature = 0.3
            "#,
        );

        let config = ConfigLoader::load(Some(&path)).unwrap();

        let (model, issues) = config.api.parse_model();
        assert!(issues.is_empty());
        assert_eq!(model, Some(Model::Gemini20Flash));
        assert_eq!(config.generation.temperature, Some(0.3));

        // Fields the file never mentions keep their defaults
        assert!(config.api.base_url.is_none());
        let (params, _) = config.generation.to_params();
        assert_eq!(params.temperature, 0.3);
        assert_eq!(params.top_p, 0.8);
        assert_eq!(params.max_output_tokens, 2048);
    }

    #[test]
    fn test_later_source_overrides_earlier() {
        let dir = TempDir::new().unwrap();
        let global = write_config(
            &dir,
            "global.toml",
            r#"
                [api]
                model = "gemini-1.5-flash"
                base_url = "http://127.0.0.1:9999/v1beta"

                [generation]
                top_k = 10
            "#,
        );
        let project = write_config(&dir, "project.toml", "[api]\nmodel = \"gemini-2.0-flash\"\n");

        let config = ConfigLoader::load_from(Some(global), Some(project), None).unwrap();

        // Where both files set a field, the later one wins
        let (model, _) = config.api.parse_model();
        assert_eq!(model, Some(Model::Gemini20Flash));
        // Fields only the earlier file set survive the merge
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://127.0.0.1:9999/v1beta")
        );
        assert_eq!(config.generation.top_k, Some(10));
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("gemcat"));
    }
}
