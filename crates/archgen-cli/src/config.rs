//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`ARCHGEN_*`, `__` as section separator)
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generated services.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Catalog settings.
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Base package; the lowercased service name is appended.
    pub package: String,
    /// Contract the generated service extends.
    pub contract: Option<String>,
    /// Annotate the implementation class with the framework annotation.
    pub annotate: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            package: "com.example".into(),
            contract: None,
            annotate: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Extra catalog manifest merged over the built-ins on every run.
    pub manifest: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file (if any), then
    /// `ARCHGEN_*` environment variables.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let config = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("ARCHGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.archgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "archgen", "archgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".archgen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_package_is_com_example() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.package, "com.example");
        assert!(cfg.defaults.annotate);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_with_missing_file_returns_defaults() {
        let missing = PathBuf::from("/nonexistent/archgen-config.toml");
        let cfg = AppConfig::load(Some(&missing)).unwrap();
        assert_eq!(cfg.defaults.package, "com.example");
    }

    #[test]
    fn load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\npackage = \"org.acme\"\nannotate = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.package, "org.acme");
        assert!(!cfg.defaults.annotate);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
