use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "prompt-museum";
const DEFAULT_SHARE_ORIGIN: &str = "https://promptsmuseum.app";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory holding `preferences.json`
    pub data_dir: PathBuf,
    /// Optional JSON dataset replacing the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
    /// Origin used when building share links
    pub share_origin: String,
    /// Where exported JSON files are written
    pub export_dir: PathBuf,
    pub color: bool,
    #[serde(default)]
    pub content_preview: bool,
    /// Log destination; stderr when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        let export_dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));

        Self {
            general: GeneralConfig {
                data_dir,
                catalog_file: None,
                share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
                export_dir,
                color: true,
                content_preview: true,
                log_file: None,
            },
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory cannot be empty".to_string()));
        }

        let origin = self.general.share_origin.trim();
        if origin.is_empty() {
            return Err(AppError::Config("Share origin cannot be empty".to_string()));
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Share origin must start with http:// or https://, got '{}'",
                origin
            )));
        }

        if let Some(catalog) = &self.general.catalog_file
            && !catalog
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            return Err(AppError::Config(
                "Catalog file should have a .json extension".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::System(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml(&content).unwrap();
        assert_eq!(parsed, config);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_origin() {
        let mut config = Config::default();
        config.general.share_origin = "promptsmuseum.app".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_json_catalog() {
        let mut config = Config::default();
        config.general.catalog_file = Some(PathBuf::from("prompts.toml"));
        assert!(config.validate().is_err());

        config.general.catalog_file = Some(PathBuf::from("prompts.JSON"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_custom_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_custom(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
    }
}
