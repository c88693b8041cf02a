use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::application::DEFAULT_LISTING_PATH;
use crate::cli::Cli;

/// Config file read when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "product-editor.toml";

/// Prefix of environment overrides, e.g. `PRODUCT_EDITOR__API__BASE_URL`
pub const ENV_PREFIX: &str = "PRODUCT_EDITOR";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_PRODUCTS_PATH: &str = "/products";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub routes: RouteSettings,
}

/// Where the product backend lives
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub products_path: String,
}

/// Front-end paths the editor navigates to
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteSettings {
    pub listing_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: DEFAULT_BASE_URL.to_string(),
                products_path: DEFAULT_PRODUCTS_PATH.to_string(),
            },
            routes: RouteSettings {
                listing_path: DEFAULT_LISTING_PATH.to_string(),
            },
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments (config file, env vars, then CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Loads and validates settings from `path`. A missing file is not an
    /// error: defaults and environment variables still apply.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path.as_ref())?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.products_path", DEFAULT_PRODUCTS_PATH)?
            .set_default("routes.listing_path", DEFAULT_LISTING_PATH)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(api_url) = &cli.api_url {
            self.api.base_url = api_url.clone();
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let settings = Settings::from_file(temp_dir.path().join("absent.toml"))?;

        assert_eq!(settings.api.products_path, "/products");
        assert_eq!(settings.routes.listing_path, "/");
        Ok(())
    }

    #[test]
    fn test_file_overrides_defaults() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("product-editor.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "https://shop.example.com/api"

[routes]
listing_path = "/catalog"
"#,
        )?;

        let settings = Settings::from_file(&path)?;

        assert_eq!(settings.api.base_url, "https://shop.example.com/api");
        // Keys absent from the file keep their defaults
        assert_eq!(settings.api.products_path, "/products");
        assert_eq!(settings.routes.listing_path, "/catalog");
        Ok(())
    }

    #[test]
    fn test_invalid_file_fails_validation() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("product-editor.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "ftp://shop.example.com"
products_path = "products"
"#,
        )?;

        let err = Settings::from_file(&path).unwrap_err().to_string();
        assert!(err.contains("api.base_url"));
        assert!(err.contains("api.products_path"));
        Ok(())
    }

    #[test]
    fn test_cli_api_url_wins_over_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("product-editor.toml");
        fs::write(&path, "[api]\nbase_url = \"http://from-file:3000\"\n")?;

        let cli = Cli::parse_from([
            "product-editor",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://from-cli:4000",
            "list",
        ]);
        let settings = Settings::new_with_cli(&cli)?;

        assert_eq!(settings.api.base_url, "http://from-cli:4000");
        Ok(())
    }
}
