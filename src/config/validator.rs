use thiserror::Error;

use crate::config::{ApiSettings, RouteSettings, Settings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks every section and reports all problems at once.
    pub fn validate(settings: &Settings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_api(&settings.api) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_routes(&settings.routes) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_api(api: &ApiSettings) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if api.base_url.is_empty() {
            errors.push(ConfigError::MissingField("api.base_url".to_string()));
        } else if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
            errors.push(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        if let Some(e) = Self::check_path("api.products_path", &api.products_path) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_routes(routes: &RouteSettings) -> Result<(), Vec<ConfigError>> {
        match Self::check_path("routes.listing_path", &routes.listing_path) {
            Some(e) => Err(vec![e]),
            None => Ok(()),
        }
    }

    fn check_path(field: &str, path: &str) -> Option<ConfigError> {
        if path.starts_with('/') {
            None
        } else {
            Some(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: "Path must start with '/'".to_string(),
            })
        }
    }
}
