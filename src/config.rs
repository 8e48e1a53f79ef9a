use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
    pub min_password_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            toast_duration_ms: 5000,
            min_password_length: 6,
        }
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time (see build.rs)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            min_password_length: option_env!("MIN_PASSWORD_LENGTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_password_length),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Full URL for an API path such as `/auth/login`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = AppConfig {
            api_url: "http://localhost:5000/api".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.endpoint("/auth/login"), "http://localhost:5000/api/auth/login");
        assert_eq!(config.endpoint("parcels/all"), "http://localhost:5000/api/parcels/all");
    }

    #[test]
    fn default_environment_is_development() {
        let config = AppConfig::default();
        assert!(!config.is_production());
        assert_eq!(config.min_password_length, 6);
    }
}
