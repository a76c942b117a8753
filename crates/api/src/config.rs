use std::env;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_SERVICE_NAME: &str = "flight-assist";
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub service_name: String,
    pub environment: String,
    /// Empty means any origin is accepted.
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            bind: non_empty_var("ASSIST_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            service_name: non_empty_var("ASSIST_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            environment: non_empty_var("ASSIST_ENVIRONMENT")
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            allowed_origins: non_empty_var("ASSIST_ALLOWED_ORIGINS")
                .map(|value| parse_origin_list(&value))
                .unwrap_or_default(),
        }
    }
}

pub fn parse_origin_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
