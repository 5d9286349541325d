use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the items (default: "things")
    pub table_name: String,
    /// DynamoDB endpoint override, e.g. for DynamoDB Local (default: none)
    pub dynamodb_endpoint_url: Option<String>,
    /// Request timeout for the local server in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "things")
    /// - `DYNAMODB_ENDPOINT_URL` - DynamoDB endpoint override (default: unset)
    /// - `REQUEST_TIMEOUT_SECONDS` - Local server request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "things".to_string()),
            dynamodb_endpoint_url: env::var("DYNAMODB_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.is_empty()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
