use std::{env, path::PathBuf};

/// Endpoint used for DynamoDB Local when none is configured.
const DEFAULT_LOCAL_SERVICE_URL: &str = "http://localhost:8000";

/// Seed file location, relative to the working directory.
const DEFAULT_SEED_FILE: &str = "data/Employee.json";

/// Region used against DynamoDB Local when none is configured.
const DEFAULT_LOCAL_REGION: &str = "us-east-1";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Use DynamoDB Local instead of the AWS-hosted service (default: false)
    pub dynamodb_local_mode: bool,
    /// DynamoDB Local endpoint (default: "http://localhost:8000")
    pub dynamodb_local_service_url: String,
    /// AWS region override. When unset the SDK's default region chain applies.
    pub aws_region: Option<String>,
    /// Path to the JSON seed file read by the table load endpoint.
    pub seed_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_LOCAL_MODE` - Use DynamoDB Local (default: false)
    /// - `DYNAMODB_LOCAL_SERVICE_URL` - DynamoDB Local endpoint (default: "http://localhost:8000")
    /// - `AWS_REGION` - AWS region (default: SDK region chain)
    /// - `SEED_FILE` - Seed file path (default: `data/Employee.json` under the working directory)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            dynamodb_local_mode: lookup("DYNAMODB_LOCAL_MODE")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            dynamodb_local_service_url: lookup("DYNAMODB_LOCAL_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_LOCAL_SERVICE_URL.to_string()),
            aws_region: lookup("AWS_REGION").filter(|v| !v.is_empty()),
            seed_file: lookup("SEED_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_FILE)),
        }
    }

    /// Endpoint override for the DynamoDB client, set only in local mode.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.dynamodb_local_mode
            .then_some(self.dynamodb_local_service_url.as_str())
    }

    /// Region for the DynamoDB client.
    ///
    /// DynamoDB Local ignores the region but the SDK still requires one.
    pub fn region(&self) -> Option<String> {
        match (&self.aws_region, self.dynamodb_local_mode) {
            (Some(region), _) => Some(region.clone()),
            (None, true) => Some(DEFAULT_LOCAL_REGION.to_string()),
            (None, false) => None,
        }
    }

    /// Returns a display string for the target store.
    pub fn target_display(&self) -> String {
        match self.endpoint_url() {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => match &self.aws_region {
                Some(region) => format!("AWS DynamoDB (region: {})", region),
                None => "AWS DynamoDB (default region)".to_string(),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
