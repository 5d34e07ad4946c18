//! Environment-sourced configuration.
//!
//! Resolved once at process start into an immutable value that is passed
//! into the pipeline. Missing entries are not a startup error: requests
//! proceed and fail naturally against the upstream services, which is the
//! reference behavior.

use tracing::warn;

/// Environment variable holding the catalog API credential.
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Environment variable holding the destination topic name.
pub const TOPIC_VAR: &str = "PUBSUB_TOPIC";

/// Environment variable holding the owning project identifier.
pub const PROJECT_VAR: &str = "GCP_PROJECT";

/// Environment variable holding an optional Pub/Sub bearer token.
pub const AUTH_TOKEN_VAR: &str = "PUBSUB_AUTH_TOKEN";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: String,
    pub topic: String,
    pub project: String,
    pub auth_token: Option<String>,
}

impl Config {
    /// Resolve configuration from the environment.
    pub fn from_env() -> Self {
        let config = Self {
            api_key: std::env::var(API_KEY_VAR).unwrap_or_default(),
            topic: std::env::var(TOPIC_VAR).unwrap_or_default(),
            project: std::env::var(PROJECT_VAR).unwrap_or_default(),
            auth_token: std::env::var(AUTH_TOKEN_VAR).ok(),
        };

        for (name, value) in [
            (API_KEY_VAR, &config.api_key),
            (TOPIC_VAR, &config.topic),
            (PROJECT_VAR, &config.project),
        ] {
            if value.is_empty() {
                warn!(variable = name, "configuration entry is not set");
            }
        }

        config
    }

    /// Credential masked for display, keeping only the last four characters.
    pub fn masked_api_key(&self) -> String {
        if self.api_key.is_empty() {
            "(not set)".to_string()
        } else if self.api_key.len() <= 4 {
            "****".to_string()
        } else {
            format!("...{}", &self.api_key[self.api_key.len() - 4..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_key_keeps_tail() {
        let config = Config {
            api_key: "AIzaSyExample1234".to_string(),
            ..Config::default()
        };
        assert_eq!(config.masked_api_key(), "...1234");
    }

    #[test]
    fn masked_key_handles_short_and_empty() {
        let short = Config {
            api_key: "abc".to_string(),
            ..Config::default()
        };
        assert_eq!(short.masked_api_key(), "****");

        let empty = Config::default();
        assert_eq!(empty.masked_api_key(), "(not set)");
    }
}
