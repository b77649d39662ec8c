use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::config::constants::{
    timeout_duration_millis, CONFIG_VERSION, DEFAULT_CONFIG_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Contents of `config/webhook.json`, the file the HTML attributes are built from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WebhookConfig {
    pub webhook: WebhookSettings,
    /// Free-form flags rendered into the form's `data-security` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Value>,
    #[serde(default)]
    pub meta: ConfigMeta,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WebhookSettings {
    pub url: String,
    /// Milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout: u64,
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthSettings>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuthSettings {
    #[serde(rename = "type", default = "default_auth_type")]
    pub auth_type: String,
    pub key: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMeta {
    pub last_updated: DateTime<Utc>,
    pub version: String,
}

impl Default for ConfigMeta {
    fn default() -> Self {
        Self {
            last_updated: Utc::now(),
            version: CONFIG_VERSION.to_string(),
        }
    }
}

impl WebhookConfig {
    pub fn new(url: &str) -> Self {
        Self {
            webhook: WebhookSettings {
                url: url.to_string(),
                timeout: default_timeout_ms(),
                retries: default_retries(),
                auth: None,
            },
            security: None,
            meta: ConfigMeta::default(),
        }
    }

    pub fn auth_key(&self) -> Option<&str> {
        self.webhook.auth.as_ref().map(|auth| auth.key.as_str())
    }

    pub fn timeout(&self) -> Duration {
        timeout_duration_millis(self.webhook.timeout)
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS * 1000
}

fn default_retries() -> u32 {
    DEFAULT_CONFIG_RETRIES
}

fn default_auth_type() -> String {
    "api-key".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_meta() {
        let config = WebhookConfig::new("https://n8n.example.com/webhook/abc");
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["webhook"]["url"], "https://n8n.example.com/webhook/abc");
        assert_eq!(value["webhook"]["timeout"], 10000);
        assert_eq!(value["webhook"]["retries"], 3);
        assert_eq!(value["meta"]["version"], "1.0.0");
        assert!(value["meta"]["lastUpdated"].is_string());
        assert!(value["webhook"].get("auth").is_none());
        assert!(value.get("security").is_none());
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let raw = r#"{
            "webhook": { "url": "https://n8n.example.com/webhook/abc" },
            "meta": { "lastUpdated": "2025-01-01T00:00:00Z", "version": "1.0.0" }
        }"#;
        let config: WebhookConfig = serde_json::from_str(raw).unwrap();

        assert_eq!(config.webhook.retries, 3);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.auth_key(), None);
    }

    #[test]
    fn keeps_auth_and_security_from_security_setup() {
        let raw = r#"{
            "webhook": {
                "url": "https://n8n.example.com/webhook/abc",
                "auth": { "type": "api-key", "key": "k123" }
            },
            "security": { "honeypot": true, "rateLimit": true, "timestampValidation": true }
        }"#;
        let config: WebhookConfig = serde_json::from_str(raw).unwrap();

        assert_eq!(config.auth_key(), Some("k123"));
        assert_eq!(config.webhook.auth.as_ref().unwrap().auth_type, "api-key");
        assert_eq!(config.security.as_ref().unwrap()["honeypot"], true);
        assert_eq!(config.meta.version, "1.0.0");

        let written = serde_json::to_value(&config).unwrap();
        assert_eq!(written["webhook"]["auth"]["key"], "k123");
        assert_eq!(written["security"]["rateLimit"], true);
    }
}
