use std::fs;
use std::path::Path;
use serde_json::Value;
use crate::config::constants::{
    AUTH_KEY_MARKER, SECURITY_MARKER, WEBHOOK_URL_MARKER, WEBHOOK_URL_PLACEHOLDER,
};
use crate::errors::{TesterError, TesterResult};
use crate::structs::config::webhook_config::WebhookConfig;

pub struct ConfigManager;

impl ConfigManager {

    /// Reads the webhook URL out of a static HTML page.
    ///
    /// The page is not parsed; the first `data-webhook-url="..."` attribute wins.
    /// An absent, empty or placeholder value counts as not configured.
    pub fn locate_webhook_url(html_path: &Path) -> TesterResult<String> {
        log::debug!("Reading webhook URL from {}", html_path.display());

        let content = fs::read_to_string(html_path)
            .map_err(|e| TesterError::file_error(&html_path.display().to_string(), &e.to_string()))?;

        match Self::extract_webhook_url(&content) {
            Some(url) if url != WEBHOOK_URL_PLACEHOLDER => Ok(url.to_string()),
            _ => Err(TesterError::not_configured(&html_path.display().to_string())),
        }
    }

    pub fn extract_webhook_url(content: &str) -> Option<&str> {
        let start = content.find(WEBHOOK_URL_MARKER)? + WEBHOOK_URL_MARKER.len();
        let end = content[start..].find('"')? + start;
        let url = &content[start..end];

        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }

    /// Rewrites every `data-webhook-url` attribute. `None` when the page has none.
    pub fn replace_webhook_url(content: &str, url: &str) -> Option<String> {
        Self::replace_attribute_values(content, WEBHOOK_URL_MARKER, '"', url)
    }

    /// Applies the webhook URL and, when configured, the auth key and security flags.
    ///
    /// `None` when the page has no `data-webhook-url`; nothing else is touched then.
    pub fn render_html(content: &str, config: &WebhookConfig) -> Option<String> {
        let mut updated = Self::replace_webhook_url(content, &config.webhook.url)?;

        if let Some(key) = config.auth_key() {
            updated = Self::apply_auth_key(&updated, key);
        }
        if let Some(security) = &config.security {
            updated = Self::apply_security(&updated, security);
        }

        Some(updated)
    }

    /// Replaces existing `data-auth-key` values, or adds one right after the
    /// form's `data-webhook-url`.
    pub fn apply_auth_key(content: &str, key: &str) -> String {
        if let Some(updated) = Self::replace_attribute_values(content, AUTH_KEY_MARKER, '"', key) {
            return updated;
        }

        let Some((tag_start, tag_end)) = Self::webhook_form_tag(content) else {
            return content.to_string();
        };
        let tag = &content[tag_start..tag_end];
        let insert_at = tag
            .find(WEBHOOK_URL_MARKER)
            .map(|pos| pos + WEBHOOK_URL_MARKER.len())
            .and_then(|value_start| tag[value_start..].find('"').map(|len| value_start + len + 1));

        match insert_at {
            Some(offset) => {
                let at = tag_start + offset;
                format!("{} {}{}\"{}", &content[..at], AUTH_KEY_MARKER, key, &content[at..])
            }
            None => content.to_string(),
        }
    }

    /// Replaces existing `data-security` values, or appends one to the form tag.
    pub fn apply_security(content: &str, security: &Value) -> String {
        let flags = security.to_string().replace('\'', "&#39;");

        if let Some(updated) = Self::replace_attribute_values(content, SECURITY_MARKER, '\'', &flags) {
            return updated;
        }

        match Self::webhook_form_tag(content) {
            Some((_, tag_end)) => {
                format!("{} {}{}'{}", &content[..tag_end], SECURITY_MARKER, flags, &content[tag_end..])
            }
            None => content.to_string(),
        }
    }

    /// Byte range of the first `<form ...` opening tag carrying the webhook
    /// attribute, ending at (not including) its `>`.
    fn webhook_form_tag(content: &str) -> Option<(usize, usize)> {
        let mut search_from = 0;

        while let Some(rel) = content[search_from..].find("<form") {
            let start = search_from + rel;
            let end = start + content[start..].find('>')?;
            if content[start..end].contains(WEBHOOK_URL_MARKER) {
                return Some((start, end));
            }
            search_from = end;
        }

        None
    }

    fn replace_attribute_values(content: &str, marker: &str, quote: char, value: &str) -> Option<String> {
        if !content.contains(marker) {
            return None;
        }

        let mut result = String::with_capacity(content.len() + value.len());
        let mut rest = content;

        while let Some(pos) = rest.find(marker) {
            let value_start = pos + marker.len();
            let Some(value_len) = rest[value_start..].find(quote) else {
                break;
            };

            result.push_str(&rest[..value_start]);
            result.push_str(value);
            rest = &rest[value_start + value_len..];
        }

        result.push_str(rest);
        Some(result)
    }

    pub fn update_html_file(html_path: &Path, config: &WebhookConfig) -> TesterResult<bool> {
        let path_display = html_path.display().to_string();
        let content = fs::read_to_string(html_path)
            .map_err(|e| TesterError::file_error(&path_display, &e.to_string()))?;

        match Self::render_html(&content, config) {
            Some(updated) => {
                fs::write(html_path, updated)
                    .map_err(|e| TesterError::file_error(&path_display, &e.to_string()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn load(config_path: &Path) -> TesterResult<WebhookConfig> {
        log::debug!("Loading config from {}", config_path.display());
        let content = fs::read_to_string(config_path)
            .map_err(|e| TesterError::file_error(&config_path.display().to_string(), &e.to_string()))?;
        let config: WebhookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(config_path: &Path, config: &WebhookConfig) -> TesterResult<()> {
        let path_display = config_path.display().to_string();

        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TesterError::file_error(&path_display, &e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(config_path, content).map_err(|e| TesterError::file_error(&path_display, &e.to_string()))?;
        Ok(())
    }

    pub fn validate_webhook_url(url: &str) -> TesterResult<reqwest::Url> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| TesterError::validation_error("webhook.url", url, &e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(TesterError::validation_error(
                "webhook.url",
                url,
                &format!("scheme must be http or https, got {}", scheme),
            )),
        }
    }
}
