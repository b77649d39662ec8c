use std::time::Duration;

pub const WEBHOOK_URL_MARKER: &str = "data-webhook-url=\"";
pub const AUTH_KEY_MARKER: &str = "data-auth-key=\"";
pub const SECURITY_MARKER: &str = "data-security='";
pub const WEBHOOK_URL_PLACEHOLDER: &str = "YOUR_N8N_WEBHOOK_URL_HERE";

pub const DEFAULT_HTML_PATH: &str = "static/index.html";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_CONFIG_PATH: &str = "config/webhook.json";
pub const HTML_FILES: &[&str] = &["index.html", "index-en.html"];

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONFIG_RETRIES: u32 = 3;
pub const CONFIG_VERSION: &str = "1.0.0";

pub const REQUEST_USER_AGENT: &str = "SAI-Website-Test/1.0";
pub const PAYLOAD_USER_AGENT: &str = "SAI-Webhook-Tester/1.0";

pub const RESPONSE_PREVIEW_CHARS: usize = 500;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub const TROUBLESHOOTING_TIPS: &[&str] = &[
    "Check your n8n workflow execution logs",
    "Verify CORS settings if testing from browser",
    "Ensure your n8n instance is accessible from this network",
];

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn timeout_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
