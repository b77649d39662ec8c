use std::time::Duration;
use crate::enums::response_body::ResponseBody;
use crate::enums::webhook_outcome::WebhookOutcome;

#[derive(Debug, Clone)]
pub struct WebhookResponse {
    pub status: u16,
    /// Raw body length in bytes.
    pub size: usize,
    pub content_type: Option<String>,
    pub body: ResponseBody,
    pub duration: Duration,
}

impl WebhookResponse {
    pub fn from_parts(status: u16, content_type: Option<String>, bytes: &[u8], duration: Duration) -> Self {
        let body = ResponseBody::decode(content_type.as_deref(), bytes);

        Self {
            status,
            size: bytes.len(),
            content_type,
            body,
            duration,
        }
    }

    /// One-line description for the diagnostic log.
    pub fn summary(&self) -> String {
        format!(
            "{} in {}ms ({}, {} bytes)",
            self.status,
            self.duration.as_millis(),
            self.content_type.as_deref().unwrap_or("no content type"),
            self.size
        )
    }

    pub fn outcome(&self) -> WebhookOutcome {
        WebhookOutcome::from_status(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_counts_bytes_not_characters() {
        let response = WebhookResponse::from_parts(
            200,
            Some("text/plain".to_string()),
            "Córdoba".as_bytes(),
            Duration::from_millis(5),
        );

        assert_eq!(response.size, 8);
        assert_eq!(response.outcome(), WebhookOutcome::Success);
    }

    #[test]
    fn summary_mentions_timing_and_content_type() {
        let response = WebhookResponse::from_parts(
            502,
            Some("text/html".to_string()),
            b"<h1>Bad Gateway</h1>",
            Duration::from_millis(42),
        );
        assert_eq!(response.summary(), "502 in 42ms (text/html, 20 bytes)");

        let bare = WebhookResponse::from_parts(204, None, b"", Duration::ZERO);
        assert_eq!(bare.summary(), "204 in 0ms (no content type, 0 bytes)");
    }
}
