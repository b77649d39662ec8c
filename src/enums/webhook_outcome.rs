/// How a response status is presented to the operator.
///
/// Client errors other than 404 fall into `Unexpected` along with any
/// non-200 success code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Success,
    NotFound,
    ServerError(u16),
    Unexpected(u16),
}

impl WebhookOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Self::Success,
            404 => Self::NotFound,
            s if s >= 500 => Self::ServerError(s),
            s => Self::Unexpected(s),
        }
    }

    pub fn headline(&self) -> String {
        match self {
            Self::Success => "✅ Webhook test successful!".to_string(),
            Self::NotFound => "❌ Webhook endpoint not found (404)".to_string(),
            Self::ServerError(status) => format!("❌ Server error ({})", status),
            Self::Unexpected(status) => format!("⚠️  Unexpected response ({})", status),
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Success => "Your n8n workflow should have received the test data.",
            Self::NotFound => "Check if your n8n workflow is active and the URL is correct.",
            Self::ServerError(_) => "There might be an issue with your n8n workflow.",
            Self::Unexpected(_) => "Check your n8n workflow configuration.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_status_buckets() {
        assert_eq!(WebhookOutcome::from_status(200), WebhookOutcome::Success);
        assert_eq!(WebhookOutcome::from_status(404), WebhookOutcome::NotFound);
        assert_eq!(WebhookOutcome::from_status(500), WebhookOutcome::ServerError(500));
        assert_eq!(WebhookOutcome::from_status(503), WebhookOutcome::ServerError(503));
        assert_eq!(WebhookOutcome::from_status(201), WebhookOutcome::Unexpected(201));
        assert_eq!(WebhookOutcome::from_status(302), WebhookOutcome::Unexpected(302));
    }

    #[test]
    fn other_client_errors_are_unexpected() {
        for status in [400, 401, 403, 405, 422, 429, 499] {
            assert_eq!(WebhookOutcome::from_status(status), WebhookOutcome::Unexpected(status));
        }
    }

    #[test]
    fn headlines_carry_status() {
        assert_eq!(WebhookOutcome::ServerError(502).headline(), "❌ Server error (502)");
        assert!(WebhookOutcome::Unexpected(401).headline().contains("(401)"));
    }
}
