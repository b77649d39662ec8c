use std::io::{self, Write};
use crate::config::constants::TROUBLESHOOTING_TIPS;
use crate::enums::response_body::ResponseBody;
use crate::enums::webhook_outcome::WebhookOutcome;
use crate::errors::TesterError;
use crate::structs::sample_payload::SamplePayload;
use crate::structs::webhook_response::WebhookResponse;

/// Operator-facing console report of one test run.
pub struct ReportLogger<W: Write> {
    out: W,
}

impl<W: Write> ReportLogger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "🧪 SAI Website Webhook Testing Tool")?;
        writeln!(self.out, "{}", "=".repeat(40))?;
        writeln!(self.out)
    }

    pub fn print_target(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "🔗 Testing webhook: {}", url)?;
        writeln!(self.out)
    }

    pub fn print_payload(&mut self, payload: &SamplePayload) -> io::Result<()> {
        writeln!(self.out, "📤 Sending test data...")?;
        match payload.to_pretty_json() {
            Ok(json) => writeln!(self.out, "{}", json)?,
            Err(e) => writeln!(self.out, "(payload could not be rendered: {})", e)?,
        }
        writeln!(self.out)
    }

    pub fn print_response(&mut self, response: &WebhookResponse) -> io::Result<()> {
        writeln!(self.out, "📥 Response Status: {}", response.status)?;
        writeln!(self.out, "📏 Response Size: {} bytes", response.size)?;

        let label = match &response.body {
            ResponseBody::Text { declared_json: true, .. } => "📋 Response Body (text):",
            _ => "📋 Response Body:",
        };
        writeln!(self.out, "{}", label)?;
        writeln!(self.out, "{}", response.body.render())
    }

    pub fn print_outcome(&mut self, outcome: WebhookOutcome) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", outcome.headline())?;
        writeln!(self.out, "   {}", outcome.guidance())
    }

    pub fn print_error(&mut self, error: &TesterError) -> io::Result<()> {
        writeln!(self.out, "{}", error.user_message())
    }

    pub fn print_tips(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "💡 Tips:")?;
        for tip in TROUBLESHOOTING_TIPS {
            writeln!(self.out, "   - {}", tip)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut ReportLogger<Vec<u8>>) -> io::Result<()>,
    {
        let mut logger = ReportLogger::new(Vec::new());
        f(&mut logger).unwrap();
        String::from_utf8(logger.into_inner()).unwrap()
    }

    #[test]
    fn response_section_shows_status_size_and_body() {
        let response = WebhookResponse::from_parts(
            200,
            Some("application/json".to_string()),
            br#"{"ok":true}"#,
            Duration::ZERO,
        );
        let output = rendered(|l| l.print_response(&response));

        assert!(output.contains("📥 Response Status: 200"));
        assert!(output.contains("📏 Response Size: 11 bytes"));
        assert!(output.contains("📋 Response Body:\n{\n  \"ok\": true\n}"));
    }

    #[test]
    fn unparseable_json_is_labelled_as_text() {
        let response = WebhookResponse::from_parts(
            500,
            Some("application/json".to_string()),
            b"<html>oops</html>",
            Duration::ZERO,
        );
        let output = rendered(|l| l.print_response(&response));

        assert!(output.contains("📋 Response Body (text):\n<html>oops</html>"));
    }

    #[test]
    fn tips_are_listed() {
        let output = rendered(|l| l.print_tips());

        assert!(output.contains("💡 Tips:"));
        assert_eq!(output.matches("   - ").count(), TROUBLESHOOTING_TIPS.len());
    }
}
