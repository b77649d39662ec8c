use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use crate::config::config_manager::ConfigManager;
use crate::enums::webhook_outcome::WebhookOutcome;
use crate::errors::TesterError;
use crate::logger::report_logger::ReportLogger;
use crate::services::webhook_client::WebhookClient;
use crate::structs::sample_payload::SamplePayload;
use crate::structs::webhook_response::WebhookResponse;

/// What a single test run ended with.
#[derive(Debug)]
pub enum TestRun {
    /// The URL could not be located; nothing was sent.
    Aborted(TesterError),
    Delivered {
        outcome: WebhookOutcome,
        response: WebhookResponse,
    },
    TransmissionFailed(TesterError),
}

impl TestRun {
    pub fn request_sent(&self) -> bool {
        !matches!(self, Self::Aborted(_))
    }
}

/// Reads the webhook URL from a page, posts the sample submission and reports.
pub struct WebhookTester {
    html_path: PathBuf,
    timeout: Duration,
}

impl WebhookTester {
    pub fn new(html_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            html_path: html_path.into(),
            timeout,
        }
    }

    /// Every failure is reported to `logger` here; only console write errors escape.
    pub async fn run<W: Write>(&self, logger: &mut ReportLogger<W>) -> io::Result<TestRun> {
        logger.print_banner()?;

        let webhook_url = match ConfigManager::locate_webhook_url(&self.html_path) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Webhook URL unavailable: {}", e);
                logger.print_error(&e)?;
                return Ok(TestRun::Aborted(e));
            }
        };

        logger.print_target(&webhook_url)?;

        let payload = SamplePayload::build();
        logger.print_payload(&payload)?;

        let run = match self.transmit(&webhook_url, &payload).await {
            Ok(response) => {
                log::info!("Webhook answered {}", response.summary());
                logger.print_response(&response)?;
                let outcome = response.outcome();
                logger.print_outcome(outcome)?;
                TestRun::Delivered { outcome, response }
            }
            Err(e) => {
                if e.is_transport_error() {
                    log::warn!("Webhook request failed: {}", e);
                } else {
                    log::error!("Could not prepare webhook request: {}", e);
                }
                logger.print_error(&e)?;
                TestRun::TransmissionFailed(e)
            }
        };

        logger.print_tips()?;
        Ok(run)
    }

    async fn transmit(&self, url: &str, payload: &SamplePayload) -> Result<WebhookResponse, TesterError> {
        let client = WebhookClient::new(self.timeout)?;
        client.send(url, payload).await
    }
}
