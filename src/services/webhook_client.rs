use std::time::{Duration, Instant};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use crate::config::constants::REQUEST_USER_AGENT;
use crate::errors::TesterResult;
use crate::structs::sample_payload::SamplePayload;
use crate::structs::webhook_response::WebhookResponse;

#[derive(Clone)]
pub struct WebhookClient {
    client: Client,
    timeout: Duration,
}

impl WebhookClient {
    /// The timeout bounds the whole exchange, body read included.
    pub fn new(timeout: Duration) -> TesterResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    pub async fn send(&self, url: &str, payload: &SamplePayload) -> TesterResult<WebhookResponse> {
        log::debug!("POST {} (timeout {:?})", url, self.timeout);
        let start_time = Instant::now();

        let response = self.client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, REQUEST_USER_AGENT)
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        log::debug!("Response headers: {:?}", response.headers());

        let bytes = response.bytes().await?;
        let duration = start_time.elapsed();
        log::debug!("Webhook responded {} in {:?}", status, duration);

        Ok(WebhookResponse::from_parts(status, content_type, &bytes, duration))
    }
}
