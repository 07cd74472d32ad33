use crate::core::TextSource;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
}

impl HttpTextSource {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl TextSource for HttpTextSource {
    async fn read_text(&self, locator: &str) -> Result<String> {
        validate_url("locator", locator)?;

        tracing::debug!("Making HTTP request to: {}", locator);
        let response = self.client.get(locator).send().await?;
        let status = response.status();
        tracing::debug!("HTTP response status: {}", status);

        if !status.is_success() {
            return Err(DrillError::HttpStatus {
                url: locator.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        Ok(text)
    }
}
