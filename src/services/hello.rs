//! Client for the hello microservice.
//!
//! A plain GET with a short timeout; the body text is the greeting.

use std::time::Duration;

use thiserror::Error;

use crate::config::ServicesConfig;

#[derive(Debug, Error)]
pub enum HelloError {
    #[error("hello service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("hello service returned status {0}")]
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct HelloClient {
    client: reqwest::Client,
    url: String,
}

impl HelloClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, HelloError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &ServicesConfig) -> Result<Self, HelloError> {
        Self::new(
            config.hello_url.clone(),
            Duration::from_secs(config.hello_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the greeting, trimmed.
    pub async fn greet(&self) -> Result<String, HelloError> {
        let res = self.client.get(&self.url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(HelloError::Status(status.as_u16()));
        }
        Ok(res.text().await?.trim().to_string())
    }
}
