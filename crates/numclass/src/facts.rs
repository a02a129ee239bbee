use crate::prelude::*;
use async_trait::async_trait;
use numclass_core::classify::Classification;
use numclass_core::fact::{extract_fact_text, fact_or_fallback, fact_url, NumbersApiFact};
use std::time::Duration;

/// Anything that can look up a fun fact for a number
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self, number: i64) -> std::result::Result<String, Error>;
}

/// Client for the numbersapi.com math facts endpoint
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApiClient {
    /// `timeout` bounds the whole lookup, connect and body included
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("numclass/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build fact service client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl FactSource for NumbersApiClient {
    async fn fetch_fact(&self, number: i64) -> std::result::Result<String, Error> {
        let url = fact_url(&self.base_url, number);
        log::debug!("Fetching fun fact from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::Status(response.status().as_u16()));
        }

        let fact: NumbersApiFact = response.json().await.map_err(|e| {
            if e.is_timeout() {
                Error::Network(e.to_string())
            } else {
                Error::Decode(e.to_string())
            }
        })?;

        extract_fact_text(fact).ok_or(Error::EmptyFact)
    }
}

/// Fact source that never answers, so every number gets the local fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFacts;

#[async_trait]
impl FactSource for OfflineFacts {
    async fn fetch_fact(&self, _number: i64) -> std::result::Result<String, Error> {
        Err(Error::Offline)
    }
}

/// Fetch a fun fact, falling back to a synthesized one on any failure
///
/// Never fails. Lookup errors are logged and swallowed here.
pub async fn resolve_fun_fact(source: &dyn FactSource, classification: &Classification) -> String {
    let number = classification.number;

    let fetched = match source.fetch_fact(number).await {
        Ok(text) => Some(text),
        Err(Error::Offline) => None,
        Err(e) => {
            log::warn!("Fun fact lookup for {number} failed, using fallback: {e}");
            None
        }
    };

    fact_or_fallback(fetched, classification)
}
