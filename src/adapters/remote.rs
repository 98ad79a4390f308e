//! Remote position source: queries an external ephemeris-style HTTP
//! service. Any timeout, transport error, bad status or malformed body is
//! a typed error; the engine absorbs it and moves on to the next source.

use crate::domain::model::{BirthData, CelestialPosition};
use crate::domain::ports::PositionSource;
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct RemotePositionSource {
    endpoint: String,
    client: Client,
}

impl RemotePositionSource {
    /// The timeout is the only cancellation concept; there is no retry —
    /// a single failure hands control to the next source.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl PositionSource for RemotePositionSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn is_approximation(&self) -> bool {
        false
    }

    async fn positions(&self, birth: &BirthData) -> Result<Vec<CelestialPosition>> {
        tracing::debug!("Requesting positions from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("year", birth.year.to_string()),
                ("month", birth.month.to_string()),
                ("day", birth.day.to_string()),
                ("hour", birth.hour.to_string()),
                ("minute", birth.minute.to_string()),
                ("second", birth.second.to_string()),
                ("latitude", birth.latitude.to_string()),
                ("longitude", birth.longitude.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::PositionSourceError {
                source_name: "remote".to_string(),
                message: format!("Service responded with HTTP {}", status),
            });
        }

        let positions: Vec<CelestialPosition> = response.json().await?;
        if positions.is_empty() {
            return Err(EngineError::PositionSourceError {
                source_name: "remote".to_string(),
                message: "Service returned an empty position list".to_string(),
            });
        }

        Ok(positions)
    }
}
