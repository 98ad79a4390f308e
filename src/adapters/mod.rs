// Adapters layer: concrete implementations of the domain ports (remote
// HTTP source, deterministic approximation, filesystem storage).

pub mod approx;
pub mod local_storage;
pub mod remote;

use crate::domain::ports::{ConfigProvider, PositionSource};
use crate::utils::error::Result;
use std::time::Duration;

/// Build the standard source chain from config: the remote service first
/// when an endpoint is configured, the deterministic approximation always
/// last so position acquisition can never fail outright.
pub fn default_sources(config: &impl ConfigProvider) -> Result<Vec<Box<dyn PositionSource>>> {
    let mut sources: Vec<Box<dyn PositionSource>> = Vec::new();

    if let Some(endpoint) = config.api_endpoint() {
        let timeout = Duration::from_secs(config.request_timeout_secs());
        sources.push(Box::new(remote::RemotePositionSource::new(
            endpoint.to_string(),
            timeout,
        )?));
    }
    sources.push(Box::new(approx::ApproxPositionSource));

    Ok(sources)
}
