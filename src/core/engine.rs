use crate::core::assemble::assemble;
use crate::domain::model::{BirthData, Body, CelestialPosition, DesignChart};
use crate::domain::ports::{ChartCache, PositionSource};
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::Validate;

/// The profile engine: validates input, acquires positions through an
/// ordered list of sources (first success wins), runs the pure derivation
/// pipeline and caches the assembled chart.
pub struct ChartEngine<C: ChartCache> {
    sources: Vec<Box<dyn PositionSource>>,
    cache: C,
}

impl<C: ChartCache> ChartEngine<C> {
    pub fn new(sources: Vec<Box<dyn PositionSource>>, cache: C) -> Self {
        Self { sources, cache }
    }

    pub async fn compute(&self, birth: &BirthData) -> Result<DesignChart> {
        birth.validate()?;

        let key = birth.cache_key();
        if let Some(hit) = self.cache.get(key) {
            tracing::debug!("Cache hit for birth data key {}", key);
            return Ok(hit);
        }

        let (positions, approximate) = self.acquire_positions(birth).await?;
        let chart = assemble(&positions, approximate)?;

        self.cache.put(key, chart.clone());
        tracing::info!(
            "Chart computed: type={}, profile={}, definition={}{}",
            chart.energy_type.label(),
            chart.profile,
            chart.definition.label(),
            if approximate { " (approximate positions)" } else { "" }
        );

        Ok(chart)
    }

    /// Try each source in order. Source failures are absorbed and logged;
    /// only the exhaustion of every source surfaces as an error.
    async fn acquire_positions(&self, birth: &BirthData) -> Result<(Vec<CelestialPosition>, bool)> {
        for source in &self.sources {
            match source.positions(birth).await {
                Ok(positions) => match validate_positions(source.name(), &positions) {
                    Ok(()) => {
                        tracing::debug!(
                            "Position source '{}' returned {} bodies",
                            source.name(),
                            positions.len()
                        );
                        return Ok((positions, source.is_approximation()));
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Position source '{}' returned an unusable list: {}",
                            source.name(),
                            e
                        );
                    }
                },
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(
                        "Position source '{}' failed, trying next: {}",
                        source.name(),
                        e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(EngineError::ProcessingError {
            message: "All position sources failed".to_string(),
        })
    }
}

/// A usable position list carries every tracked body exactly once (Earth
/// excluded; the assembler synthesizes it) with finite longitudes. A
/// partial or garbled list is a typed failure, never fed downstream.
fn validate_positions(source_name: &str, positions: &[CelestialPosition]) -> Result<()> {
    let fail = |message: String| EngineError::PositionSourceError {
        source_name: source_name.to_string(),
        message,
    };

    if positions.iter().any(|p| p.body == Body::Earth) {
        return Err(fail(
            "Earth must not be reported by a source; it is derived from the Sun".to_string(),
        ));
    }
    for body in Body::PROVIDED {
        let count = positions.iter().filter(|p| p.body == body).count();
        if count != 1 {
            return Err(fail(format!(
                "Expected exactly one {} entry, got {}",
                body.name(),
                count
            )));
        }
    }
    if let Some(bad) = positions.iter().find(|p| !p.longitude.is_finite()) {
        return Err(fail(format!(
            "Non-finite longitude for {}",
            bad.body.name()
        )));
    }
    Ok(())
}
