//! Chart assembly: the pure tail of the pipeline, from positions to the
//! finished `DesignChart`.

use crate::core::classify::{
    classify_definition, classify_type, profile_label, resolve_authority, resolve_cross,
    strategy_for,
};
use crate::core::encoder;
use crate::core::resolver::{resolve_centers, resolve_channels};
use crate::domain::model::{Body, CelestialPosition, DesignChart, GateActivation};
use crate::utils::error::{EngineError, Result};

fn missing_sun() -> EngineError {
    EngineError::ProcessingError {
        message: "Position list has no Sun entry; cannot derive the Earth point".to_string(),
    }
}

/// Assemble a chart from a validated position list. The Earth point is
/// synthesized as the Sun's antipode and encoded like any other body.
/// Deterministic: identical positions always yield an identical chart.
pub fn assemble(positions: &[CelestialPosition], approximate: bool) -> Result<DesignChart> {
    let sun = positions
        .iter()
        .find(|p| p.body == Body::Sun)
        .ok_or_else(missing_sun)?;
    let earth_longitude = encoder::normalize_degrees(sun.longitude + 180.0);

    let mut gates: Vec<GateActivation> = Vec::with_capacity(positions.len() + 1);
    for position in positions {
        gates.push(encoder::encode(position.body, position.longitude));
        if position.body == Body::Sun {
            gates.push(encoder::encode(Body::Earth, earth_longitude));
        }
    }

    let channels = resolve_channels(&gates);
    let centers = resolve_centers(&channels);

    let energy_type = classify_type(&centers, &channels);
    let strategy = strategy_for(energy_type).to_string();
    let authority = resolve_authority(&centers);
    let definition = classify_definition(&channels);
    let incarnation_cross = resolve_cross(&gates);

    let sun_line = gates
        .iter()
        .find(|g| g.body == Body::Sun)
        .map(|g| g.line)
        .ok_or_else(missing_sun)?;
    let earth_line = gates
        .iter()
        .find(|g| g.body == Body::Earth)
        .map(|g| g.line)
        .unwrap_or(sun_line);
    let profile = profile_label(sun_line, earth_line);

    Ok(DesignChart {
        energy_type,
        strategy,
        authority,
        profile,
        definition,
        incarnation_cross,
        gates,
        channels,
        centers,
        approximate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Center;

    fn position(body: Body, longitude: f64) -> CelestialPosition {
        CelestialPosition { body, longitude }
    }

    fn sample_positions() -> Vec<CelestialPosition> {
        Body::PROVIDED
            .iter()
            .enumerate()
            .map(|(i, &body)| position(body, (i as f64) * 37.0 + 3.2))
            .collect()
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let positions = sample_positions();
        let a = assemble(&positions, true).unwrap();
        let b = assemble(&positions, true).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_earth_is_synthesized_opposite_the_sun() {
        let chart = assemble(&sample_positions(), false).unwrap();
        let sun = chart.gates.iter().find(|g| g.body == Body::Sun).unwrap();
        let earth = chart.gates.iter().find(|g| g.body == Body::Earth).unwrap();
        // Antipodal longitudes land exactly 32 gates apart on the wheel.
        let delta = (i16::from(earth.gate) - i16::from(sun.gate)).rem_euclid(64);
        assert_eq!(delta, 32);
    }

    #[test]
    fn test_missing_sun_is_a_processing_error() {
        let positions = vec![position(Body::Moon, 12.0)];
        assert!(assemble(&positions, false).is_err());
    }

    #[test]
    fn test_gate_count_includes_the_earth_point() {
        let chart = assemble(&sample_positions(), false).unwrap();
        assert_eq!(chart.gates.len(), Body::PROVIDED.len() + 1);
    }

    #[test]
    fn test_center_states_cover_all_nine() {
        let chart = assemble(&sample_positions(), false).unwrap();
        assert_eq!(chart.centers.len(), Center::ALL.len());
    }

    #[test]
    fn test_channel_endpoints_present_in_gate_set() {
        let chart = assemble(&sample_positions(), false).unwrap();
        let activated: Vec<u8> = chart.gates.iter().map(|g| g.gate).collect();
        for channel in &chart.channels {
            assert!(activated.contains(&channel.gates.0));
            assert!(activated.contains(&channel.gates.1));
        }
    }
}
