//! Deterministic position approximation, used when no remote ephemeris
//! service is reachable. Each body's longitude is a fixed mean daily
//! motion applied to the days elapsed since J2000, plus a fixed phase,
//! modulo 360. This is an approximation of real ephemeris data, not
//! astronomy, and it is frozen: the same birth data yields the same
//! longitudes forever.

use crate::core::encoder::normalize_degrees;
use crate::domain::model::{BirthData, Body, CelestialPosition};
use crate::domain::ports::PositionSource;
use crate::utils::error::Result;
use async_trait::async_trait;

const J2000: f64 = 2_451_545.0;

struct BodyMotion {
    body: Body,
    /// Mean motion in degrees per day.
    rate: f64,
    /// Mean longitude at J2000, degrees.
    phase: f64,
}

/// Mean motions and J2000 mean longitudes. The South Node is not listed;
/// it is always the North Node plus 180°.
const MOTIONS: [BodyMotion; 8] = [
    BodyMotion { body: Body::Sun, rate: 0.985_647_4, phase: 280.460 },
    BodyMotion { body: Body::Moon, rate: 13.176_396, phase: 218.316 },
    BodyMotion { body: Body::NorthNode, rate: -0.052_953_9, phase: 125.045 },
    BodyMotion { body: Body::Mercury, rate: 4.092_317, phase: 252.251 },
    BodyMotion { body: Body::Venus, rate: 1.602_136, phase: 181.980 },
    BodyMotion { body: Body::Mars, rate: 0.524_039, phase: 355.433 },
    BodyMotion { body: Body::Jupiter, rate: 0.083_056, phase: 34.351 },
    BodyMotion { body: Body::Saturn, rate: 0.033_371, phase: 50.077 },
];

pub struct ApproxPositionSource;

#[async_trait]
impl PositionSource for ApproxPositionSource {
    fn name(&self) -> &'static str {
        "deterministic-approximation"
    }

    fn is_approximation(&self) -> bool {
        true
    }

    async fn positions(&self, birth: &BirthData) -> Result<Vec<CelestialPosition>> {
        let days = birth.julian_day()? - J2000;

        let mut positions = Vec::with_capacity(Body::PROVIDED.len());
        for motion in &MOTIONS {
            let longitude = normalize_degrees(motion.phase + motion.rate * days);
            positions.push(CelestialPosition {
                body: motion.body,
                longitude,
            });
            if motion.body == Body::NorthNode {
                positions.push(CelestialPosition {
                    body: Body::SouthNode,
                    longitude: normalize_degrees(longitude + 180.0),
                });
            }
        }

        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> BirthData {
        BirthData {
            year: 1990,
            month: 5,
            day: 15,
            hour: 14,
            minute: 30,
            second: 0,
            latitude: 55.7558,
            longitude: 37.6176,
        }
    }

    #[tokio::test]
    async fn test_full_roster_in_fixed_order() {
        let positions = ApproxPositionSource.positions(&birth()).await.unwrap();
        let bodies: Vec<Body> = positions.iter().map(|p| p.body).collect();
        assert_eq!(bodies, Body::PROVIDED.to_vec());
    }

    #[tokio::test]
    async fn test_longitudes_are_normalized() {
        let positions = ApproxPositionSource.positions(&birth()).await.unwrap();
        for p in &positions {
            assert!(
                (0.0..360.0).contains(&p.longitude),
                "{} out of range: {}",
                p.body.name(),
                p.longitude
            );
        }
    }

    #[tokio::test]
    async fn test_exactly_reproducible() {
        let a = ApproxPositionSource.positions(&birth()).await.unwrap();
        let b = ApproxPositionSource.positions(&birth()).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_different_birth_minute_changes_fast_movers() {
        let a = ApproxPositionSource.positions(&birth()).await.unwrap();
        let later = BirthData {
            minute: 31,
            ..birth()
        };
        let b = ApproxPositionSource.positions(&later).await.unwrap();
        // The Moon moves ~13°/day, so one minute shifts it measurably.
        let moon_a = a.iter().find(|p| p.body == Body::Moon).unwrap().longitude;
        let moon_b = b.iter().find(|p| p.body == Body::Moon).unwrap().longitude;
        assert_ne!(moon_a, moon_b);
    }

    #[tokio::test]
    async fn test_south_node_opposes_north_node() {
        let positions = ApproxPositionSource.positions(&birth()).await.unwrap();
        let north = positions
            .iter()
            .find(|p| p.body == Body::NorthNode)
            .unwrap()
            .longitude;
        let south = positions
            .iter()
            .find(|p| p.body == Body::SouthNode)
            .unwrap()
            .longitude;
        let separation = normalize_degrees(south - north);
        assert!((separation - 180.0).abs() < 1e-9);
    }
}
