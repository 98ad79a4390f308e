//! Invariant checks over the assembled chart, swept across a spread of
//! birth data through the deterministic position source.

use bodygraph::domain::model::{Body, Center, Definition, DesignChart, EnergyType};
use bodygraph::{ApproxPositionSource, BirthData, ChartEngine, NoopCache};
use std::collections::{HashMap, HashSet, VecDeque};

fn sample_births() -> Vec<BirthData> {
    let mut births = Vec::new();
    for (year, month, day) in [
        (1962, 1, 3),
        (1975, 7, 21),
        (1984, 11, 30),
        (1990, 5, 15),
        (1999, 12, 31),
        (2004, 2, 29),
        (2012, 6, 6),
        (2020, 3, 17),
    ] {
        for (hour, minute) in [(0, 0), (9, 45), (14, 30), (23, 59)] {
            births.push(BirthData {
                year,
                month,
                day,
                hour,
                minute,
                second: 0,
                latitude: 55.7558,
                longitude: 37.6176,
            });
        }
    }
    births
}

async fn compute(birth: &BirthData) -> DesignChart {
    ChartEngine::new(vec![Box::new(ApproxPositionSource)], NoopCache)
        .compute(birth)
        .await
        .unwrap()
}

fn defined_centers(chart: &DesignChart) -> HashSet<Center> {
    chart
        .centers
        .iter()
        .filter(|c| c.defined)
        .map(|c| c.center)
        .collect()
}

/// Connected components among defined centers, channels as edges.
fn component_count(chart: &DesignChart) -> usize {
    let mut adjacency: HashMap<Center, Vec<Center>> = HashMap::new();
    for channel in &chart.channels {
        let (a, b) = channel.centers;
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut seen: HashSet<Center> = HashSet::new();
    let mut components = 0;
    for &start in defined_centers(chart).iter() {
        if seen.contains(&start) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(center) = queue.pop_front() {
            for &next in adjacency.get(&center).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    components
}

#[tokio::test]
async fn test_gate_range_invariants() {
    for birth in sample_births() {
        let chart = compute(&birth).await;
        assert_eq!(chart.gates.len(), Body::PROVIDED.len() + 1);
        for gate in &chart.gates {
            assert!((1..=64).contains(&gate.gate), "gate {}", gate.gate);
            assert!((1..=6).contains(&gate.line));
            assert!((1..=6).contains(&gate.color));
            assert!((1..=6).contains(&gate.tone));
            assert!((1..=6).contains(&gate.base));
        }
    }
}

#[tokio::test]
async fn test_channel_consistency() {
    for birth in sample_births() {
        let chart = compute(&birth).await;
        let activated: HashSet<u8> = chart.gates.iter().map(|g| g.gate).collect();
        for channel in &chart.channels {
            assert!(activated.contains(&channel.gates.0), "channel {}", channel.id);
            assert!(activated.contains(&channel.gates.1), "channel {}", channel.id);
        }
    }
}

#[tokio::test]
async fn test_center_consistency() {
    for birth in sample_births() {
        let chart = compute(&birth).await;
        let touched: HashSet<Center> = chart
            .channels
            .iter()
            .flat_map(|c| [c.centers.0, c.centers.1])
            .collect();
        for state in &chart.centers {
            assert_eq!(
                state.defined,
                touched.contains(&state.center),
                "center {:?} in {:?}",
                state.center,
                birth
            );
        }
    }
}

#[tokio::test]
async fn test_definition_label_matches_component_count() {
    for birth in sample_births() {
        let chart = compute(&birth).await;
        let count = component_count(&chart);
        match chart.definition {
            Definition::None => assert_eq!(count, 0),
            Definition::Single => assert_eq!(count, 1),
            Definition::Split => assert_eq!(count, 2),
            Definition::TripleSplit => assert_eq!(count, 3),
            Definition::QuadrupleSplit => assert!(count >= 4),
        }
    }
}

#[tokio::test]
async fn test_type_totality_and_reflector_rule() {
    for birth in sample_births() {
        let chart = compute(&birth).await;
        let defined = defined_centers(&chart);

        // The enum is closed, so totality holds by construction; the
        // Reflector biconditional is the real invariant.
        assert_eq!(
            chart.energy_type == EnergyType::Reflector,
            defined.is_empty(),
            "type {:?} with defined {:?}",
            chart.energy_type,
            defined
        );

        // Sacral definition forces one of the Generator types.
        if defined.contains(&Center::Sacral) {
            assert!(matches!(
                chart.energy_type,
                EnergyType::Generator | EnergyType::ManifestingGenerator
            ));
        }
    }
}

#[tokio::test]
async fn test_profile_is_always_canonical() {
    for birth in sample_births() {
        let chart = compute(&birth).await;
        assert!(
            ["1/3", "2/4", "3/5", "4/6", "5/1", "6/2"].contains(&chart.profile.as_str()),
            "profile {}",
            chart.profile
        );
    }
}

#[tokio::test]
async fn test_cross_is_always_named() {
    for birth in sample_births() {
        let chart = compute(&birth).await;
        assert!(!chart.incarnation_cross.name.is_empty());
        assert!(!chart.incarnation_cross.description.is_empty());
    }
}
