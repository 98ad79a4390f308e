//! Classification over the resolved center/channel graph: energy type,
//! strategy, authority, profile, definition and incarnation cross.
//!
//! Every function here is pure; the graph work runs on petgraph over at
//! most 9 nodes.

use crate::core::catalog::{CROSSES, DEFAULT_CROSS_DESCRIPTION, DEFAULT_CROSS_NAME, PROFILE_CYCLE};
use crate::domain::model::{
    Authority, Center, CenterState, Channel, Definition, EnergyType, GateActivation,
    IncarnationCross,
};
use petgraph::algo::{connected_components, has_path_connecting};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::{HashMap, HashSet};

/// Undirected center graph: one node per channel-touched center, one edge
/// per active channel. Channel endpoints are defined by construction, so
/// the node set is exactly the defined-center set.
fn center_graph(channels: &[Channel]) -> (UnGraph<Center, ()>, HashMap<Center, NodeIndex>) {
    let mut graph = UnGraph::new_undirected();
    let mut nodes: HashMap<Center, NodeIndex> = HashMap::new();

    for channel in channels {
        let (a, b) = channel.centers;
        let na = *nodes.entry(a).or_insert_with(|| graph.add_node(a));
        let nb = *nodes.entry(b).or_insert_with(|| graph.add_node(b));
        graph.add_edge(na, nb, ());
    }

    (graph, nodes)
}

/// Type classification. The branch order is load-bearing: the Manifesting
/// Generator check must run before plain Generator, and the zero-centers
/// Reflector check before the Projector catch-all.
pub fn classify_type(centers: &[CenterState], channels: &[Channel]) -> EnergyType {
    let defined: HashSet<Center> = centers
        .iter()
        .filter(|c| c.defined)
        .map(|c| c.center)
        .collect();

    let sacral = defined.contains(&Center::Sacral);
    let throat = defined.contains(&Center::Throat);

    if sacral && throat {
        let (graph, nodes) = center_graph(channels);
        if let (Some(&from), Some(&to)) = (nodes.get(&Center::Sacral), nodes.get(&Center::Throat))
        {
            if has_path_connecting(&graph, from, to, None) {
                return EnergyType::ManifestingGenerator;
            }
        }
    }
    if sacral {
        return EnergyType::Generator;
    }
    if throat {
        return EnergyType::Manifestor;
    }
    if defined.is_empty() {
        return EnergyType::Reflector;
    }
    EnergyType::Projector
}

/// Fixed type-to-strategy table.
pub fn strategy_for(energy_type: EnergyType) -> &'static str {
    match energy_type {
        EnergyType::Generator | EnergyType::ManifestingGenerator => "Respond",
        EnergyType::Manifestor => "Inform",
        EnergyType::Projector => "Wait for Invitation",
        EnergyType::Reflector => "Wait for Lunar Cycle",
    }
}

/// Authority priority order. Documented and fixed, not insertion order:
/// Solar Plexus, Sacral, Spleen, Heart, Identity, then the environmental
/// fallback when nothing is defined.
const AUTHORITY_PRIORITY: [(Center, Authority); 5] = [
    (Center::SolarPlexus, Authority::Emotional),
    (Center::Sacral, Authority::Sacral),
    (Center::Spleen, Authority::Splenic),
    (Center::Heart, Authority::Ego),
    (Center::Identity, Authority::SelfProjected),
];

pub fn resolve_authority(centers: &[CenterState]) -> Authority {
    let defined: HashSet<Center> = centers
        .iter()
        .filter(|c| c.defined)
        .map(|c| c.center)
        .collect();

    for (center, authority) in AUTHORITY_PRIORITY {
        if defined.contains(&center) {
            return authority;
        }
    }
    Authority::Environmental
}

/// Profile label from the Sun and Earth line values. If the direct pair
/// is not one of the six canonical labels, fall back to the canonical
/// cycle indexed by `(sun + earth) % 6`. The fallback is preserved
/// verbatim for reproducibility.
pub fn profile_label(sun_line: u8, earth_line: u8) -> String {
    let direct = format!("{}/{}", sun_line, earth_line);
    if PROFILE_CYCLE.contains(&direct.as_str()) {
        return direct;
    }
    let index = usize::from(sun_line + earth_line) % PROFILE_CYCLE.len();
    PROFILE_CYCLE[index].to_string()
}

/// Definition class: connected components of the defined-center subgraph,
/// with active channels as edges.
pub fn classify_definition(channels: &[Channel]) -> Definition {
    let (graph, _) = center_graph(channels);
    match connected_components(&graph) {
        0 => Definition::None,
        1 => Definition::Single,
        2 => Definition::Split,
        3 => Definition::TripleSplit,
        _ => Definition::QuadrupleSplit,
    }
}

/// First cross whose both gates are activated wins; the catalog order is
/// the priority order. Unknown combinations get the default cross rather
/// than an error.
pub fn resolve_cross(gates: &[GateActivation]) -> IncarnationCross {
    let activated: HashSet<u8> = gates.iter().map(|g| g.gate).collect();

    for def in &CROSSES {
        if activated.contains(&def.gates.0) && activated.contains(&def.gates.1) {
            return IncarnationCross {
                name: def.name.to_string(),
                description: def.description.to_string(),
            };
        }
    }

    IncarnationCross {
        name: DEFAULT_CROSS_NAME.to_string(),
        description: DEFAULT_CROSS_DESCRIPTION.to_string(),
    }
}
