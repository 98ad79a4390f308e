//! Channel and center resolution over the activated-gate set.

use crate::core::catalog::{center_of_gate, CHANNELS};
use crate::domain::model::{Center, CenterState, Channel, GateActivation};
use std::collections::HashSet;

/// Scan the channel catalog against the activated gates. A channel is
/// binary: active iff both endpoint gates are present, no matter which
/// bodies produced them.
pub fn resolve_channels(gates: &[GateActivation]) -> Vec<Channel> {
    let activated: HashSet<u8> = gates.iter().map(|g| g.gate).collect();
    let mut channels = Vec::new();

    for def in &CHANNELS {
        let (a, b) = def.gates;
        if !(activated.contains(&a) && activated.contains(&b)) {
            continue;
        }
        match (center_of_gate(a), center_of_gate(b)) {
            (Some(center_a), Some(center_b)) => channels.push(Channel {
                id: format!("{}-{}", a, b),
                name: def.name.to_string(),
                gates: (a, b),
                centers: (center_a, center_b),
            }),
            _ => {
                // Catalog inconsistency; skip rather than emit a channel
                // with an unknown endpoint.
                tracing::warn!("Channel {}-{} references an unmapped gate, skipping", a, b);
            }
        }
    }

    channels
}

/// A center is defined iff it is an endpoint of at least one active
/// channel. All 9 centers are reported, in catalog order.
pub fn resolve_centers(channels: &[Channel]) -> Vec<CenterState> {
    let defined: HashSet<Center> = channels
        .iter()
        .flat_map(|c| [c.centers.0, c.centers.1])
        .collect();

    Center::ALL
        .iter()
        .map(|&center| CenterState {
            center,
            defined: defined.contains(&center),
        })
        .collect()
}
