//! Fixed lookup catalogs: gate names, gate-to-center mapping, the channel
//! catalog and the incarnation-cross catalog. Pure data, no resolution
//! logic — the catalogs can be extended without touching any algorithm.
//!
//! The channel and cross catalogs are an illustrative subset of the full
//! canonical material (the complete catalog has 36 channels). They are
//! kept as-is deliberately; completing them is a data change only.

use crate::domain::model::Center;

/// Hexagram names, indexed by gate number - 1.
pub const GATE_NAMES: [&str; 64] = [
    "The Creative",
    "The Receptive",
    "Difficulty at the Beginning",
    "Youthful Folly",
    "Waiting",
    "Conflict",
    "The Army",
    "Holding Together",
    "The Taming Power of the Small",
    "Treading",
    "Peace",
    "Standstill",
    "Fellowship",
    "Possession in Great Measure",
    "Modesty",
    "Enthusiasm",
    "Following",
    "Work on What Has Been Spoiled",
    "Approach",
    "Contemplation",
    "Biting Through",
    "Grace",
    "Splitting Apart",
    "Return",
    "Innocence",
    "The Taming Power of the Great",
    "Nourishment",
    "The Great Exceeds",
    "The Abysmal",
    "The Clinging Fire",
    "Influence",
    "Duration",
    "Retreat",
    "The Power of the Great",
    "Progress",
    "Darkening of the Light",
    "The Family",
    "Opposition",
    "Obstruction",
    "Deliverance",
    "Decrease",
    "Increase",
    "Breakthrough",
    "Coming to Meet",
    "Gathering Together",
    "Pushing Upward",
    "Oppression",
    "The Well",
    "Revolution",
    "The Cauldron",
    "The Arousing",
    "Keeping Still",
    "Development",
    "The Marrying Maiden",
    "Abundance",
    "The Wanderer",
    "The Gentle",
    "The Joyous",
    "Dispersion",
    "Limitation",
    "Inner Truth",
    "Preponderance of the Small",
    "After Completion",
    "Before Completion",
];

/// Name of a gate, or a generic label for numbers outside the catalog.
pub fn gate_name(gate: u8) -> &'static str {
    GATE_NAMES
        .get(usize::from(gate).wrapping_sub(1))
        .copied()
        .unwrap_or("Unknown Gate")
}

/// Which center a gate belongs to. Covers all 64 gates.
pub fn center_of_gate(gate: u8) -> Option<Center> {
    let center = match gate {
        61 | 63 | 64 => Center::Head,
        4 | 11 | 17 | 24 | 43 | 47 => Center::Ajna,
        8 | 12 | 16 | 20 | 23 | 31 | 33 | 35 | 45 | 56 | 62 => Center::Throat,
        1 | 2 | 7 | 10 | 13 | 15 | 25 | 46 => Center::Identity,
        21 | 26 | 40 | 51 => Center::Heart,
        3 | 5 | 9 | 14 | 27 | 29 | 34 | 42 | 59 => Center::Sacral,
        18 | 28 | 32 | 44 | 48 | 50 | 57 => Center::Spleen,
        6 | 22 | 30 | 36 | 37 | 49 | 55 => Center::SolarPlexus,
        19 | 38 | 39 | 41 | 52 | 53 | 54 | 58 | 60 => Center::Root,
        _ => return None,
    };
    Some(center)
}

#[derive(Debug, Clone, Copy)]
pub struct ChannelDef {
    pub gates: (u8, u8),
    pub name: &'static str,
}

/// The channel catalog (illustrative subset of the canonical 36).
pub const CHANNELS: [ChannelDef; 12] = [
    ChannelDef { gates: (1, 8), name: "Inspiration" },
    ChannelDef { gates: (2, 14), name: "The Beat" },
    ChannelDef { gates: (3, 60), name: "Mutation" },
    ChannelDef { gates: (7, 31), name: "The Alpha" },
    ChannelDef { gates: (9, 52), name: "Concentration" },
    ChannelDef { gates: (11, 56), name: "Curiosity" },
    ChannelDef { gates: (13, 33), name: "The Prodigal" },
    ChannelDef { gates: (20, 34), name: "Charisma" },
    ChannelDef { gates: (21, 45), name: "The Money Line" },
    ChannelDef { gates: (34, 57), name: "Power" },
    ChannelDef { gates: (35, 36), name: "Transitoriness" },
    ChannelDef { gates: (42, 53), name: "Maturation" },
];

#[derive(Debug, Clone, Copy)]
pub struct CrossDef {
    pub gates: (u8, u8),
    pub name: &'static str,
    pub description: &'static str,
}

/// Incarnation-cross catalog, checked in order; the first pair whose both
/// gates are activated wins. Illustrative subset.
pub const CROSSES: [CrossDef; 8] = [
    CrossDef {
        gates: (1, 2),
        name: "Right Angle Cross of the Sphinx",
        description: "A life theme of direction: orienting oneself and others through time, carrying a sense of where things are headed.",
    },
    CrossDef {
        gates: (7, 13),
        name: "Right Angle Cross of the Sphinx",
        description: "A life theme of direction expressed through leadership and the witnessing of the past.",
    },
    CrossDef {
        gates: (10, 15),
        name: "Right Angle Cross of the Vessel of Love",
        description: "A life theme of love embodied as behavior: self-acceptance and love of humanity in its extremes.",
    },
    CrossDef {
        gates: (25, 46),
        name: "Right Angle Cross of the Vessel of Love",
        description: "A life theme of universal love and the love of the body and its experience.",
    },
    CrossDef {
        gates: (37, 40),
        name: "Right Angle Cross of Planning",
        description: "A life theme of bargains and community: building, supporting and renegotiating agreements.",
    },
    CrossDef {
        gates: (5, 35),
        name: "Right Angle Cross of Consciousness",
        description: "A life theme of patterns and progress: fixed rhythms meeting the hunger for new experience.",
    },
    CrossDef {
        gates: (20, 34),
        name: "Right Angle Cross of the Sleeping Phoenix",
        description: "A life theme of awakening through pure busyness: power expressed in the present moment.",
    },
    CrossDef {
        gates: (61, 62),
        name: "Right Angle Cross of Maya",
        description: "A life theme of making sense of the world: inner truth meeting the naming of detail.",
    },
];

pub const DEFAULT_CROSS_NAME: &str = "Undetermined Cross";
pub const DEFAULT_CROSS_DESCRIPTION: &str =
    "No cataloged gate pairing is activated in this chart; the incarnation cross falls back to the general default.";

/// The six canonical profile labels, in fallback-cycle order.
pub const PROFILE_CYCLE: [&str; 6] = ["1/3", "2/4", "3/5", "4/6", "5/1", "6/2"];
