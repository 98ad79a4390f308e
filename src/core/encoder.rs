//! Fractal gate encoding: maps an ecliptic longitude onto the 64-gate
//! wheel and its nested line / color / tone / base subdivisions.

use crate::core::catalog::gate_name;
use crate::domain::model::{Body, GateActivation};

/// 360° / 64 gates.
pub const GATE_WIDTH: f64 = 360.0 / 64.0;
/// 6 lines per gate.
pub const LINE_WIDTH: f64 = GATE_WIDTH / 6.0;
/// 6 colors per line.
pub const COLOR_WIDTH: f64 = LINE_WIDTH / 6.0;
/// 6 tones per color.
pub const TONE_WIDTH: f64 = COLOR_WIDTH / 6.0;
/// 6 bases per tone.
pub const BASE_WIDTH: f64 = TONE_WIDTH / 6.0;

/// Wrap an angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

fn level_index(remainder: f64, width: f64, max: u8) -> (u8, f64) {
    let raw = (remainder / width).floor() as i64 + 1;
    let index = raw.clamp(1, i64::from(max)) as u8;
    let consumed = f64::from(index - 1) * width;
    (index, remainder - consumed)
}

/// Encode one body's longitude into its activation. Pure function;
/// non-finite input is rejected by validation before this is reached.
pub fn encode(body: Body, longitude: f64) -> GateActivation {
    let lon = normalize_degrees(longitude);

    let (gate, rem) = level_index(lon, GATE_WIDTH, 64);
    let (line, rem) = level_index(rem, LINE_WIDTH, 6);
    let (color, rem) = level_index(rem, COLOR_WIDTH, 6);
    let (tone, rem) = level_index(rem, TONE_WIDTH, 6);
    let (base, _) = level_index(rem, BASE_WIDTH, 6);

    GateActivation {
        gate,
        line,
        color,
        tone,
        base,
        body,
        name: gate_name(gate).to_string(),
    }
}
