//! Decorative geometry generated once at render setup.

use std::f64::consts::TAU;

use crate::foundation::{
    core::Point,
    error::{PhaseError, PhaseResult},
};

/// SplitMix64; small, seedable and stable across platforms.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Scattered particle positions, each coordinate uniform in `[-extent/2, extent/2)`.
pub fn produce_layout_points(count: usize, seed: u64, extent: f64) -> Vec<Point> {
    let mut rng = Rng64::new(seed);
    (0..count)
        .map(|_| {
            let x = (rng.next_f64_01() - 0.5) * extent;
            let y = (rng.next_f64_01() - 0.5) * extent;
            Point::new(x, y)
        })
        .collect()
}

/// `count` points evenly spaced on a circle around the origin, starting at angle 0.
pub fn ring_points(count: usize, radius: f64) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * TAU;
            Point::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}

/// One clock-face tick, drawn from `from` (inner) to `to` (on the rim).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tick {
    pub from: Point,
    pub to: Point,
    pub major: bool,
}

/// Clock-face ticks; every `major_every`-th tick starts at `major_inner` instead of `minor_inner`.
pub fn clock_ticks(
    count: usize,
    major_every: usize,
    outer: f64,
    major_inner: f64,
    minor_inner: f64,
) -> PhaseResult<Vec<Tick>> {
    if major_every == 0 {
        return Err(PhaseError::validation("major_every must be >= 1"));
    }
    Ok((0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * TAU;
            let (sin, cos) = angle.sin_cos();
            let major = i % major_every == 0;
            let inner = if major { major_inner } else { minor_inner };
            Tick {
                from: Point::new(cos * inner, sin * inner),
                to: Point::new(cos * outer, sin * outer),
                major,
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/points.rs"]
mod tests;
