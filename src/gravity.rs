//! Gravity accumulation for the cargo body.
//!
//! Each tick, an external source pass sums the gravitational pull of
//! every massive body into a per-body accumulator. The integrator then
//! consumes the sum exactly once and resets it, so a contribution can
//! never carry over into the next tick.

use bevy::math::DVec3;

use crate::types::{CelestialBody, GRAV_CONSTANT, MIN_SOURCE_DISTANCE_SQ};

/// Per-tick store of net gravitational influence on one body.
///
/// `add` is order-independent (plain vector sum). The integrator must
/// drain the store with [`GravityAccumulator::consume_and_reset`] in the
/// same tick; reading without resetting would double-apply forces.
#[derive(Clone, Debug, Default)]
pub struct GravityAccumulator {
    sum: DVec3,
}

impl GravityAccumulator {
    /// Add one source's contribution to this tick's sum.
    pub fn add(&mut self, contribution: DVec3) {
        self.sum += contribution;
    }

    /// Return the accumulated sum and reset the store to zero.
    pub fn consume_and_reset(&mut self) -> DVec3 {
        std::mem::take(&mut self.sum)
    }

    /// Current pending sum, without resetting. For display only.
    pub fn pending(&self) -> DVec3 {
        self.sum
    }
}

/// Gravitational acceleration exerted by a single body on a point at
/// `pos`: `G * m / r²`, directed from `pos` toward the body.
///
/// Sources closer than [`MIN_SOURCE_DISTANCE_SQ`] contribute nothing
/// rather than blowing up near the singularity.
#[inline]
pub fn gravity_contribution(pos: DVec3, body: &CelestialBody) -> DVec3 {
    let delta = body.pos - pos;
    let r_squared = delta.length_squared();

    if r_squared <= MIN_SOURCE_DISTANCE_SQ {
        return DVec3::ZERO;
    }

    let r = r_squared.sqrt();
    // delta/r is the unit vector toward the body
    delta * (GRAV_CONSTANT * body.mass / (r_squared * r))
}

/// Run the source pass: deposit every body's contribution into the
/// accumulator. Must complete before the integrator consumes the sum.
pub fn accumulate_from_bodies(
    accumulator: &mut GravityAccumulator,
    pos: DVec3,
    bodies: &[CelestialBody],
) {
    for body in bodies {
        accumulator.add(gravity_contribution(pos, body));
    }
}
