//! Flight integration for the cargo body.
//!
//! Advances one body's kinematic state by a single tick using
//! semi-implicit Euler: the accumulated gravity is applied to velocity
//! first, then position advances with the updated velocity. Distance
//! deliberately integrates the pre-step speed; recorded trajectories
//! depend on that ordering, so it must not be "corrected" to use the
//! post-impulse velocity.

use bevy::math::{DQuat, DVec3, EulerRot};

use crate::gravity::GravityAccumulator;
use crate::types::FlightState;

/// Quaternions within this tolerance of unit norm count as proper unit
/// quaternions and are reused rather than re-derived.
const UNIT_NORM_TOLERANCE: f64 = 1e-6;

/// Advance `state` by one tick of duration `dt`, consuming the gravity
/// accumulated for this tick.
///
/// Step order:
/// 1. snapshot last gravity/velocity (pre-step values, used for
///    recording and the heading derivation)
/// 2. `vel += gravity * dt` (accumulator holds acceleration; applying
///    it over `dt` is the per-tick impulse)
/// 3. `pos += vel * dt` with the post-impulse velocity
/// 4. `distance += |last_velocity| * dt`, `time += dt`
/// 5. heading update from `up × v̂` (skipped at zero speed)
///
/// `dt <= 0` is a strict no-op: nothing moves and the accumulator is
/// left untouched for the tick that will actually run.
pub fn step(state: &mut FlightState, accumulator: &mut GravityAccumulator, dt: f64) {
    if dt <= 0.0 {
        return;
    }

    let gravity = accumulator.consume_and_reset();
    state.last_gravity = gravity;
    state.last_velocity = state.vel;

    state.vel += gravity * dt;
    state.pos += state.vel * dt;

    state.distance_traveled += state.last_velocity.length() * dt;
    state.time_in_transit += dt;

    // Heading: nose roughly along the pre-step velocity. The cross
    // product is kept as an euler rotation vector, not a true
    // look-direction solve.
    let speed = state.last_velocity.length();
    if speed > 0.0 {
        let direction = state.last_velocity / speed;
        let up = state.orientation * DVec3::Y;
        state.rotation = up.cross(direction);
        state.orientation = derive_or_normalize_orientation(None, state.rotation);
    }
}

/// Produce a valid unit orientation quaternion from whichever source is
/// usable: a proper unit quaternion is reused (normalized), anything
/// else falls back to deriving from the euler rotation vector.
///
/// Both the live-state and route-capture paths go through here so the
/// degenerate cases are handled once.
pub fn derive_or_normalize_orientation(existing: Option<DQuat>, rotation: DVec3) -> DQuat {
    if let Some(q) = existing
        && q.is_finite()
        && (q.length_squared() - 1.0).abs() <= UNIT_NORM_TOLERANCE
    {
        return q.normalize();
    }
    // Yaw/pitch/roll from the euler vector, matching the original
    // engine's euler-to-quaternion convention.
    DQuat::from_euler(EulerRot::YXZ, rotation.y, rotation.x, rotation.z)
}
