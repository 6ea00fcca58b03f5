//! Core kinematic types and constants for the cargo flight simulation.

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;

/// Physical constants (game-scale units)

/// Gravitational constant (m³·kg⁻¹·s⁻²). The simulation runs in scaled
/// game units but keeps the physical value of G.
pub const GRAV_CONSTANT: f64 = 6.67259e-11;

/// Mass of the primary reference body (the star), in game mass units.
pub const PRIMARY_REFERENCE_MASS: f64 = 4e16;

/// Distances closer than this (squared) to a gravity source are treated
/// as singular and contribute no force.
pub const MIN_SOURCE_DISTANCE_SQ: f64 = 1.0;

/// Kinematic state of a simulated body.
/// Uses f64 (DVec3/DQuat) for physics accuracy over system scales.
#[derive(Component, Clone, Debug)]
pub struct FlightState {
    /// Position in world-frame game units.
    pub pos: DVec3,
    /// Velocity in game units per second.
    pub vel: DVec3,
    /// Orientation as a unit quaternion. Derived from [`Self::rotation`]
    /// each step, not independently authoritative.
    pub orientation: DQuat,
    /// Euler rotation vector (the `up × v̂` heading approximation), the
    /// authoritative source for the derived orientation.
    pub rotation: DVec3,
    /// Total path length covered while in flight. Monotonically
    /// non-decreasing between resets.
    pub distance_traveled: f64,
    /// Elapsed simulated time while in flight (seconds).
    pub time_in_transit: f64,
    /// Velocity snapshot taken at the start of the current step.
    pub last_velocity: DVec3,
    /// Gravity snapshot taken at the start of the current step.
    pub last_gravity: DVec3,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            pos: DVec3::ZERO,
            vel: DVec3::ZERO,
            orientation: DQuat::IDENTITY,
            rotation: DVec3::ZERO,
            distance_traveled: 0.0,
            time_in_transit: 0.0,
            last_velocity: DVec3::ZERO,
            last_gravity: DVec3::ZERO,
        }
    }
}

impl FlightState {
    /// Create a state at rest at the given position.
    pub fn at_position(pos: DVec3) -> Self {
        Self {
            pos,
            ..Default::default()
        }
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Radial distance from the system origin (the reference body sits
    /// at the origin in the world frame).
    pub fn radial_distance(&self) -> f64 {
        self.pos.length()
    }

    /// Zero out motion and progress counters, keeping the position.
    pub fn rest(&mut self) {
        self.vel = DVec3::ZERO;
        self.orientation = DQuat::IDENTITY;
        self.rotation = DVec3::ZERO;
        self.distance_traveled = 0.0;
        self.time_in_transit = 0.0;
        self.last_velocity = DVec3::ZERO;
        self.last_gravity = DVec3::ZERO;
    }
}

/// A massive body that exerts gravity on the cargo. Immutable during a
/// tick; positions are treated as instantaneously fixed per tick.
#[derive(Clone, Debug)]
pub struct CelestialBody {
    /// Identifier used in configuration and logs.
    pub name: String,
    /// Mass in game mass units. Must be positive.
    pub mass: f64,
    /// Position in the world frame.
    pub pos: DVec3,
    /// Physical radius, where known. Advisory only; the kernel does no
    /// collision handling.
    pub radius: Option<f64>,
}

impl CelestialBody {
    /// Create a body at a given orbital radius and angle in the
    /// ecliptic (XZ) plane, matching how the system configuration
    /// seeds planet positions.
    pub fn at_angle(name: impl Into<String>, mass: f64, orbit_radius: f64, angle: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            pos: DVec3::new(orbit_radius * angle.cos(), 0.0, orbit_radius * angle.sin()),
            radius: None,
        }
    }
}
