//! The simulated cargo body.
//!
//! Composes the kinematic state, the per-tick gravity accumulator, the
//! route recorder, and the encounter resolver into one unit with a
//! strict per-tick ordering: deposit gravity, integrate, resolve the
//! active zone, record a trajectory node. Each body owns all of its
//! mutable state; nothing is shared between bodies.

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::Rng;

use crate::encounters::{Encounter, EncounterResolver, EncounterZoneTable};
use crate::gravity::GravityAccumulator;
use crate::integrator;
use crate::route::{RoutePath, TrajectoryNode};
use crate::types::FlightState;

/// A cargo unit on a freight run.
#[derive(Component, Clone, Debug)]
pub struct CargoBody {
    /// Cargo mass, fixed at construction. Launch impulses divide by it.
    pub mass: f64,
    state: FlightState,
    gravity: GravityAccumulator,
    route: RoutePath,
    resolver: EncounterResolver,
    /// Pre-launch parking position; `reset` returns here.
    home: DVec3,
    in_flight: bool,
    destroyed: bool,
}

impl CargoBody {
    /// Create a body parked at `home`, not yet in flight.
    pub fn new(mass: f64, home: DVec3) -> Self {
        Self {
            mass,
            state: FlightState::at_position(home),
            gravity: GravityAccumulator::default(),
            route: RoutePath::default(),
            resolver: EncounterResolver::default(),
            home,
            in_flight: false,
            destroyed: false,
        }
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn route(&self) -> &RoutePath {
        &self.route
    }

    /// Most recent trajectory sample.
    pub fn last_flight_point(&self) -> Option<&TrajectoryNode> {
        self.route.last()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Display name of the zone the body currently occupies.
    pub fn current_zone_name<'a>(&self, table: &'a EncounterZoneTable) -> Option<&'a str> {
        self.resolver
            .current_zone(table)
            .map(|zone| zone.name.as_str())
    }

    /// Deposit one gravity contribution for the current tick. Called by
    /// the external source pass, any number of times, before `update`.
    pub fn add_gravity(&mut self, contribution: DVec3) {
        self.gravity.add(contribution);
    }

    /// Net gravity pending for this tick, for display.
    pub fn pending_gravity(&self) -> DVec3 {
        self.gravity.pending()
    }

    /// Begin flight: apply `impulse` at the center of mass, seeding the
    /// initial velocity.
    pub fn launch(&mut self, impulse: DVec3) {
        debug_assert!(!self.destroyed, "launch on a destroyed cargo body");
        if self.destroyed {
            return;
        }
        self.in_flight = true;
        self.state.vel += impulse / self.mass;
        info!(
            "cargo launched with impulse {:.2} at distance {:.1}",
            impulse.length(),
            self.state.radial_distance()
        );
    }

    /// Advance one tick while in flight.
    ///
    /// Order within the tick is fixed: the integrator consumes and
    /// clears this tick's accumulated gravity, the resolver classifies
    /// the new radial distance, and the recorder appends exactly one
    /// node tagged with the active zone. Returns the encounter drawn
    /// for this tick, if the active zone produced one.
    ///
    /// Ticking a body that is not in flight is a programmer error:
    /// loud in debug builds, a guarded no-op otherwise.
    pub fn update(
        &mut self,
        dt: f64,
        table: &EncounterZoneTable,
        rng: &mut impl Rng,
    ) -> Option<Encounter> {
        debug_assert!(!self.destroyed, "tick delivered to a destroyed cargo body");
        if !self.in_flight || self.destroyed {
            return None;
        }
        if dt <= 0.0 {
            return None;
        }

        integrator::step(&mut self.state, &mut self.gravity, dt);

        let selected = self
            .resolver
            .resolve(table, self.state.radial_distance(), rng)
            .cloned();

        let zone_name = self
            .resolver
            .current_zone(table)
            .map(|zone| zone.name.as_str());
        self.route.capture(&self.state, zone_name);

        selected
    }

    /// Abort the run: release every trajectory node, zero distance and
    /// time, return to the parking position. Safe to call at any time
    /// and idempotent on already-reset state.
    pub fn reset(&mut self) {
        self.route.reset();
        self.state.rest();
        self.state.pos = self.home;
        self.gravity.consume_and_reset();
        self.resolver = EncounterResolver::default();
        self.in_flight = false;
    }

    /// Terminal shutdown. No further ticks may be delivered; the body
    /// stops where it is.
    pub fn destroy(&mut self) {
        self.state.vel = DVec3::ZERO;
        self.in_flight = false;
        self.destroyed = true;
        info!("cargo destroyed at distance {:.1}", self.state.radial_distance());
    }
}
