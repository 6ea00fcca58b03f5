//! ECS wiring for the cargo flight simulation.
//!
//! The kernel types are plain structs; this module drives them from
//! Bevy's FixedUpdate schedule. Per tick and per in-flight body: the
//! gravity source pass deposits every celestial body's pull, the cargo
//! advances one step, and any drawn encounter is surfaced as an event.
//! Each cargo entity owns its accumulator, state, and route; bodies
//! never share mutable state.

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::cargo::CargoBody;
use crate::config::SystemConfig;
use crate::gravity::gravity_contribution;

/// Simulation clock controls: pause and time scale over the fixed
/// timestep.
#[derive(Resource, Clone, Debug)]
pub struct FlightClock {
    /// Multiplier applied to the fixed timestep.
    pub scale: f64,
    /// Whether the simulation is paused.
    pub paused: bool,
}

impl Default for FlightClock {
    fn default() -> Self {
        Self {
            scale: 1.0,
            paused: false,
        }
    }
}

/// Seeded random source for encounter draws. Insert a seeded value for
/// deterministic runs; the default seeds from the OS.
#[derive(Resource)]
pub struct EncounterRng(pub ChaChaRng);

impl Default for EncounterRng {
    fn default() -> Self {
        Self(ChaChaRng::from_os_rng())
    }
}

/// Event to launch a parked cargo body with an initial impulse.
#[derive(Event)]
pub struct LaunchEvent {
    /// Cargo entity to launch.
    pub cargo: Entity,
    /// Impulse vector applied at the center of mass.
    pub impulse: DVec3,
}

/// Event to abort every run and return all cargo to the parking
/// position.
#[derive(Event)]
pub struct ResetEvent;

/// Event fired when a tick's weighted draw selects an encounter.
///
/// The explicit no-encounter entry in a zone's list is filtered out
/// here; consumers only see actual events.
#[derive(Event, Clone, Debug)]
pub struct EncounterEvent {
    /// Cargo that rolled the encounter.
    pub cargo: Entity,
    /// Display name of the zone it happened in.
    pub zone: String,
    /// Encounter identifier, e.g. `rock_hazard`.
    pub encounter_id: String,
    /// Encounter display name.
    pub encounter_name: String,
}

/// List entry id that marks "nothing happened this tick".
pub const NO_ENCOUNTER_ID: &str = "no_encounter";

/// Plugin providing the cargo flight simulation.
///
/// Adds the configuration, clock, and RNG resources, the flight
/// events, and the FixedUpdate tick pipeline (launch, step, reset, in
/// that order).
pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SystemConfig>()
            .init_resource::<FlightClock>()
            .init_resource::<EncounterRng>()
            .add_event::<LaunchEvent>()
            .add_event::<ResetEvent>()
            .add_event::<EncounterEvent>()
            .add_systems(
                FixedUpdate,
                (handle_launches, flight_step, handle_reset).chain(),
            );
    }
}

/// Spawn a cargo body parked at the configured launch position.
pub fn spawn_cargo(commands: &mut Commands, config: &SystemConfig) -> Entity {
    let home = config.launch_position().unwrap_or(DVec3::ZERO);
    commands.spawn(CargoBody::new(config.cargo_mass, home)).id()
}

/// Apply pending launch events.
fn handle_launches(
    mut launches: EventReader<LaunchEvent>,
    mut bodies: Query<&mut CargoBody>,
) {
    for launch in launches.read() {
        if let Ok(mut body) = bodies.get_mut(launch.cargo) {
            body.launch(launch.impulse);
        } else {
            warn!("launch event for unknown cargo entity {:?}", launch.cargo);
        }
    }
}

/// Main tick system: gravity source pass, integration, encounter
/// resolution, and route capture for every in-flight cargo body.
fn flight_step(
    mut bodies: Query<(Entity, &mut CargoBody)>,
    config: Res<SystemConfig>,
    clock: Res<FlightClock>,
    mut rng: ResMut<EncounterRng>,
    time: Res<Time>,
    mut encounters: EventWriter<EncounterEvent>,
) {
    if clock.paused {
        return;
    }
    let dt = time.delta_secs_f64() * clock.scale;
    if dt <= 0.0 {
        return;
    }

    let sources = config.celestial_bodies();

    for (entity, mut body) in bodies.iter_mut() {
        if !body.is_in_flight() {
            continue;
        }

        // All contributions for this tick land before the integrator
        // consumes the accumulator.
        let pos = body.state().pos;
        for source in &sources {
            body.add_gravity(gravity_contribution(pos, source));
        }

        let selected = body.update(dt, &config.zones, &mut rng.0);

        if let Some(encounter) = selected
            && encounter.id != NO_ENCOUNTER_ID
        {
            let zone = body
                .current_zone_name(&config.zones)
                .unwrap_or_default()
                .to_owned();
            info!("encounter '{}' rolled in {}", encounter.id, zone);
            encounters.send(EncounterEvent {
                cargo: entity,
                zone,
                encounter_id: encounter.id,
                encounter_name: encounter.name,
            });
        }
    }
}

/// Return every cargo body to the parking position on reset.
fn handle_reset(mut resets: EventReader<ResetEvent>, mut bodies: Query<&mut CargoBody>) {
    if resets.read().next().is_none() {
        return;
    }
    resets.clear();

    info!("resetting cargo runs");
    for mut body in bodies.iter_mut() {
        body.reset();
    }
}
