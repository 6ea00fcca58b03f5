//! Common test utilities for integration tests.

use bevy::math::DVec3;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use starhaul::cargo::CargoBody;
use starhaul::config::SystemConfig;
use starhaul::encounters::EncounterZoneTable;
use starhaul::gravity::gravity_contribution;
use starhaul::types::CelestialBody;

/// Deterministic RNG for encounter draws.
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// A cargo body parked at `distance` on the x-axis, already launched
/// with `impulse`.
pub fn launched_cargo(distance: f64, impulse: DVec3) -> CargoBody {
    let mut body = CargoBody::new(1.0, DVec3::new(distance, 0.0, 0.0));
    body.launch(impulse);
    body
}

/// Drive one full tick the way the plugin does: source pass over all
/// bodies, then the cargo update.
pub fn tick(
    body: &mut CargoBody,
    sources: &[CelestialBody],
    zones: &EncounterZoneTable,
    dt: f64,
    rng: &mut ChaChaRng,
) {
    let pos = body.state().pos;
    for source in sources {
        body.add_gravity(gravity_contribution(pos, source));
    }
    body.update(dt, zones, rng);
}

/// Gravity sources for the stock system configuration.
pub fn stock_sources() -> (SystemConfig, Vec<CelestialBody>) {
    let config = SystemConfig::default();
    let sources = config.celestial_bodies();
    (config, sources)
}
