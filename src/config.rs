//! Static system configuration.
//!
//! The planet roster, star, cargo parameters, and encounter zone table
//! are loaded once before the simulation starts and treated as
//! read-only from then on. Validation happens here, at load time; the
//! simulation kernel itself never re-checks configuration invariants.

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

use crate::encounters::{Encounter, EncounterZone, EncounterZoneTable};
use crate::types::{CelestialBody, PRIMARY_REFERENCE_MASS};

/// Configuration validation failure. Every variant is a load-time
/// rejection; the kernel never sees an invalid configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("body '{name}' has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("cargo mass {0} must be positive")]
    NonPositiveCargoMass(f64),

    #[error("zone '{id}' has non-finite boundaries")]
    NonFiniteBoundary { id: String },

    #[error("zone '{id}' has inner boundary {inner} >= outer boundary {outer}")]
    InvalidZoneBounds { id: String, inner: f64, outer: f64 },

    #[error("zones '{first}' and '{second}' overlap")]
    OverlappingZones { first: String, second: String },

    #[error("encounter '{encounter}' in zone '{zone}' has negative weight")]
    NegativeWeight { zone: String, encounter: String },

    #[error("route references unknown planet '{0}'")]
    UnknownPlanet(String),
}

/// One planet entry: orbital placement plus physical parameters.
/// Visual fields from the original data (textures, colors) are the
/// rendering layer's concern and are not carried here.
#[derive(Clone, Debug)]
pub struct PlanetInfo {
    pub name: String,
    /// Orbital radius from the star, game units.
    pub orbit_radius: f64,
    /// Angular position on the orbit, radians.
    pub pos_angle: f64,
    /// Physical scale (used as the body radius).
    pub scale: f64,
    pub mass: f64,
}

/// Full static description of the simulated system.
#[derive(Resource, Clone, Debug)]
pub struct SystemConfig {
    pub planets: Vec<PlanetInfo>,
    /// Mass of the star at the system origin.
    pub star_mass: f64,
    /// Star scale (radius), game units.
    pub star_scale: f64,
    pub cargo_mass: f64,
    /// Planet the cargo launches from.
    pub starting_planet: String,
    /// Planet the cargo is routed to.
    pub ending_planet: String,
    pub zones: EncounterZoneTable,
}

impl Default for SystemConfig {
    /// The stock freight run: four planets around a compact star, with
    /// four encounter bands between them. Angles are fixed here; call
    /// [`SystemConfig::randomize_angles`] to scatter the planets.
    fn default() -> Self {
        Self {
            planets: vec![
                PlanetInfo {
                    name: "hermes".into(),
                    orbit_radius: 450.0,
                    pos_angle: 0.0,
                    scale: 10.0,
                    mass: 1e14,
                },
                PlanetInfo {
                    name: "tellus".into(),
                    orbit_radius: 750.0,
                    pos_angle: 1.7,
                    scale: 30.0,
                    mass: 3e14,
                },
                PlanetInfo {
                    name: "zeus".into(),
                    orbit_radius: 2500.0,
                    pos_angle: 3.9,
                    scale: 200.0,
                    mass: 7e15,
                },
                PlanetInfo {
                    name: "janus".into(),
                    orbit_radius: 4000.0,
                    pos_angle: 5.2,
                    scale: 110.0,
                    mass: 7.4e14,
                },
            ],
            star_mass: PRIMARY_REFERENCE_MASS,
            star_scale: 500.0,
            cargo_mass: 1.0,
            starting_planet: "hermes".into(),
            ending_planet: "zeus".into(),
            zones: default_zones(),
        }
    }
}

impl SystemConfig {
    /// Scatter the planets to random orbital angles, as the original
    /// system layout does on load.
    pub fn randomize_angles(&mut self, rng: &mut impl Rng) {
        for planet in &mut self.planets {
            planet.pos_angle = rng.random::<f64>() * std::f64::consts::TAU;
        }
    }

    /// Check every load-time invariant. Called once before the
    /// configuration is handed to the kernel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cargo_mass <= 0.0 {
            return Err(ConfigError::NonPositiveCargoMass(self.cargo_mass));
        }
        if self.star_mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass {
                name: "star".into(),
                mass: self.star_mass,
            });
        }
        for planet in &self.planets {
            if planet.mass <= 0.0 {
                return Err(ConfigError::NonPositiveMass {
                    name: planet.name.clone(),
                    mass: planet.mass,
                });
            }
        }

        for name in [&self.starting_planet, &self.ending_planet] {
            if !self.planets.iter().any(|p| &p.name == name) {
                return Err(ConfigError::UnknownPlanet(name.clone()));
            }
        }

        let zones = self.zones.zones();
        for zone in zones {
            if !zone.inner_boundary.is_finite() || !zone.outer_boundary.is_finite() {
                return Err(ConfigError::NonFiniteBoundary {
                    id: zone.id.clone(),
                });
            }
            if zone.inner_boundary >= zone.outer_boundary {
                return Err(ConfigError::InvalidZoneBounds {
                    id: zone.id.clone(),
                    inner: zone.inner_boundary,
                    outer: zone.outer_boundary,
                });
            }
            for encounter in &zone.encounters {
                if encounter.probability < 0.0 {
                    return Err(ConfigError::NegativeWeight {
                        zone: zone.id.clone(),
                        encounter: encounter.id.clone(),
                    });
                }
            }
        }

        // Bands must not overlap; lookup is first-match and ambiguity
        // would silently shadow later zones.
        for (i, a) in zones.iter().enumerate() {
            for b in &zones[i + 1..] {
                if a.inner_boundary < b.outer_boundary && b.inner_boundary < a.outer_boundary {
                    return Err(ConfigError::OverlappingZones {
                        first: a.id.clone(),
                        second: b.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Materialize the gravity sources: the star at the origin plus
    /// every planet at its configured orbital position.
    pub fn celestial_bodies(&self) -> Vec<CelestialBody> {
        let mut bodies = vec![CelestialBody {
            name: "star".into(),
            mass: self.star_mass,
            pos: DVec3::ZERO,
            radius: Some(self.star_scale),
        }];
        bodies.extend(self.planets.iter().map(|p| CelestialBody {
            radius: Some(p.scale),
            ..CelestialBody::at_angle(p.name.clone(), p.mass, p.orbit_radius, p.pos_angle)
        }));
        bodies
    }

    /// The configured origin planet.
    pub fn origin_planet(&self) -> Option<&PlanetInfo> {
        self.planets.iter().find(|p| p.name == self.starting_planet)
    }

    /// Where the cargo sits before launch: just outside the origin
    /// planet, at 1.1x its orbital position.
    pub fn launch_position(&self) -> Option<DVec3> {
        self.origin_planet().map(|p| {
            DVec3::new(
                p.orbit_radius * p.pos_angle.cos(),
                0.0,
                p.orbit_radius * p.pos_angle.sin(),
            ) * 1.1
        })
    }
}

/// The stock encounter band layout, innermost first.
pub fn default_zones() -> EncounterZoneTable {
    EncounterZoneTable::new(vec![
        EncounterZone {
            id: "inner_system".into(),
            name: "Inner System".into(),
            inner_boundary: 250.0,
            outer_boundary: 800.0,
            encounter_rate: 0.1,
            encounters: vec![
                Encounter::new("solar_flare", "Solar Flare", 0.99),
                Encounter::new("no_encounter", "", 0.01),
            ],
        },
        EncounterZone {
            id: "asteroid_belt".into(),
            name: "Asteroid Belt".into(),
            inner_boundary: 1000.0,
            outer_boundary: 1700.0,
            encounter_rate: 0.2,
            encounters: vec![
                Encounter::new("rock_hazard", "Rock Hazard", 0.90),
                Encounter::new("no_encounter", "", 0.1),
            ],
        },
        EncounterZone {
            id: "space_highway".into(),
            name: "Space Highway".into(),
            inner_boundary: 1800.0,
            outer_boundary: 2500.0,
            encounter_rate: 0.3,
            encounters: vec![Encounter::new("no_encounter", "", 0.01)],
        },
        EncounterZone {
            id: "outer_system".into(),
            name: "Outer System".into(),
            inner_boundary: 2600.0,
            outer_boundary: 5000.0,
            encounter_rate: 0.4,
            encounters: vec![Encounter::new("no_encounter", "", 0.01)],
        },
    ])
}
