//! Encounter zones and weighted random event selection.
//!
//! The system is divided into concentric radial bands around the
//! reference body. Each band carries a weighted list of possible random
//! events; while the cargo is inside a band, one entry is drawn per
//! tick by cumulative-weight sampling over an injectable RNG.

use bevy::prelude::*;
use rand::Rng;

/// One possible random event within a zone.
#[derive(Clone, Debug)]
pub struct Encounter {
    /// Stable identifier, e.g. `solar_flare`.
    pub id: String,
    /// Display name. Empty for the explicit no-encounter entry.
    pub name: String,
    /// Selection weight. Weights in a list need not sum to 1; the draw
    /// normalizes over the configured total.
    pub probability: f64,
    /// Optional icon or asset reference for the UI layer.
    pub image: Option<String>,
}

impl Encounter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, probability: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            probability,
            image: None,
        }
    }
}

/// A concentric radial band with its event list.
///
/// A distance `d` belongs to the zone when `inner <= d < outer`; the
/// outer boundary always belongs to the next band out (or to no zone).
#[derive(Clone, Debug)]
pub struct EncounterZone {
    pub id: String,
    pub name: String,
    pub inner_boundary: f64,
    pub outer_boundary: f64,
    /// Advisory base rate carried from configuration. Selection uses
    /// the weighted list, not this value.
    pub encounter_rate: f64,
    pub encounters: Vec<Encounter>,
}

impl EncounterZone {
    /// Whether `distance` falls inside this band.
    pub fn contains(&self, distance: f64) -> bool {
        self.inner_boundary <= distance && distance < self.outer_boundary
    }
}

/// Ordered set of zones, loaded once at startup and never mutated.
/// Lookup returns the first structurally matching zone.
#[derive(Resource, Clone, Debug, Default)]
pub struct EncounterZoneTable {
    zones: Vec<EncounterZone>,
}

impl EncounterZoneTable {
    pub fn new(zones: Vec<EncounterZone>) -> Self {
        Self { zones }
    }

    /// Zones in priority order.
    pub fn zones(&self) -> &[EncounterZone] {
        &self.zones
    }

    /// The zone containing `distance`, or `None` when the distance
    /// falls in a gap or beyond the outermost band. Not an error.
    pub fn zone_for_distance(&self, distance: f64) -> Option<&EncounterZone> {
        self.zones.iter().find(|zone| zone.contains(distance))
    }
}

/// Draw one entry from a weighted list, or `None` when the list is
/// empty or carries no positive weight.
///
/// The roll is scaled by the configured total, which normalizes weight
/// lists that do not sum to 1.
pub fn pick_weighted<'a>(encounters: &'a [Encounter], rng: &mut impl Rng) -> Option<&'a Encounter> {
    let total: f64 = encounters.iter().map(|e| e.probability.max(0.0)).sum();
    if total <= 0.0 {
        return None;
    }

    let roll: f64 = rng.random::<f64>() * total;
    let mut cumulative = 0.0;

    for encounter in encounters {
        cumulative += encounter.probability.max(0.0);
        if roll < cumulative {
            return Some(encounter);
        }
    }

    // Rounding at the top of the cumulative range lands on the last entry.
    encounters.last()
}

/// Tracks which zone the cargo currently occupies and performs the
/// per-tick weighted draw.
#[derive(Clone, Debug, Default)]
pub struct EncounterResolver {
    current_zone: Option<usize>,
}

impl EncounterResolver {
    /// The zone resolved by the most recent [`Self::resolve`] call.
    pub fn current_zone<'a>(&self, table: &'a EncounterZoneTable) -> Option<&'a EncounterZone> {
        self.current_zone.and_then(|i| table.zones().get(i))
    }

    /// Classify `distance` against the table and draw one weighted
    /// event from the active zone's list.
    ///
    /// Outside every zone, or with a degenerate event list, this
    /// resolves deterministically to `None`.
    pub fn resolve<'a>(
        &mut self,
        table: &'a EncounterZoneTable,
        distance: f64,
        rng: &mut impl Rng,
    ) -> Option<&'a Encounter> {
        self.current_zone = table
            .zones()
            .iter()
            .position(|zone| zone.contains(distance));

        let zone = self.current_zone(table)?;
        pick_weighted(&zone.encounters, rng)
    }
}
