//! Test utilities for cargo flight simulation tests.
//!
//! Provides fixtures for configured bodies and zone tables plus
//! assertion helpers for flight-state invariants.

use bevy::math::DVec3;

use crate::cargo::CargoBody;
use crate::encounters::{Encounter, EncounterZone, EncounterZoneTable};

/// Fixtures for creating test bodies and zone tables.
pub mod fixtures {
    use super::*;

    /// A cargo body parked at the stock launch distance (450 * 1.1
    /// would be the configured parking spot; tests that care about the
    /// zone at launch park exactly at 450).
    pub fn parked_cargo(distance: f64) -> CargoBody {
        CargoBody::new(1.0, DVec3::new(distance, 0.0, 0.0))
    }

    /// A cargo body already launched with the given impulse.
    pub fn launched_cargo(distance: f64, impulse: DVec3) -> CargoBody {
        let mut body = parked_cargo(distance);
        body.launch(impulse);
        body
    }

    /// A single zone spanning `[inner, outer)` with one weighted list.
    pub fn zone(id: &str, inner: f64, outer: f64, encounters: Vec<Encounter>) -> EncounterZone {
        EncounterZone {
            id: id.into(),
            name: id.into(),
            inner_boundary: inner,
            outer_boundary: outer,
            encounter_rate: 0.1,
            encounters,
        }
    }

    /// A table with one zone holding a skewed two-entry list, for
    /// selection-statistics tests.
    pub fn skewed_table(heavy_weight: f64, light_weight: f64) -> EncounterZoneTable {
        EncounterZoneTable::new(vec![zone(
            "band",
            0.0,
            1e9,
            vec![
                Encounter::new("heavy", "Heavy", heavy_weight),
                Encounter::new("light", "Light", light_weight),
            ],
        )])
    }
}

/// Assertions over flight state.
pub mod assertions {
    use crate::types::FlightState;

    /// Panics unless the live orientation quaternion is unit norm.
    pub fn assert_unit_orientation(state: &FlightState) {
        let norm = state.orientation.length();
        assert!(
            (norm - 1.0).abs() < 1e-9,
            "orientation norm drifted to {norm}"
        );
    }

    /// Panics if distance or time ever decreased between two states.
    pub fn assert_progress_monotonic(before: &FlightState, after: &FlightState) {
        assert!(
            after.distance_traveled >= before.distance_traveled,
            "distance decreased: {} -> {}",
            before.distance_traveled,
            after.distance_traveled
        );
        assert!(
            after.time_in_transit >= before.time_in_transit,
            "time decreased: {} -> {}",
            before.time_in_transit,
            after.time_in_transit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launched_cargo_is_in_flight() {
        let body = fixtures::launched_cargo(450.0, DVec3::new(1.0, 0.0, 0.0));
        assert!(body.is_in_flight());
    }

    #[test]
    fn test_skewed_table_covers_everything() {
        let table = fixtures::skewed_table(0.9, 0.1);
        assert!(table.zone_for_distance(450.0).is_some());
    }
}
