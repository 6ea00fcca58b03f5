//! Property-based tests for the flight kernel using proptest.
//!
//! These tests verify tick invariants across ranges of impulses, tick
//! durations, and gravity contributions.

use bevy::math::DVec3;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::config::default_zones;
use crate::gravity::GravityAccumulator;
use crate::integrator;
use crate::test_utils::{assertions, fixtures};
use crate::types::FlightState;

fn dvec3(range: f64) -> impl Strategy<Value = DVec3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The accumulator is a plain vector sum regardless of deposit
    /// order, and draining it twice yields zero.
    #[test]
    fn prop_accumulator_sums_and_drains(
        contributions in prop::collection::vec(dvec3(1e3), 0..12),
    ) {
        let mut acc = GravityAccumulator::default();
        let mut expected = DVec3::ZERO;
        for c in &contributions {
            acc.add(*c);
            expected += *c;
        }

        let sum = acc.consume_and_reset();
        prop_assert!((sum - expected).length() < 1e-9);
        prop_assert_eq!(acc.consume_and_reset(), DVec3::ZERO);
    }

    /// With zero accumulated gravity, a step changes distance by
    /// exactly |v| * dt and leaves velocity untouched.
    #[test]
    fn prop_coasting_distance_matches_speed(
        vel in dvec3(100.0),
        dt in 1e-3f64..10.0,
    ) {
        let mut state = FlightState { vel, ..Default::default() };
        let mut acc = GravityAccumulator::default();

        integrator::step(&mut state, &mut acc, dt);

        let expected = vel.length() * dt;
        prop_assert!((state.distance_traveled - expected).abs() < 1e-9);
        prop_assert_eq!(state.vel, vel);
    }

    /// Distance and time never decrease over any tick sequence, and
    /// the orientation stays unit norm throughout.
    #[test]
    fn prop_progress_monotonic_under_forcing(
        impulse in dvec3(50.0),
        pulls in prop::collection::vec(dvec3(5.0), 1..20),
        dt in 1e-3f64..2.0,
    ) {
        let zones = default_zones();
        let mut rng = ChaChaRng::seed_from_u64(7);
        let mut body = fixtures::launched_cargo(450.0, impulse);

        for pull in pulls {
            let before = body.state().clone();
            body.add_gravity(pull);
            body.update(dt, &zones, &mut rng);

            assertions::assert_progress_monotonic(&before, body.state());
            assertions::assert_unit_orientation(body.state());
        }
    }

    /// Non-positive tick durations change nothing.
    #[test]
    fn prop_non_positive_dt_is_no_op(
        vel in dvec3(100.0),
        pending in dvec3(10.0),
        dt in -10.0f64..=0.0,
    ) {
        let mut state = FlightState { vel, ..Default::default() };
        let mut acc = GravityAccumulator::default();
        acc.add(pending);

        integrator::step(&mut state, &mut acc, dt);

        prop_assert_eq!(state.vel, vel);
        prop_assert_eq!(state.pos, DVec3::ZERO);
        prop_assert_eq!(state.distance_traveled, 0.0);
        prop_assert_eq!(state.time_in_transit, 0.0);
        prop_assert_eq!(acc.pending(), pending);
    }

    /// One route node per in-flight tick, regardless of forcing.
    #[test]
    fn prop_one_node_per_tick(
        ticks in 1usize..50,
        impulse in dvec3(20.0),
    ) {
        let zones = default_zones();
        let mut rng = ChaChaRng::seed_from_u64(11);
        let mut body = fixtures::launched_cargo(450.0, impulse);

        for _ in 0..ticks {
            body.update(0.5, &zones, &mut rng);
        }

        prop_assert_eq!(body.route().len(), ticks);
    }
}
