//! Trajectory recording for trail rendering and replay.
//!
//! Each in-flight tick appends exactly one immutable sample to the
//! route. Renderers iterate the sequence in capture order; nothing
//! outside the owning cargo body ever mutates it.

use bevy::math::{DQuat, DVec3};

use crate::integrator::derive_or_normalize_orientation;
use crate::types::FlightState;

/// One recorded sample of a body's state at a point in simulated time.
#[derive(Clone, Debug)]
pub struct TrajectoryNode {
    /// Position at capture.
    pub pos: DVec3,
    /// Orientation at capture, always a unit quaternion.
    pub orientation: DQuat,
    /// Velocity snapshot from the start of the captured tick.
    pub velocity: DVec3,
    /// Gravity snapshot from the start of the captured tick.
    pub gravity: DVec3,
    /// Time in transit at capture (seconds).
    pub time: f64,
    /// Display name of the encounter zone active at capture, or empty
    /// when the body was outside every zone.
    pub encounter_zone: String,
}

/// Ordered, append-only sequence of trajectory samples.
#[derive(Clone, Debug, Default)]
pub struct RoutePath {
    nodes: Vec<TrajectoryNode>,
}

impl RoutePath {
    /// Capture one sample from the current flight state.
    ///
    /// The node's orientation reuses the live quaternion when it is a
    /// proper unit quaternion and otherwise re-derives it from the
    /// euler rotation vector, so a valid quaternion is recorded either
    /// way.
    pub fn capture(&mut self, state: &FlightState, zone_name: Option<&str>) {
        self.nodes.push(TrajectoryNode {
            pos: state.pos,
            orientation: derive_or_normalize_orientation(Some(state.orientation), state.rotation),
            velocity: state.last_velocity,
            gravity: state.last_gravity,
            time: state.time_in_transit,
            encounter_zone: zone_name.unwrap_or_default().to_owned(),
        });
    }

    /// Most recent sample, if any.
    pub fn last(&self) -> Option<&TrajectoryNode> {
        self.nodes.last()
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the route holds no samples.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate samples in capture order.
    pub fn iter(&self) -> impl Iterator<Item = &TrajectoryNode> {
        self.nodes.iter()
    }

    /// Drop every recorded sample. Idempotent; the only way samples are
    /// released short of dropping the whole route.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }
}

impl<'a> IntoIterator for &'a RoutePath {
    type Item = &'a TrajectoryNode;
    type IntoIter = std::slice::Iter<'a, TrajectoryNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
