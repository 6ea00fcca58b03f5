//! Starhaul - Cargo Flight Simulation Kernel
//!
//! Simulates a cargo body coasting through a simplified planetary
//! system: per-tick gravity accumulation from every massive body,
//! semi-implicit Euler integration, trajectory recording for trail
//! rendering and replay, and weighted-random encounter resolution by
//! radial zone.

pub mod cargo;
pub mod config;
pub mod encounters;
pub mod flight;
pub mod gravity;
pub mod integrator;
pub mod route;
pub mod types;

#[cfg(test)]
mod proptest_flight;
#[cfg(test)]
pub mod test_utils;
