//! Deterministic simulation module
//!
//! All particle logic lives here. This module must be pure and deterministic:
//! - One tick per frame, unit timestep
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{overlapping, resolve_collision};
pub use state::{Particle, World};
pub use tick::{TickInput, tick};
