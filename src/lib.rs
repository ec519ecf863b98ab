//! Orbfield - an interactive particle collision demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, boundary bounce, elastic
//!   collisions, pointer-proximity highlight)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

pub use sim::{Particle, TickInput, World, resolve_collision, tick};

/// Simulation constants
pub mod consts {
    /// Particles per spawn batch (collection size is fixed between spawns)
    pub const PARTICLE_COUNT: usize = 300;
    /// Circle radius in pixels (uniform across the batch)
    pub const PARTICLE_RADIUS: f32 = 15.0;
    /// Every particle has unit mass
    pub const PARTICLE_MASS: f32 = 1.0;
    /// Spawn velocity components are uniform in [-SPAWN_SPEED, SPAWN_SPEED)
    pub const SPAWN_SPEED: f32 = 2.5;

    /// Pointer distance under which a particle lights up
    pub const HIGHLIGHT_RADIUS: f32 = 120.0;
    /// Highlight fill alpha ceiling
    pub const ALPHA_MAX: f32 = 0.2;
    /// Per-frame alpha ramp step (up near the pointer, down otherwise)
    pub const ALPHA_STEP: f32 = 0.02;

    /// Placement retries per particle before accepting an overlapping spot
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

    /// Number of entries in the renderer's color palette
    pub const PALETTE_SIZE: u32 = 5;

    /// Stroke ring thickness in pixels
    pub const STROKE_WIDTH: f32 = 2.0;
}
