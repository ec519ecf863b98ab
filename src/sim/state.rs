//! Particle and world state
//!
//! The whole simulation is a flat vector of particles plus viewport bounds
//! and the latest pointer position. Everything random flows through one
//! seeded PCG stream so a run is reproducible from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::overlapping;
use crate::consts::*;

/// A simulated circular body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Constant post-construction
    pub radius: f32,
    /// Palette index for rendering (opaque to the simulation)
    pub color: u32,
    /// Constant post-construction; 1.0 for every particle in this demo
    pub mass: f32,
    /// Highlight fill opacity, ramped by pointer proximity
    pub alpha: f32,
}

impl Particle {
    /// Construct at `pos` with a velocity drawn uniformly per component
    /// from `[-SPAWN_SPEED, SPAWN_SPEED)`.
    pub fn new(pos: Vec2, radius: f32, color: u32, rng: &mut Pcg32) -> Self {
        let vel = Vec2::new(
            rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
            rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
        );
        Self {
            pos,
            vel,
            radius,
            color,
            mass: PARTICLE_MASS,
            alpha: 0.0,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Viewport size in pixels
    pub bounds: Vec2,
    /// Most recent pointer position (starts at the viewport center)
    pub pointer: Vec2,
    /// The particle batch; size is fixed between spawns
    pub particles: Vec<Particle>,
    rng: Pcg32,
}

impl World {
    /// Create a world and spawn the initial batch
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let bounds = Vec2::new(width, height);
        let mut world = Self {
            seed,
            bounds,
            pointer: bounds / 2.0,
            particles: Vec::with_capacity(PARTICLE_COUNT),
            rng: Pcg32::seed_from_u64(seed),
        };
        world.respawn();
        world
    }

    /// Discard the whole batch and spawn a fresh one (click behavior).
    /// Continues the RNG stream, so each respawn is a new arrangement.
    pub fn respawn(&mut self) {
        self.particles.clear();
        for _ in 0..PARTICLE_COUNT {
            let particle = self.spawn_particle();
            self.particles.push(particle);
        }
        log::info!(
            "spawned {} particles into {}x{}",
            self.particles.len(),
            self.bounds.x,
            self.bounds.y
        );
    }

    /// Update viewport bounds and rebuild the batch (resize behavior)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.respawn();
    }

    /// One candidate position, uniform in `[radius, dim - radius)` per axis.
    /// A viewport too small for the radius degenerates to the axis center.
    fn sample_position(&mut self, radius: f32) -> Vec2 {
        let bounds = self.bounds;
        let mut axis = |dim: f32| {
            if dim > 2.0 * radius {
                self.rng.random_range(radius..dim - radius)
            } else {
                dim / 2.0
            }
        };
        let x = axis(bounds.x);
        let y = axis(bounds.y);
        Vec2::new(x, y)
    }

    /// Place one particle without overlapping the batch so far. Retries are
    /// bounded: a pathological viewport/count combination accepts the last
    /// overlapping candidate with a warning instead of looping forever.
    fn spawn_particle(&mut self) -> Particle {
        let color = self.rng.random_range(0..PALETTE_SIZE);
        let pos = self.sample_position(PARTICLE_RADIUS);
        let mut particle = Particle::new(pos, PARTICLE_RADIUS, color, &mut self.rng);

        let mut attempts = 0;
        while self.particles.iter().any(|p| overlapping(p, &particle)) {
            attempts += 1;
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                log::warn!(
                    "no free spot after {attempts} attempts, accepting overlapping placement"
                );
                break;
            }
            particle.pos = self.sample_position(PARTICLE_RADIUS);
        }
        particle
    }
}
