//! Per-frame simulation step
//!
//! One tick per host frame, unit timestep: velocities are in pixels per
//! frame and integration is a plain `pos += vel`. Input is applied at the
//! top of the tick, so event callbacks only ever write into `TickInput`
//! between frames and never touch the world mid-step.

use glam::Vec2;

use super::collision::{overlapping, resolve_collision};
use super::state::World;
use crate::consts::*;

/// Input gathered since the last frame (one-shots cleared by the caller)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer position, if it moved
    pub pointer: Option<Vec2>,
    /// New viewport size from a resize event (one-shot)
    pub resize: Option<Vec2>,
    /// Rebuild the whole batch, from a click (one-shot)
    pub respawn: bool,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) {
    if let Some(size) = input.resize {
        world.resize(size.x, size.y);
    } else if input.respawn {
        world.respawn();
    }
    if let Some(pointer) = input.pointer {
        world.pointer = pointer;
    }

    // Collision phase: each unordered pair considered exactly once. The
    // approach guard inside resolve_collision makes still-overlapping pairs
    // that already bounced a no-op.
    let n = world.particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = world.particles.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if overlapping(a, b) {
                resolve_collision(a, b);
            }
        }
    }

    let bounds = world.bounds;
    let pointer = world.pointer;
    for p in &mut world.particles {
        // Boundary reflection: sign flip per axis, both axes checked
        // independently, no position clamp
        if p.pos.x - p.radius <= 0.0 || p.pos.x + p.radius >= bounds.x {
            p.vel.x = -p.vel.x;
        }
        if p.pos.y - p.radius <= 0.0 || p.pos.y + p.radius >= bounds.y {
            p.vel.y = -p.vel.y;
        }

        // Proximity highlight: ramp up near the pointer (may overshoot the
        // ceiling by one step), decay to zero elsewhere
        if pointer.distance(p.pos) < HIGHLIGHT_RADIUS && p.alpha < ALPHA_MAX {
            p.alpha += ALPHA_STEP;
        } else if p.alpha > 0.0 {
            p.alpha = (p.alpha - ALPHA_STEP).max(0.0);
        }

        // Explicit Euler, unit timestep
        p.pos += p.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Particle;
    use proptest::prelude::*;

    /// World with a hand-placed particle set and the pointer parked far away
    fn world_with(particles: Vec<Particle>) -> World {
        let mut world = World::new(800.0, 600.0, 5);
        world.particles = particles;
        world.pointer = Vec2::new(10_000.0, 10_000.0);
        world
    }

    fn particle_at(pos: Vec2, vel: Vec2) -> Particle {
        Particle {
            pos,
            vel,
            radius: PARTICLE_RADIUS,
            color: 0,
            mass: PARTICLE_MASS,
            alpha: 0.0,
        }
    }

    #[test]
    fn test_boundary_reflection_flips_sign() {
        let p = particle_at(Vec2::new(PARTICLE_RADIUS, 300.0), Vec2::new(-4.0, 0.0));
        let mut world = world_with(vec![p]);

        tick(&mut world, &TickInput::default());

        let p = &world.particles[0];
        assert_eq!(p.vel.x, 4.0);
        // Reflection happens before integration, so the particle moved inward
        assert_eq!(p.pos.x, PARTICLE_RADIUS + 4.0);
        assert_eq!(p.pos.y, 300.0);
    }

    #[test]
    fn test_corner_reflects_both_axes() {
        let p = particle_at(
            Vec2::new(800.0 - PARTICLE_RADIUS, 600.0 - PARTICLE_RADIUS),
            Vec2::new(2.0, 3.0),
        );
        let mut world = world_with(vec![p]);

        tick(&mut world, &TickInput::default());

        assert_eq!(world.particles[0].vel, Vec2::new(-2.0, -3.0));
    }

    #[test]
    fn test_alpha_ramps_near_pointer_and_decays_away() {
        let p = particle_at(Vec2::new(400.0, 300.0), Vec2::ZERO);
        let mut world = world_with(vec![p]);
        world.pointer = Vec2::new(400.0, 300.0);

        tick(&mut world, &TickInput::default());
        assert!((world.particles[0].alpha - ALPHA_STEP).abs() < 1e-6);

        for _ in 0..30 {
            tick(&mut world, &TickInput::default());
        }
        let peak = world.particles[0].alpha;
        assert!(peak >= ALPHA_MAX - 1e-6);
        assert!(peak <= ALPHA_MAX + ALPHA_STEP + 1e-6);

        // Move the pointer away; alpha must decay all the way to zero
        let away = TickInput {
            pointer: Some(Vec2::new(10_000.0, 10_000.0)),
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut world, &away);
        }
        assert_eq!(world.particles[0].alpha, 0.0);
    }

    #[test]
    fn test_radius_and_mass_never_change() {
        let mut world = World::new(1280.0, 720.0, 12345);
        let before: Vec<(f32, f32)> = world.particles.iter().map(|p| (p.radius, p.mass)).collect();

        let input = TickInput {
            pointer: Some(Vec2::new(640.0, 360.0)),
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut world, &input);
        }

        let after: Vec<(f32, f32)> = world.particles.iter().map(|p| (p.radius, p.mass)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_alpha_bounded_over_long_run() {
        let mut world = World::new(1280.0, 720.0, 777);
        let input = TickInput {
            pointer: Some(Vec2::new(640.0, 360.0)),
            ..Default::default()
        };
        for _ in 0..500 {
            tick(&mut world, &input);
            for p in &world.particles {
                assert!(p.alpha >= 0.0);
                assert!(p.alpha <= ALPHA_MAX + ALPHA_STEP + 1e-6);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = World::new(1024.0, 768.0, 99999);
        let mut b = World::new(1024.0, 768.0, 99999);

        let inputs = [
            TickInput {
                pointer: Some(Vec2::new(100.0, 100.0)),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                pointer: Some(Vec2::new(512.0, 384.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &inputs {
            tick(&mut a, input);
            tick(&mut b, input);
        }

        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn test_resize_rebuilds_batch() {
        let mut world = World::new(800.0, 600.0, 11);
        let input = TickInput {
            resize: Some(Vec2::new(1920.0, 1080.0)),
            ..Default::default()
        };
        tick(&mut world, &input);

        assert_eq!(world.bounds, Vec2::new(1920.0, 1080.0));
        assert_eq!(world.particles.len(), PARTICLE_COUNT);
        // Spawned inside the new bounds, then integrated one step
        for p in &world.particles {
            assert!(p.pos.x >= p.radius - SPAWN_SPEED);
            assert!(p.pos.x <= 1920.0 - p.radius + SPAWN_SPEED);
            assert!(p.pos.y >= p.radius - SPAWN_SPEED);
            assert!(p.pos.y <= 1080.0 - p.radius + SPAWN_SPEED);
        }
    }

    #[test]
    fn test_respawn_replaces_batch() {
        let mut world = World::new(800.0, 600.0, 11);
        let before = world.particles.clone();
        let input = TickInput {
            respawn: true,
            ..Default::default()
        };
        tick(&mut world, &input);

        assert_eq!(world.particles.len(), PARTICLE_COUNT);
        // Fresh draw from the RNG stream, so a different arrangement
        assert_ne!(before, world.particles);
    }

    #[test]
    fn test_head_on_pair_swaps_through_tick() {
        let a = particle_at(Vec2::new(390.0, 300.0), Vec2::new(2.0, 0.0));
        let b = particle_at(Vec2::new(410.0, 300.0), Vec2::new(-2.0, 0.0));
        let mut world = world_with(vec![a, b]);

        tick(&mut world, &TickInput::default());

        assert!((world.particles[0].vel.x - (-2.0)).abs() < 1e-5);
        assert!((world.particles[1].vel.x - 2.0).abs() < 1e-5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_alpha_bounds_hold_under_pointer_walk(
            seed in 0u64..10_000,
            moves in proptest::collection::vec((0.0f32..1280.0, 0.0f32..720.0), 1..20),
        ) {
            let mut world = World::new(1280.0, 720.0, seed);
            for (x, y) in moves {
                let input = TickInput {
                    pointer: Some(Vec2::new(x, y)),
                    ..Default::default()
                };
                tick(&mut world, &input);
                for p in &world.particles {
                    prop_assert!(p.alpha >= 0.0);
                    prop_assert!(p.alpha <= ALPHA_MAX + ALPHA_STEP + 1e-6);
                }
            }
        }
    }
}
