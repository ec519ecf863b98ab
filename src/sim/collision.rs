//! Elastic collision resolution for circle pairs
//!
//! A collision swaps momentum along the line of centers only: both velocity
//! vectors are rotated into a frame whose x-axis runs center-to-center, the
//! standard 1-D two-body elastic formula is applied to the x components, and
//! the results are rotated back. Momentum and kinetic energy of the pair are
//! conserved; the perpendicular components pass through untouched.

use glam::Vec2;

use super::state::Particle;

/// Shared detection predicate: circles overlapping or touching
#[inline]
pub fn overlapping(a: &Particle, b: &Particle) -> bool {
    a.pos.distance(b.pos) - (a.radius + b.radius) < 0.0
}

/// Resolve a 2D elastic collision between `a` and `b` in place.
///
/// Pure over the pair's position/velocity/mass state. Pairs that are already
/// separating are left alone - the approach guard is what keeps a pair that
/// bounced last frame from being re-resolved while still overlapping.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) {
    let rel_vel = a.vel - b.vel;
    let rel_pos = b.pos - a.pos;

    // Approach guard: negative dot product means the pair is moving apart
    if rel_vel.dot(rel_pos) < 0.0 {
        return;
    }

    let (m1, m2) = (a.mass, b.mass);

    // Rotate into a frame whose x-axis is the line of centers
    let angle = -rel_pos.y.atan2(rel_pos.x);
    let rot = Vec2::from_angle(angle);
    let u1 = rot.rotate(a.vel);
    let u2 = rot.rotate(b.vel);

    // 1-D elastic exchange along the line of centers
    let v1 = Vec2::new(
        u1.x * (m1 - m2) / (m1 + m2) + u2.x * 2.0 * m2 / (m1 + m2),
        u1.y,
    );
    let v2 = Vec2::new(
        u2.x * (m2 - m1) / (m1 + m2) + u1.x * 2.0 * m1 / (m1 + m2),
        u2.y,
    );

    // Rotate back
    let unrot = Vec2::from_angle(-angle);
    a.vel = unrot.rotate(v1);
    b.vel = unrot.rotate(v2);
}
