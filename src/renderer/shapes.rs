//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::STROKE_WIDTH;
use crate::sim::World;

/// Segments per tessellated circle
const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = center + inner_radius * Vec2::new(theta1.cos(), theta1.sin());
        let outer1 = center + outer_radius * Vec2::new(theta1.cos(), theta1.sin());
        let inner2 = center + inner_radius * Vec2::new(theta2.cos(), theta2.sin());
        let outer2 = center + outer_radius * Vec2::new(theta2.cos(), theta2.sin());

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Build the frame's vertex list from the world: per particle, a fill circle
/// at the highlight alpha plus a full-alpha stroke ring at the rim.
pub fn world_vertices(world: &World) -> Vec<Vertex> {
    let per_particle = (CIRCLE_SEGMENTS * 3 + CIRCLE_SEGMENTS * 6) as usize;
    let mut vertices = Vec::with_capacity(world.particles.len() * per_particle);

    for p in &world.particles {
        let fill = colors::palette(p.color, p.alpha);
        let stroke = colors::palette(p.color, 1.0);

        vertices.extend(circle(p.pos, p.radius, fill, CIRCLE_SEGMENTS));
        vertices.extend(ring(
            p.pos,
            (p.radius - STROKE_WIDTH).max(0.0),
            p.radius,
            stroke,
            CIRCLE_SEGMENTS,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, colors::PINK, 16);
        assert_eq!(verts.len(), 16 * 3);
    }

    #[test]
    fn test_ring_stays_within_radii() {
        let verts = ring(Vec2::new(5.0, 5.0), 8.0, 10.0, colors::TEAL, 24);
        assert_eq!(verts.len(), 24 * 6);
        for v in &verts {
            let d = Vec2::new(v.position[0] - 5.0, v.position[1] - 5.0).length();
            assert!(d >= 8.0 - 1e-4 && d <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_world_vertices_alpha_split() {
        let world = World::new(1280.0, 720.0, 3);
        let verts = world_vertices(&world);
        assert!(!verts.is_empty());
        // Fresh spawn: fills are invisible (alpha 0), strokes are opaque
        let alphas: Vec<f32> = verts.iter().map(|v| v.color[3]).collect();
        assert!(alphas.iter().any(|&a| a == 0.0));
        assert!(alphas.iter().any(|&a| a == 1.0));
    }
}
