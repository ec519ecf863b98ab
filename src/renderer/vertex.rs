//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// The demo's five-color palette plus the clear color
pub mod colors {
    pub const PINK: [f32; 4] = [0.949, 0.059, 0.475, 1.0]; // #F20F79
    pub const TEAL: [f32; 4] = [0.016, 0.749, 0.749, 1.0]; // #04BFBF
    pub const GOLD: [f32; 4] = [0.949, 0.725, 0.047, 1.0]; // #F2B90C
    pub const UMBER: [f32; 4] = [0.549, 0.306, 0.012, 1.0]; // #8C4E03
    pub const ORANGE: [f32; 4] = [0.949, 0.361, 0.020, 1.0]; // #F25C05
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];

    pub const PALETTE: [[f32; 4]; 5] = [PINK, TEAL, GOLD, UMBER, ORANGE];

    const _: () = assert!(PALETTE.len() == crate::consts::PALETTE_SIZE as usize);

    /// Palette lookup with the given alpha. Out-of-range indices wrap.
    pub fn palette(index: u32, alpha: f32) -> [f32; 4] {
        let [r, g, b, _] = PALETTE[index as usize % PALETTE.len()];
        [r, g, b, alpha]
    }
}
