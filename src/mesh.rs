use glam::{Vec3, Vec4};
use serde::Serialize;

/// Highest vertex count addressable by a `u16` index buffer.
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// The finished ribbon geometry, ready to be uploaded by a renderer.
///
/// Positions are in clip space (`[-1, 1]`, z = 0). There is exactly one color per
/// vertex, and `indices` is a plain triangle list. Fields are private so a built
/// mesh cannot be modified after the interpreter hands it out.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RibbonMesh {
    positions: Vec<Vec3>,
    colors: Vec<Vec4>,
    indices: Vec<u16>,
    corner_count: usize,
}

impl RibbonMesh {
    pub(crate) fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
            // Two quad triangles per four vertices, plus roughly one corner per segment.
            indices: Vec::with_capacity(vertices / 4 * 9),
            corner_count: 0,
        }
    }

    /// Appends a unit-space point, converting it to clip space.
    pub(crate) fn push_vertex(&mut self, unit: Vec3, color: Vec4) {
        let clip = unit * 2.0 - 1.0;
        self.positions.push(Vec3::new(clip.x, clip.y, 0.0));
        self.colors.push(color);
    }

    pub(crate) fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub(crate) fn push_corner(&mut self, a: u16, b: u16, c: u16) {
        self.push_triangle(a, b, c);
        self.corner_count += 1;
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Triangle list, three indices per triangle.
    pub fn index_buffer(&self) -> &[u16] {
        &self.indices
    }

    /// Flat `x, y, z` floats, three per vertex.
    pub fn vertex_buffer(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Flat `r, g, b, a` floats, four per vertex.
    pub fn color_buffer(&self) -> Vec<f32> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of joint triangles stitched in at turns.
    pub fn corner_count(&self) -> usize {
        self.corner_count
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
