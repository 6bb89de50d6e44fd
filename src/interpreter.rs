//! Interpreter that converts an expanded symbol sequence into a [`RibbonMesh`].
//!
//! The entry point is [`RibbonInterpreter`]. Build it from a [`RibbonConfig`], then
//! call [`RibbonInterpreter::build_mesh`] with a sequence, or
//! [`RibbonInterpreter::generate`] to expand the configured seed and mesh it in one go.

use crate::config::RibbonConfig;
use crate::error::RibbonError;
use crate::grammar::Symbol;
use crate::mesh::{MAX_VERTICES, RibbonMesh};
use crate::palette::Palette;
use crate::rewriter::{expand, forward_count};
use crate::turtle::{RibbonOp, RibbonTurtleState};
use glam::{Vec2, Vec3};
use tracing::{debug, trace};

/// Vertices laid down per forward step.
pub const VERTICES_PER_SEGMENT: usize = 4;

/// Interprets a symbol sequence as a thick, colored ribbon.
pub struct RibbonInterpreter {
    seed: Vec<Symbol>,
    generations: u32,
    step: f32,
    thickness: f32,
    palette: Palette,
    color_delta: f32,
    origin: Vec2,
}

impl RibbonInterpreter {
    /// Validates `config` and decodes its seed.
    pub fn new(config: RibbonConfig) -> Result<Self, RibbonError> {
        config.validate()?;
        let seed = config.seed_symbols()?;
        Ok(Self {
            seed,
            generations: config.generations,
            step: config.step,
            thickness: config.thickness,
            palette: config.palette,
            color_delta: config.color_delta,
            origin: config.origin,
        })
    }

    pub fn seed(&self) -> &[Symbol] {
        &self.seed
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Expands the configured seed for the configured number of generations.
    pub fn expand(&self) -> Vec<Symbol> {
        expand(&self.seed, self.generations)
    }

    /// Vertices the configured seed and generation count will need.
    ///
    /// Saturates instead of overflowing, so huge generation counts still compare
    /// correctly against [`MAX_VERTICES`].
    pub fn planned_vertices(&self) -> usize {
        forward_count(&self.seed, self.generations).saturating_mul(VERTICES_PER_SEGMENT)
    }

    /// Fails with [`RibbonError::IndexOverflow`] if the configured expansion could
    /// not be indexed with `u16`. Cheap: the sequence is never built.
    pub fn check_capacity(&self) -> Result<(), RibbonError> {
        check_vertices(self.planned_vertices())
    }

    /// Expands the seed and builds the mesh for the result.
    ///
    /// The capacity check runs before expansion, so an oversized generation count
    /// is rejected without allocating the sequence.
    pub fn generate(&self) -> Result<RibbonMesh, RibbonError> {
        self.check_capacity()?;
        let sequence = self.expand();
        self.build_mesh(&sequence)
    }

    /// Walks `sequence` once and returns the finished mesh.
    ///
    /// # Segments
    ///
    /// Each forward symbol moves the turtle one step and emits four vertices: the
    /// former and the new position, each pushed to both sides of the path by
    /// `step * thickness / 2`. All four share the color at the current palette
    /// index. The quad is split into triangles `(i, i+1, i+2)` and `(i+1, i+2, i+3)`.
    ///
    /// # Turns
    ///
    /// A turn rotates the heading and advances the palette index. Once a segment
    /// exists, it also stitches a corner triangle from the trailing edge of the
    /// last segment to the first vertex of the next one. That triangle is written
    /// when the next segment arrives, so a sequence that ends in turns leaves no
    /// index pointing past the vertex buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RibbonError::IndexOverflow`] before building anything if the
    /// sequence needs more vertices than a `u16` index can address.
    pub fn build_mesh(&self, sequence: &[Symbol]) -> Result<RibbonMesh, RibbonError> {
        let segments = sequence.iter().filter(|s| s.is_forward()).count();
        let vertices = segments * VERTICES_PER_SEGMENT;
        check_vertices(vertices)?;

        let mut mesh = RibbonMesh::with_capacity(vertices);
        let mut turtle = RibbonTurtleState::at_cell(self.origin, self.step);
        let half_width = self.step * self.thickness / 2.0;
        // Counted in u32 and narrowed per push; the check above keeps every index below 2^16.
        let mut vertex_count: u32 = 0;
        let mut pending_corners: usize = 0;

        for &symbol in sequence {
            match RibbonOp::from(symbol) {
                RibbonOp::Forward => {
                    let base = vertex_count;
                    for _ in 0..pending_corners {
                        mesh.push_corner(index(base), index(base - 1), index(base - 2));
                    }
                    pending_corners = 0;

                    let former = turtle.advance(self.step);
                    let offset = turtle.perpendicular() * half_width;
                    self.push_segment(
                        &mut mesh,
                        former,
                        turtle.position,
                        offset,
                        turtle.color_index,
                    );
                    mesh.push_triangle(index(base), index(base + 1), index(base + 2));
                    mesh.push_triangle(index(base + 1), index(base + 2), index(base + 3));
                    vertex_count += VERTICES_PER_SEGMENT as u32;
                }
                RibbonOp::TurnLeft => {
                    turtle.turn_left();
                    self.turn(&mut turtle, vertex_count, &mut pending_corners);
                }
                RibbonOp::TurnRight => {
                    turtle.turn_right();
                    self.turn(&mut turtle, vertex_count, &mut pending_corners);
                }
            }
        }

        if pending_corners > 0 {
            trace!(pending_corners, "dropped corners with no following segment");
        }
        debug!(
            symbols = sequence.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            corners = mesh.corner_count(),
            "built ribbon mesh"
        );
        Ok(mesh)
    }

    // Shared by both turn directions once the heading has been rotated.
    fn turn(
        &self,
        turtle: &mut RibbonTurtleState,
        vertex_count: u32,
        pending_corners: &mut usize,
    ) {
        turtle.color_index = self.palette.advance(turtle.color_index, self.color_delta);
        if vertex_count >= 2 {
            *pending_corners += 1;
        }
    }

    fn push_segment(
        &self,
        mesh: &mut RibbonMesh,
        from: Vec3,
        to: Vec3,
        offset: Vec3,
        color_index: f32,
    ) {
        let color = self.palette.evaluate(color_index);
        mesh.push_vertex(from + offset, color);
        mesh.push_vertex(from - offset, color);
        mesh.push_vertex(to + offset, color);
        mesh.push_vertex(to - offset, color);
    }
}

fn check_vertices(vertices: usize) -> Result<(), RibbonError> {
    if vertices > MAX_VERTICES {
        return Err(RibbonError::IndexOverflow {
            vertices,
            limit: MAX_VERTICES,
        });
    }
    Ok(())
}

// Callers only reach this after the MAX_VERTICES check, so every index fits.
fn index(i: u32) -> u16 {
    i as u16
}
