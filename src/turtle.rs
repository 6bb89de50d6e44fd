//! Turtle state and operations for ribbon interpretation.

use crate::grammar::Symbol;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Number of cardinal headings the turtle can face.
pub const HEADING_COUNT: usize = 4;

/// Unit step for each heading: up, right, down, left.
///
/// Incrementing the heading index therefore turns clockwise in unit space.
pub const DIRECTIONS: [Vec3; HEADING_COUNT] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
];

/// The "first" side offset of the ribbon for each heading. The "second" side is its negation.
pub const PERPENDICULARS: [Vec3; HEADING_COUNT] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
];

/// What a single symbol asks the turtle to do.
///
/// Both forward symbols draw the same way; the distinction only matters while rewriting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RibbonOp {
    /// Advance one step and lay down a quad.
    Forward,
    /// Rotate the heading index by +1.
    TurnLeft,
    /// Rotate the heading index by -1.
    TurnRight,
}

impl From<Symbol> for RibbonOp {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::ForwardA | Symbol::ForwardB => RibbonOp::Forward,
            Symbol::TurnLeft => RibbonOp::TurnLeft,
            Symbol::TurnRight => RibbonOp::TurnRight,
        }
    }
}

/// The state of the ribbon turtle.
///
/// Positions are kept in unit-square space; conversion to clip space happens when
/// vertices are written into the mesh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RibbonTurtleState {
    /// Current unit-space position of the cursor.
    pub position: Vec3,

    /// Index into [`DIRECTIONS`], always in `[0, 4)`.
    pub heading: usize,

    /// Position along the cyclic palette, advanced on every turn.
    pub color_index: f32,
}

impl Default for RibbonTurtleState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: 0,
            color_index: 0.0,
        }
    }
}

impl RibbonTurtleState {
    /// Places the turtle in the middle of the grid cell whose lower-right corner is `origin`.
    ///
    /// With the default origin `(1, 0)` the first segment is centered on the cell in
    /// the bottom-right corner of the unit square.
    pub fn at_cell(origin: Vec2, step: f32) -> Self {
        let half = step / 2.0;
        Self {
            position: Vec3::new(origin.x - half, origin.y + half, 0.0),
            ..Default::default()
        }
    }

    /// Unit vector of the current heading.
    pub fn direction(&self) -> Vec3 {
        DIRECTIONS[self.heading]
    }

    /// The first side offset for the current heading.
    pub fn perpendicular(&self) -> Vec3 {
        PERPENDICULARS[self.heading]
    }

    pub fn turn_left(&mut self) {
        self.heading = (self.heading + 1) % HEADING_COUNT;
    }

    pub fn turn_right(&mut self) {
        self.heading = (self.heading + HEADING_COUNT - 1) % HEADING_COUNT;
    }

    /// Moves forward by `step` and returns the position the turtle left.
    pub fn advance(&mut self, step: f32) -> Vec3 {
        let former = self.position;
        self.position += self.direction() * step;
        former
    }
}
