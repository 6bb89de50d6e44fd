//! Cyclic color gradient used to tint the ribbon as it turns.

use crate::error::RibbonError;
use glam::Vec4;
use serde::{Deserialize, Serialize};

/// An ordered, cyclic list of RGBA stops.
///
/// A color index in `[0, len)` addresses a point between two neighbouring stops;
/// the last stop blends back into the first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec4>", into = "Vec<Vec4>")]
pub struct Palette {
    stops: Vec<Vec4>,
}

impl Default for Palette {
    /// Yellow, magenta, cyan.
    fn default() -> Self {
        Self {
            stops: vec![
                Vec4::new(1.0, 1.0, 0.0, 1.0),
                Vec4::new(1.0, 0.0, 1.0, 1.0),
                Vec4::new(0.0, 1.0, 1.0, 1.0),
            ],
        }
    }
}

impl TryFrom<Vec<Vec4>> for Palette {
    type Error = RibbonError;

    fn try_from(stops: Vec<Vec4>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<Palette> for Vec<Vec4> {
    fn from(palette: Palette) -> Self {
        palette.stops
    }
}

impl Palette {
    /// Creates a palette. At least one stop is required.
    pub fn new(stops: Vec<Vec4>) -> Result<Self, RibbonError> {
        if stops.is_empty() {
            return Err(RibbonError::InvalidConfig(
                "palette needs at least one color stop".into(),
            ));
        }
        Ok(Self { stops })
    }

    /// Number of stops, i.e. the period of the color index.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[Vec4] {
        &self.stops
    }

    /// Wraps an arbitrary index into `[0, len)`.
    pub fn wrap(&self, index: f32) -> f32 {
        index.rem_euclid(self.len() as f32)
    }

    /// Moves `index` forward by `delta`, staying inside the palette range.
    pub fn advance(&self, index: f32, delta: f32) -> f32 {
        self.wrap(index + delta)
    }

    /// Interpolated color at `index`.
    ///
    /// The integer part selects the lower stop, the fractional part blends towards
    /// the next stop. Periodic with period [`len`](Self::len).
    pub fn evaluate(&self, index: f32) -> Vec4 {
        let len = self.len();
        let wrapped = self.wrap(index);
        let floor = wrapped.floor();
        // rem_euclid can round up to exactly `len` for tiny negative inputs.
        let lower_idx = (floor as usize) % len;
        let upper_idx = (lower_idx + 1) % len;
        let fraction = wrapped - floor;

        let lower = self.stops[lower_idx];
        let upper = self.stops[upper_idx];
        lower - (lower - upper) * fraction
    }
}
