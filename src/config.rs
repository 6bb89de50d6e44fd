//! Pipeline configuration, loadable from JSON.

use crate::error::RibbonError;
use crate::grammar::{Symbol, parse_sequence};
use crate::palette::Palette;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for expansion and ribbon synthesis.
///
/// Fixed once a [`RibbonInterpreter`](crate::RibbonInterpreter) is built from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonConfig {
    /// Initial sequence in `L R + -` notation.
    pub seed: String,
    /// Rounds of substitution applied to the seed.
    pub generations: u32,
    /// Segment length in unit-square space.
    pub step: f32,
    /// Full ribbon width as a fraction of `step`. Each side is offset by half of it.
    pub thickness: f32,
    /// Color stops the turtle cycles through.
    pub palette: Palette,
    /// Palette advance per turn.
    pub color_delta: f32,
    /// Unit-space corner of the cell the turtle starts in.
    pub origin: Vec2,
}

impl Default for RibbonConfig {
    fn default() -> Self {
        Self {
            seed: "-R".to_string(),
            generations: 2,
            step: 1.0 / 26.0,
            thickness: 0.8,
            palette: Palette::default(),
            color_delta: 0.02,
            origin: Vec2::new(1.0, 0.0),
        }
    }
}

impl RibbonConfig {
    /// Reads a JSON config file. Missing fields fall back to [`Default`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RibbonError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, RibbonError> {
        let config: RibbonConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would produce NaN geometry.
    ///
    /// Palettes validate themselves on construction.
    pub fn validate(&self) -> Result<(), RibbonError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(RibbonError::InvalidConfig(format!(
                "step must be positive and finite, got {}",
                self.step
            )));
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(RibbonError::InvalidConfig(format!(
                "thickness must be non-negative and finite, got {}",
                self.thickness
            )));
        }
        if !self.color_delta.is_finite() || self.color_delta < 0.0 {
            return Err(RibbonError::InvalidConfig(format!(
                "color_delta must be non-negative and finite, got {}",
                self.color_delta
            )));
        }
        if !self.origin.is_finite() {
            return Err(RibbonError::InvalidConfig("origin must be finite".into()));
        }
        Ok(())
    }

    /// The decoded seed sequence.
    pub fn seed_symbols(&self) -> Result<Vec<Symbol>, RibbonError> {
        parse_sequence(&self.seed)
    }
}
