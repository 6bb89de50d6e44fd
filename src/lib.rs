//! # symbios-ribbon
//!
//! Engine-agnostic ribbon mesh synthesis for a fixed two-symbol L-System curve.
//!
//! A seed sequence is rewritten for a few generations with two 43-symbol
//! productions, then walked by a turtle that lays down a thick line: one quad per
//! forward step, a corner triangle at each turn, and a color that drifts through a
//! cyclic palette. The result is a [`RibbonMesh`] whose flat vertex, color and
//! `u16` index buffers can be handed to any renderer as an indexed triangle list.
//!
//! ```no_run
//! use symbios_ribbon::{RibbonConfig, RibbonInterpreter};
//!
//! let interpreter = RibbonInterpreter::new(RibbonConfig::default())?;
//! let mesh = interpreter.generate()?;
//! let (vertices, colors, indices) = (mesh.vertex_buffer(), mesh.color_buffer(), mesh.index_buffer());
//! # Ok::<(), symbios_ribbon::RibbonError>(())
//! ```

pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod logging;
pub mod mesh;
pub mod palette;
pub mod rewriter;
pub mod turtle;

pub use config::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use mesh::*;
pub use palette::*;
pub use rewriter::*;
pub use turtle::*;
