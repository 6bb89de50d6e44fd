//! Error type shared by decoding, configuration and mesh synthesis.

use thiserror::Error;

/// Everything that can stop the pipeline before a [`RibbonMesh`](crate::RibbonMesh) is produced.
#[derive(Debug, Error)]
pub enum RibbonError {
    /// A seed string contained a character outside the `L R + -` alphabet.
    #[error("malformed symbol {symbol:?} at position {position}")]
    MalformedSymbol { symbol: char, position: usize },

    /// An integer symbol code outside `0..=3`.
    #[error("unknown symbol code {0}")]
    UnknownSymbolCode(u8),

    /// The mesh would need more vertices than a `u16` index can address.
    #[error("mesh needs {vertices} vertices but 16-bit indices address at most {limit}")]
    IndexOverflow { vertices: usize, limit: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
