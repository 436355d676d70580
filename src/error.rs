//! Error types.  Every failure here is fatal: assets abort startup, and a
//! rendering error means no further frame can be drawn.

use thiserror::Error;

/// Errors raised while decoding the embedded asset manifest.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A name the game requires is absent from the loaded maps.
    #[error("missing asset '{name}'")]
    Missing {
        /// Name the lookup was performed with.
        name: String,
    },
    /// Sprite data failed to parse.
    #[error("corrupt asset '{name}': {reason}")]
    Corrupt {
        /// Manifest name of the offending asset.
        name: String,
        /// Human-readable explanation of the parse failure.
        reason: String,
    },
}

/// Top-level error for the game binary.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("asset load failed: {0}")]
    Asset(#[from] AssetError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
