//! Error types for the scene core
//!
//! Nothing here is fatal to the host page: every failure means "the
//! animation does not run", never a crash of the surrounding UI.

use thiserror::Error;

/// Defects in static sprite data, caught when the catalog is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteError {
    /// A pixel uses a code missing from the palette
    #[error("sprite `{sprite}` row {row} column {column}: code '{code}' has no palette entry")]
    UnknownCode {
        sprite: &'static str,
        row: usize,
        column: usize,
        code: char,
    },

    /// Rows of a pixel grid differ in length
    #[error("sprite `{sprite}` row {row} is {actual} wide, expected {expected}")]
    RaggedRow {
        sprite: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Pixel grid has no rows or zero-width rows
    #[error("sprite `{sprite}` has an empty pixel grid")]
    Empty { sprite: &'static str },

    /// The same code appears twice in a palette
    #[error("sprite `{sprite}` palette lists '{code}' twice")]
    DuplicatePaletteKey { sprite: &'static str, code: char },

    /// The transparent code was given a color
    #[error("sprite `{sprite}` palette assigns a color to the transparent code")]
    TransparentInPalette { sprite: &'static str },
}

/// Errors surfaced by the scheduler and its hosts
#[derive(Debug, Error)]
pub enum SceneError {
    /// Static sprite data is defective
    #[error("sprite catalog: {0}")]
    Sprite(#[from] SpriteError),

    /// The host has a surface element but cannot give a drawable context
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The resize listener could not be attached
    #[error("resize listener unavailable: {0}")]
    ListenerUnavailable(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON failed to parse
    #[error("configuration parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
