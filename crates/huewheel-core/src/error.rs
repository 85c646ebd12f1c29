//! Error types for the color wheel core.
//!
//! Pointer handling never fails: out-of-range coordinates are clamped and
//! degenerate geometry falls back to a fixed angle. Errors only come from
//! the construction surfaces (channel validation, hex names, layouts, PNG
//! output).

use std::path::PathBuf;

/// Errors produced while building or parsing colors.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("channel {channel} out of range: {value} (expected 0..=255)")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    #[error("invalid hex color {input:?}: {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: palette::rgb::FromHexError,
    },
}

/// Errors produced by the angle geometry helpers.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("reference point coincides with the center")]
    DegenerateReference,
}

/// Errors produced while loading or validating a [`WheelLayout`](crate::WheelLayout).
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout: {0}")]
    Invalid(&'static str),

    #[error("failed to parse layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read layout file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("failed to write wheel image: {0}")]
    Image(#[from] image::ImageError),
}
