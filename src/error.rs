//! Centralized error types for the map-building pipeline.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the crate.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while decoding, planning,
/// or persisting a map.
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    #[error("map decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("layout config error: {0}")]
    Layout(#[from] LayoutError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error type for serialized-map decoding.
///
/// Decoding is all-or-nothing: a single malformed token aborts the whole
/// decode and no partial grid is ever returned. Length mismatches between
/// the token sequence and the declared grid dimensions are not errors;
/// they are absorbed by the pad-with-zero / ignore-excess policy.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("malformed map data: token {index} ({token:?}) is not a bare non-negative integer")]
    MalformedToken { index: usize, token: String },
}

/// Boundary-validation errors for [`LayoutConfig`](crate::map::planner::LayoutConfig).
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("rotation of {0} degrees is outside the supported -90..=90 range")]
    RotationOutOfRange(i32),

    #[error("scale factor {0} is outside the supported 1..=10 range")]
    ScaleOutOfRange(u32),

    #[error("palette must contain at least one tile kind")]
    EmptyPalette,
}

/// Errors from the text-artifact persistence helpers.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Result type for pipeline operations.
pub type ForgeResult<T> = Result<T, ForgeError>;
