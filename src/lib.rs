//! Tile-map decoding and deterministic world-placement planning.

pub mod asset;
pub mod constants;
pub mod error;
pub mod map;
pub mod storage;
pub mod world;
