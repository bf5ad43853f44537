//! This module defines the tile-map pipeline: decoding serialized map data
//! into a grid and planning world placements from it.

pub mod decoder;
pub mod grid;
pub mod planner;
