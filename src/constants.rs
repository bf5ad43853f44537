//! This module contains the shared constants of the map-building pipeline.

use glam::UVec2;

/// The tile-type index used wherever no explicit tile is available: cells the
/// serialized map does not cover, and cell values outside the palette.
pub const DEFAULT_TILE: u32 = 0;

/// Inclusive lower bound for the layout rotation, in degrees.
pub const MIN_ROTATION_DEG: i32 = -90;
/// Inclusive upper bound for the layout rotation, in degrees.
pub const MAX_ROTATION_DEG: i32 = 90;

/// Inclusive lower bound for the aggregate map scale factor.
pub const MIN_SCALE: u32 = 1;
/// Inclusive upper bound for the aggregate map scale factor.
pub const MAX_SCALE: u32 = 10;

/// Local scale applied to every individual tile. Tiles are always placed at
/// unit scale; the aggregate factor is applied once to the whole container.
pub const TILE_LOCAL_SCALE: f32 = 1.0;

/// Name of the container the demo binary builds its map under.
pub const DEFAULT_CONTAINER_NAME: &str = "Generated Map";

/// A small serialized map used by tests and demos: a 4x4 grid with a border of
/// tile 1 around tile 0, matching [`SAMPLE_MAP_SIZE`].
pub const SAMPLE_MAP: &str = "1,1,1,1,1,0,0,1,1,0,0,1,1,1,1,1";
/// The grid dimensions of [`SAMPLE_MAP`] (x = columns, y = rows).
pub const SAMPLE_MAP_SIZE: UVec2 = UVec2::new(4, 4);
