//! Layout planning: turning a decoded tile grid into world-space placement
//! instructions for a world-builder collaborator.

use crate::constants::{
    DEFAULT_TILE, MAX_ROTATION_DEG, MAX_SCALE, MIN_ROTATION_DEG, MIN_SCALE, TILE_LOCAL_SCALE,
};
use crate::error::LayoutError;
use crate::map::grid::TileGrid;
use glam::{Quat, UVec2, Vec3};
use tracing::debug;

/// Layout configuration for one map build.
///
/// All bounds are enforced by [`LayoutConfig::new`], the validating boundary;
/// the planner itself trusts the config and never fails. Equivalent to the
/// knob set a designer tunes per map: how the grid anchors to the origin, a
/// rotation shared by every tile, the aggregate scale, and how many tile
/// kinds the palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// `true` lays the grid out symmetrically about the world origin;
    /// `false` anchors it to a corner with a one-unit margin.
    pub centered: bool,
    /// Rotation applied identically to every tile, in degrees about the
    /// vertical axis. Bounded to `[-90, 90]`.
    pub rotation: i32,
    /// Aggregate scale factor for the whole map container. Bounded to `[1, 10]`.
    pub scale: u32,
    /// Number of distinct tile kinds available; cell values at or above this
    /// fall back to [`DEFAULT_TILE`].
    pub palette_size: usize,
}

impl LayoutConfig {
    /// Builds a config, validating every bound.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::RotationOutOfRange`], [`LayoutError::ScaleOutOfRange`],
    /// or [`LayoutError::EmptyPalette`] when a value falls outside its
    /// supported range.
    pub fn new(centered: bool, rotation: i32, scale: u32, palette_size: usize) -> Result<Self, LayoutError> {
        let config = Self {
            centered,
            rotation,
            scale,
            palette_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its documented bound.
    ///
    /// # Errors
    ///
    /// Same as [`LayoutConfig::new`].
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rotation < MIN_ROTATION_DEG || self.rotation > MAX_ROTATION_DEG {
            return Err(LayoutError::RotationOutOfRange(self.rotation));
        }
        if self.scale < MIN_SCALE || self.scale > MAX_SCALE {
            return Err(LayoutError::ScaleOutOfRange(self.scale));
        }
        if self.palette_size == 0 {
            return Err(LayoutError::EmptyPalette);
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            centered: true,
            rotation: 0,
            scale: MIN_SCALE,
            palette_size: 1,
        }
    }
}

/// One placement instruction: which tile kind to instantiate, where, and how.
///
/// The `scale` here is the tile's local scale and is always
/// [`TILE_LOCAL_SCALE`]; the aggregate map scale lives on [`MapPlan`] and is
/// applied to the container, not per tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    /// Palette index of the tile kind, already clamped into `[0, palette_size)`.
    pub tile: usize,
    /// World-space position of the tile within the (unscaled) container.
    pub position: Vec3,
    /// Rotation about the vertical axis, shared by every tile of the map.
    pub rotation: Quat,
    /// Local uniform scale of the tile.
    pub scale: f32,
}

/// The planned map: every placement in grid order plus the aggregate scale.
///
/// The two-level transform (container scale x unit-scale tiles) is kept
/// explicit so builders can parent tiles under a scaled container the way the
/// layout intends. Builders that need absolute transforms instead should use
/// [`MapPlan::flatten`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapPlan {
    /// Placement instructions in x-outer/z-inner grid order.
    pub placements: Vec<TilePlacement>,
    /// Scale factor to apply to the container after all tiles are placed.
    pub scale: f32,
}

impl MapPlan {
    /// Number of planned placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the plan places no tiles at all.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Collapses the container scale into each placement, yielding absolute
    /// world transforms (positions and per-tile scale both multiplied by the
    /// aggregate factor).
    pub fn flatten(&self) -> impl Iterator<Item = TilePlacement> + '_ {
        self.placements.iter().map(move |placement| TilePlacement {
            tile: placement.tile,
            position: placement.position * self.scale,
            rotation: placement.rotation,
            scale: placement.scale * self.scale,
        })
    }
}

/// Planner for converting decoded tile grids into placement instructions.
pub struct MapLayoutPlanner;

impl MapLayoutPlanner {
    /// Plans one placement per grid cell.
    ///
    /// Pure and deterministic: the same grid and config always produce the
    /// same plan, and nothing is cached between calls. Cell values outside
    /// the palette degrade to [`DEFAULT_TILE`] rather than failing; by the
    /// time data reaches the planner, only decode errors are fatal.
    pub fn plan(grid: &TileGrid, config: &LayoutConfig) -> MapPlan {
        let rotation = Quat::from_rotation_y((config.rotation as f32).to_radians());

        let placements = grid
            .cells()
            .map(|(cell, value)| TilePlacement {
                tile: Self::resolve_tile(value, config.palette_size),
                position: Self::tile_position(cell, grid.size(), config.centered),
                rotation,
                scale: TILE_LOCAL_SCALE,
            })
            .collect();

        MapPlan {
            placements,
            scale: config.scale as f32,
        }
    }

    /// Computes the world position of the cell at `cell` within a grid of
    /// `size`, before any container scaling.
    ///
    /// Two layout modes: centered places the grid symmetrically about the
    /// origin (half-size shift plus a half-tile offset), while uncentered
    /// anchors it past the origin corner with a one-unit margin.
    pub fn tile_position(cell: UVec2, size: UVec2, centered: bool) -> Vec3 {
        let (divisor, offset) = if centered { (2.0, 0.5) } else { (1.0, 1.0) };

        Vec3::new(
            -(size.x as f32) / divisor + offset + cell.x as f32,
            0.0,
            -(size.y as f32) / divisor + offset + cell.y as f32,
        )
    }

    /// Resolves a stored cell value against the palette.
    ///
    /// Values inside `[0, palette_size)` are used as-is; anything else falls
    /// back to [`DEFAULT_TILE`] so that sloppy map data still produces a
    /// buildable plan.
    pub fn resolve_tile(value: u32, palette_size: usize) -> usize {
        let index = value as usize;
        if index < palette_size {
            index
        } else {
            debug!("Cell value {value} is outside the {palette_size}-tile palette, using tile {DEFAULT_TILE}");
            DEFAULT_TILE as usize
        }
    }
}
