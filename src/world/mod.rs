//! World-building: the boundary between pure layout planning and whatever
//! engine or scene representation ultimately owns the tiles.

pub mod memory;

use crate::error::ForgeResult;
use crate::map::decoder::MapDecoder;
use crate::map::planner::{LayoutConfig, MapLayoutPlanner, MapPlan, TilePlacement};
use glam::UVec2;
use tracing::{debug, warn};

/// A mutable world that maps can be built into.
///
/// Implementations own the containers (named groups of placed tiles) and the
/// actual instantiation; the planning side only ever hands them placement
/// instructions. [`install`] drives this trait in a fixed order that
/// implementations can rely on: at most one `destroy`, then `create`, then
/// every `place`, then exactly one `set_scale`.
pub trait WorldBuilder {
    /// Whether a container with this name already exists.
    fn contains(&self, name: &str) -> bool;

    /// Removes the named container and everything in it.
    fn destroy(&mut self, name: &str);

    /// Creates a fresh, empty container under this name.
    fn create(&mut self, name: &str);

    /// Adds one tile to the named container.
    fn place(&mut self, name: &str, placement: TilePlacement);

    /// Applies the aggregate scale to the named container.
    ///
    /// Called once per install, after every tile has been placed, so that
    /// the scale multiplies the whole container rather than compounding
    /// per tile.
    fn set_scale(&mut self, name: &str, scale: f32);
}

/// Installs a planned map into the world under the given container name.
///
/// Rebuilds from scratch: any existing container with this name is destroyed
/// first, so repeated installs converge on the latest plan instead of
/// stacking duplicates. The container scale is applied strictly after all
/// tiles are placed.
pub fn install<W: WorldBuilder>(world: &mut W, name: &str, plan: MapPlan) {
    if world.contains(name) {
        warn!("Container {name:?} already exists in the world, destroying it before rebuilding");
        world.destroy(name);
    }

    world.create(name);

    let scale = plan.scale;
    let count = plan.len();
    for placement in plan.placements {
        world.place(name, placement);
    }

    // Scale last, once, over the finished container.
    world.set_scale(name, scale);

    debug!("Installed {count} tiles into container {name:?} at scale {scale}");
}

/// Decodes, plans, and installs a serialized map in one step.
///
/// # Errors
///
/// Returns a decode error if `raw` holds a malformed token. The world is not
/// touched in that case; failures happen entirely before the first
/// [`WorldBuilder`] call.
pub fn generate<W: WorldBuilder>(
    world: &mut W,
    name: &str,
    raw: &str,
    size: UVec2,
    config: &LayoutConfig,
) -> ForgeResult<()> {
    let grid = MapDecoder::decode(raw, size)?;
    let plan = MapLayoutPlanner::plan(&grid, config);
    install(world, name, plan);
    Ok(())
}
