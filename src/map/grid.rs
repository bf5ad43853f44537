//! Tile-index grid storage shared by the decoder and the layout planner.

use glam::UVec2;

/// A decoded 2D grid of tile-type indices.
///
/// The grid is immutable after construction and stores its cells in a single
/// flat buffer with **x as the outer axis and z as the inner axis**: the cell
/// at `(x, z)` lives at linear index `x * height + z`. This is the same order
/// in which the serialized token sequence fills the grid, and the order in
/// which [`cells`](TileGrid::cells) yields them back; the planner relies on it
/// to emit placements deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    size: UVec2,
    cells: Vec<u32>,
}

impl TileGrid {
    /// Builds a grid from an already-ordered cell buffer.
    ///
    /// `cells.len()` must equal `size.x * size.y`.
    pub(crate) fn from_cells(size: UVec2, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), (size.x as usize) * (size.y as usize));
        Self { size, cells }
    }

    /// Builds a grid with every cell set to `value`.
    pub fn filled(size: UVec2, value: u32) -> Self {
        let len = (size.x as usize) * (size.y as usize);
        Self {
            size,
            cells: vec![value; len],
        }
    }

    /// The grid dimensions: `x` = columns, `y` = rows (the world-space z axis).
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.size.x
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Total cell count (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The tile-type index stored at `(x, z)`, or `None` outside the grid.
    pub fn get(&self, x: u32, z: u32) -> Option<u32> {
        if x < self.size.x && z < self.size.y {
            Some(self.cells[(x * self.size.y + z) as usize])
        } else {
            None
        }
    }

    /// Iterates every cell as `(position, value)` in x-outer/z-inner order.
    pub fn cells(&self) -> impl Iterator<Item = (UVec2, u32)> + '_ {
        let height = self.size.y.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &value)| (UVec2::new(index as u32 / height, index as u32 % height), value))
    }

    /// The flat cell buffer in x-outer/z-inner order.
    pub fn values(&self) -> &[u32] {
        &self.cells
    }
}
