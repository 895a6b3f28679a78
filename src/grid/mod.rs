// =============================================================================
// GRID — row-major arena of connected tiles
//
// Tiles live in one owned `Vec`; neighbour edges are `TileId` indices into
// it, so the topology never owns or outlives a tile. Construction is two-pass:
// every tile must exist before any neighbour index can be resolved.
// =============================================================================

mod position;
mod tile;

pub use position::{GridPos, WorldPos};
pub use tile::{NeighbourTile, Tile, TileId, TileLabels, TileStatus};

use log::debug;

use crate::config::GridConfig;
use crate::error::GridError;

/// The full tile collection plus its 4-connected neighbour topology.
#[derive(Clone, Debug)]
pub struct Grid {
    columns: i32,
    rows: i32,
    tile_size: f32,
    tiles: Vec<Tile>,
    grid_enabled: bool,
}

impl Grid {
    /// Build a `columns × rows` grid of wired tiles, `tile_size` world units apart.
    ///
    /// Fails with [`GridError::InvalidConfiguration`] before allocating anything
    /// when a dimension is non-positive, the tile count overflows, or
    /// `tile_size` is not a positive finite number.
    ///
    /// Every tile starts disabled with its label pair attached, matching a
    /// scene whose debug grid view is off.
    pub fn build(columns: i32, rows: i32, tile_size: f32) -> Result<Self, GridError> {
        GridConfig { columns, rows, tile_size }.validate()?;
        let count = columns
            .checked_mul(rows)
            .ok_or_else(|| GridError::invalid(format!("{columns}x{rows} tiles overflow")))?;

        // ── 1. Allocation pass ──
        let mut tiles = Vec::with_capacity(count as usize);
        for row in 0..rows {
            for column in 0..columns {
                let world = WorldPos::new(column as f32 * tile_size, row as f32 * tile_size);
                let mut tile = Tile::new(GridPos::new(column, row), world);
                tile.add_labels();
                tile.set_enabled(false);
                tiles.push(tile);
            }
        }

        let mut grid = Self { columns, rows, tile_size, tiles, grid_enabled: false };

        // ── 2. Wiring pass ──
        for row in 0..rows {
            for column in 0..columns {
                let top = (row > 0).then(|| grid.id(column, row - 1));
                let right = (column < columns - 1).then(|| grid.id(column + 1, row));
                let bottom = (row < rows - 1).then(|| grid.id(column, row + 1));
                let left = (column > 0).then(|| grid.id(column - 1, row));

                let tile = &mut grid.tiles[grid_index(columns, column, row)];
                tile.set_neighbour(NeighbourTile::Top, top);
                tile.set_neighbour(NeighbourTile::Right, right);
                tile.set_neighbour(NeighbourTile::Bottom, bottom);
                tile.set_neighbour(NeighbourTile::Left, left);
            }
        }

        debug!("built {columns}x{rows} grid ({count} tiles, tile size {tile_size})");
        Ok(grid)
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Self::build(config.columns, config.rows, config.tile_size)
    }

    // ── Dimensions ─────────────────────────────────────────────────────────

    pub fn columns(&self) -> i32 { self.columns }
    pub fn rows(&self) -> i32 { self.rows }
    pub fn tile_size(&self) -> f32 { self.tile_size }
    pub fn len(&self) -> usize { self.tiles.len() }
    pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.columns).contains(&pos.column) && (0..self.rows).contains(&pos.row)
    }

    // ── Lookup ─────────────────────────────────────────────────────────────

    /// Arena index of `(column, row)`, bounds-checked.
    pub fn index_of(&self, column: i32, row: i32) -> Result<TileId, GridError> {
        if !self.contains(GridPos::new(column, row)) {
            return Err(GridError::OutOfRange {
                column,
                row,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self.id(column, row))
    }

    pub fn tile(&self, column: i32, row: i32) -> Result<&Tile, GridError> {
        let id = self.index_of(column, row)?;
        Ok(&self.tiles[id.0])
    }

    pub fn tile_mut(&mut self, column: i32, row: i32) -> Result<&mut Tile, GridError> {
        let id = self.index_of(column, row)?;
        Ok(&mut self.tiles[id.0])
    }

    pub fn tile_at(&self, pos: GridPos) -> Result<&Tile, GridError> {
        self.tile(pos.column, pos.row)
    }

    pub fn tile_at_mut(&mut self, pos: GridPos) -> Result<&mut Tile, GridError> {
        self.tile_mut(pos.column, pos.row)
    }

    /// Grid cell containing a world-space point (floor division by tile size).
    ///
    /// NaN or infinite coordinates fail with `NonFinitePosition`.
    pub fn world_to_grid(&self, world: WorldPos) -> Result<GridPos, GridError> {
        if !world.0.is_finite() {
            return Err(GridError::NonFinitePosition { x: world.x(), y: world.y() });
        }
        let pos = GridPos::new(
            (world.x() / self.tile_size).floor() as i32,
            (world.y() / self.tile_size).floor() as i32,
        );
        self.index_of(pos.column, pos.row)?;
        Ok(pos)
    }

    pub fn tile_at_world(&self, world: WorldPos) -> Result<&Tile, GridError> {
        let pos = self.world_to_grid(world)?;
        self.tile_at(pos)
    }

    /// Tile by arena index. `None` if the id did not come from this grid.
    pub fn tile_by_id(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    pub fn tile_by_id_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.0)
    }

    /// Resolve the neighbour edge of `id` in `direction`.
    pub fn neighbour(&self, id: TileId, direction: NeighbourTile) -> Option<&Tile> {
        let next = self.tile_by_id(id)?.neighbour(direction)?;
        self.tile_by_id(next)
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(i, t)| (TileId(i), t))
    }

    pub fn count_status(&self, status: TileStatus) -> usize {
        self.tiles.iter().filter(|t| t.status() == status).count()
    }

    // ── Debug view ─────────────────────────────────────────────────────────

    pub fn is_grid_enabled(&self) -> bool { self.grid_enabled }

    /// Show or hide every tile together with its label pair.
    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.grid_enabled = enabled;
        for tile in &mut self.tiles {
            tile.set_enabled(enabled);
            tile.set_labels_enabled(enabled);
        }
    }

    // Caller guarantees (column, row) is inside the grid.
    fn id(&self, column: i32, row: i32) -> TileId {
        TileId(grid_index(self.columns, column, row))
    }
}

#[inline]
fn grid_index(columns: i32, column: i32, row: i32) -> usize {
    (row * columns + column) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tile_grid_has_no_neighbours() {
        let grid = Grid::build(1, 1, 10.0).unwrap();
        let tile = grid.tile(0, 0).unwrap();
        assert_eq!(tile.neighbours().count(), 0);
    }

    #[test]
    fn ids_are_row_major() {
        let grid = Grid::build(4, 3, 1.0).unwrap();
        assert_eq!(grid.index_of(0, 0).unwrap().index(), 0);
        assert_eq!(grid.index_of(3, 0).unwrap().index(), 3);
        assert_eq!(grid.index_of(0, 1).unwrap().index(), 4);
        assert_eq!(grid.index_of(3, 2).unwrap().index(), 11);
    }

    #[test]
    fn foreign_id_resolves_to_none() {
        let grid = Grid::build(2, 2, 1.0).unwrap();
        assert!(grid.tile_by_id(TileId(4)).is_none());
    }
}
