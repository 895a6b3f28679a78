use glam::Vec2;
use tilescene::grid::*;
use tilescene::GridError;

const SIZES: [(i32, i32); 5] = [(1, 1), (1, 4), (5, 1), (3, 3), (20, 15)];

// ── Construction ─────────────────────────────────────────────────────────────

#[test]
fn build_allocates_rows_times_columns() {
    let grid = Grid::build(20, 15, 64.0).unwrap();
    assert_eq!(grid.len(), 300);
    assert_eq!(grid.columns(), 20);
    assert_eq!(grid.rows(), 15);
}

#[test]
fn every_tile_knows_its_grid_position() {
    for (cols, rows) in SIZES {
        let grid = Grid::build(cols, rows, 1.0).unwrap();
        for row in 0..rows {
            for col in 0..cols {
                assert_eq!(grid.tile(col, row).unwrap().grid_position(), GridPos::new(col, row));
            }
        }
    }
}

#[test]
fn world_positions_are_exact_multiples_of_tile_size() {
    let grid = Grid::build(20, 15, 64.0).unwrap();
    for tile in grid.tiles() {
        let p = tile.grid_position();
        assert_eq!(
            tile.world_position(),
            WorldPos::new(p.column as f32 * 64.0, p.row as f32 * 64.0)
        );
    }
    assert_eq!(grid.tile(19, 14).unwrap().world_position(), WorldPos::new(1216.0, 896.0));
}

#[test]
fn fresh_grid_is_hidden_unvisited_and_labelled() {
    let grid = Grid::build(4, 4, 10.0).unwrap();
    assert!(!grid.is_grid_enabled());
    for tile in grid.tiles() {
        assert_eq!(tile.status(), TileStatus::Unvisited);
        assert!(!tile.is_enabled());
        let labels = tile.labels().expect("labels attached at build");
        assert_eq!(labels.status, "UNVISITED");
        assert!(tile.visible_labels().is_none());
    }
}

#[test]
fn invalid_dimensions_are_rejected() {
    for (cols, rows) in [(0, 5), (5, 0), (-1, 3), (3, -7)] {
        let err = Grid::build(cols, rows, 32.0).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration { .. }), "{cols}x{rows}: {err}");
    }
}

#[test]
fn invalid_tile_size_is_rejected() {
    for size in [0.0, -4.0, f32::NAN, f32::INFINITY] {
        let err = Grid::build(3, 3, size).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration { .. }), "size {size}");
    }
}

#[test]
fn overflowing_tile_count_is_rejected() {
    let err = Grid::build(i32::MAX, 2, 1.0).unwrap_err();
    assert!(matches!(err, GridError::InvalidConfiguration { .. }));
}

// ── Topology ─────────────────────────────────────────────────────────────────

#[test]
fn neighbour_relations_are_symmetric() {
    for (cols, rows) in SIZES {
        let grid = Grid::build(cols, rows, 1.0).unwrap();
        for (id, tile) in grid.iter() {
            for dir in NeighbourTile::ALL {
                if let Some(next) = tile.neighbour(dir) {
                    let back = grid.tile_by_id(next).unwrap().neighbour(dir.opposite());
                    assert_eq!(back, Some(id), "{dir:?} of {}", tile.grid_position());
                }
            }
        }
    }
}

#[test]
fn neighbours_are_one_step_away() {
    let grid = Grid::build(6, 4, 1.0).unwrap();
    for (id, tile) in grid.iter() {
        for dir in NeighbourTile::ALL {
            if let Some(n) = grid.neighbour(id, dir) {
                assert_eq!(n.grid_position(), tile.grid_position().offset(dir.offset()));
            }
        }
    }
}

#[test]
fn boundary_tiles_have_no_outward_neighbour() {
    for (cols, rows) in SIZES {
        let grid = Grid::build(cols, rows, 1.0).unwrap();
        for row in 0..rows {
            assert_eq!(grid.tile(0, row).unwrap().neighbour(NeighbourTile::Left), None);
            assert_eq!(grid.tile(cols - 1, row).unwrap().neighbour(NeighbourTile::Right), None);
        }
        for col in 0..cols {
            assert_eq!(grid.tile(col, 0).unwrap().neighbour(NeighbourTile::Top), None);
            assert_eq!(grid.tile(col, rows - 1).unwrap().neighbour(NeighbourTile::Bottom), None);
        }
    }
}

#[test]
fn interior_tiles_have_four_neighbours() {
    let grid = Grid::build(5, 5, 1.0).unwrap();
    for row in 1..4 {
        for col in 1..4 {
            assert_eq!(grid.tile(col, row).unwrap().neighbours().count(), 4);
        }
    }
    assert_eq!(grid.tile(0, 0).unwrap().neighbours().count(), 2);
    assert_eq!(grid.tile(2, 0).unwrap().neighbours().count(), 3);
}

#[test]
fn round_trip_right_left_and_bottom_top() {
    let grid = Grid::build(20, 15, 64.0).unwrap();
    for row in 0..15 {
        for col in 0..19 {
            let id = grid.index_of(col, row).unwrap();
            let right = grid.tile(col, row).unwrap().neighbour(NeighbourTile::Right).unwrap();
            assert_eq!(grid.tile_by_id(right).unwrap().neighbour(NeighbourTile::Left), Some(id));
        }
    }
    for row in 0..14 {
        for col in 0..20 {
            let id = grid.index_of(col, row).unwrap();
            let below = grid.tile(col, row).unwrap().neighbour(NeighbourTile::Bottom).unwrap();
            assert_eq!(grid.tile_by_id(below).unwrap().neighbour(NeighbourTile::Top), Some(id));
        }
    }
}

// ── Lookup ───────────────────────────────────────────────────────────────────

#[test]
fn out_of_range_lookup_fails_loudly() {
    let grid = Grid::build(20, 15, 64.0).unwrap();
    for (col, row) in [(-1, 0), (0, -1), (20, 0), (0, 15), (20, 15), (100, 100)] {
        let err = grid.tile(col, row).unwrap_err();
        assert_eq!(err, GridError::OutOfRange { column: col, row, columns: 20, rows: 15 });
    }
}

#[test]
fn column_overflow_does_not_wrap_into_next_row() {
    // (20, 0) would alias (0, 1) under unchecked row * columns + column.
    let grid = Grid::build(20, 15, 64.0).unwrap();
    assert!(grid.tile(20, 0).is_err());
}

#[test]
fn grid_position_overload_matches_integer_lookup() {
    let grid = Grid::build(20, 15, 64.0).unwrap();
    let pos = GridPos::truncate(Vec2::new(15.0, 11.0)).unwrap();
    let a = grid.tile_at(pos).unwrap();
    let b = grid.tile(15, 11).unwrap();
    assert_eq!(a.grid_position(), b.grid_position());
}

#[test]
fn world_lookup_uses_tile_size() {
    let grid = Grid::build(20, 15, 64.0).unwrap();
    // The centre of cell (1, 3).
    let world = WorldPos::new(96.0, 224.0);
    assert_eq!(grid.world_to_grid(world).unwrap(), GridPos::new(1, 3));
    assert_eq!(grid.tile_at_world(world).unwrap().grid_position(), GridPos::new(1, 3));
    assert!(grid.world_to_grid(WorldPos::new(-1.0, 0.0)).is_err());
    assert!(grid.world_to_grid(WorldPos::new(1280.0, 0.0)).is_err());
}

#[test]
fn non_finite_world_positions_are_rejected() {
    let grid = Grid::build(20, 15, 64.0).unwrap();
    // NaN would otherwise cast to 0 and resolve to tile (0, 0).
    for world in [
        WorldPos::new(f32::NAN, f32::NAN),
        WorldPos::new(f32::NAN, 10.0),
        WorldPos::new(10.0, f32::INFINITY),
        WorldPos::new(f32::NEG_INFINITY, 10.0),
    ] {
        assert!(matches!(
            grid.world_to_grid(world),
            Err(GridError::NonFinitePosition { .. })
        ));
        assert!(grid.tile_at_world(world).is_err());
    }
}

// ── Status / cost ────────────────────────────────────────────────────────────

#[test]
fn status_round_trip_for_every_value() {
    let mut grid = Grid::build(3, 3, 1.0).unwrap();
    let tile = grid.tile_mut(1, 1).unwrap();
    for status in TileStatus::ALL {
        tile.set_status(status);
        assert_eq!(tile.status(), status);
    }
    // Overwrite in reverse to check there is no residue from the previous value.
    for status in TileStatus::ALL.into_iter().rev() {
        tile.set_status(status);
        assert_eq!(tile.status(), status);
        assert_eq!(tile.labels().unwrap().status, status.to_string());
    }
}

#[test]
fn cost_is_stored_without_validation() {
    let mut grid = Grid::build(2, 2, 1.0).unwrap();
    for cost in [0.0, 1.5, -3.0, 1e9] {
        grid.tile_mut(0, 1).unwrap().set_cost(cost);
        assert_eq!(grid.tile(0, 1).unwrap().cost(), cost);
    }
}

#[test]
fn status_changes_leave_wiring_untouched() {
    let mut grid = Grid::build(20, 15, 64.0).unwrap();
    let before: Vec<_> = NeighbourTile::ALL
        .iter()
        .map(|d| grid.tile(15, 11).unwrap().neighbour(*d))
        .collect();
    grid.tile_mut(15, 11).unwrap().set_status(TileStatus::Impassable);
    grid.tile_mut(15, 11).unwrap().set_cost(9.0);
    let after: Vec<_> = NeighbourTile::ALL
        .iter()
        .map(|d| grid.tile(15, 11).unwrap().neighbour(*d))
        .collect();
    assert_eq!(before, after);
}

// ── Visibility ───────────────────────────────────────────────────────────────

#[test]
fn toggle_grid_sets_tiles_and_labels() {
    let mut grid = Grid::build(4, 3, 1.0).unwrap();
    grid.set_grid_enabled(true);
    assert!(grid.is_grid_enabled());
    assert!(grid.tiles().iter().all(|t| t.is_enabled() && t.labels().unwrap().enabled));

    grid.set_grid_enabled(false);
    assert!(grid.tiles().iter().all(|t| !t.is_enabled() && !t.labels().unwrap().enabled));
}

#[test]
fn toggle_grid_is_idempotent() {
    let mut grid = Grid::build(4, 3, 1.0).unwrap();
    grid.set_grid_enabled(true);
    grid.set_grid_enabled(true);
    assert!(grid.tiles().iter().all(|t| t.is_enabled() && t.visible_labels().is_some()));
}

// ── End-to-end ───────────────────────────────────────────────────────────────

#[test]
fn goal_and_start_persist_independently() {
    let mut grid = Grid::build(20, 15, 64.0).unwrap();
    let goal_id = grid.index_of(15, 11).unwrap();
    let start_id = grid.index_of(1, 3).unwrap();
    assert_ne!(goal_id, start_id);

    grid.tile_mut(15, 11).unwrap().set_status(TileStatus::Goal);
    grid.tile_mut(1, 3).unwrap().set_status(TileStatus::Start);

    assert_eq!(grid.tile(15, 11).unwrap().status(), TileStatus::Goal);
    assert_eq!(grid.tile(1, 3).unwrap().status(), TileStatus::Start);
    assert_eq!(grid.count_status(TileStatus::Goal), 1);
    assert_eq!(grid.count_status(TileStatus::Start), 1);

    let goal = grid.tile(15, 11).unwrap();
    assert_eq!(grid.tile_by_id(goal.neighbour(NeighbourTile::Left).unwrap()).unwrap().grid_position(), GridPos::new(14, 11));
    let start = grid.tile(1, 3).unwrap();
    assert_eq!(grid.tile_by_id(start.neighbour(NeighbourTile::Top).unwrap()).unwrap().grid_position(), GridPos::new(1, 2));
}

#[test]
fn reposition_leaves_exactly_one_start() {
    let mut grid = Grid::build(20, 15, 64.0).unwrap();
    grid.tile_mut(1, 3).unwrap().set_status(TileStatus::Start);

    grid.tile_mut(1, 3).unwrap().set_status(TileStatus::Unvisited);
    grid.tile_mut(5, 5).unwrap().set_status(TileStatus::Start);

    assert_eq!(grid.tile(1, 3).unwrap().status(), TileStatus::Unvisited);
    assert_eq!(grid.count_status(TileStatus::Start), 1);
    assert_eq!(grid.tile(5, 5).unwrap().status(), TileStatus::Start);
}
