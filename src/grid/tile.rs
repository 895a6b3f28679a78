use std::fmt;

use crate::grid::position::{GridPos, WorldPos};

// =============================================================================
// TILE STATUS
// =============================================================================

/// Traversal-state tag carried by every tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileStatus {
    #[default]
    Unvisited,
    Open,
    Closed,
    Impassable,
    Goal,
    Start,
}

impl TileStatus {
    pub const ALL: [TileStatus; 6] = [
        TileStatus::Unvisited,
        TileStatus::Open,
        TileStatus::Closed,
        TileStatus::Impassable,
        TileStatus::Goal,
        TileStatus::Start,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TileStatus::Unvisited => "UNVISITED",
            TileStatus::Open => "OPEN",
            TileStatus::Closed => "CLOSED",
            TileStatus::Impassable => "IMPASSABLE",
            TileStatus::Goal => "GOAL",
            TileStatus::Start => "START",
        }
    }
}

impl fmt::Display for TileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// NEIGHBOUR DIRECTIONS
// =============================================================================

/// One of the four edges of a tile in the 4-connected grid graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NeighbourTile {
    Top,
    Right,
    Bottom,
    Left,
}

impl NeighbourTile {
    /// Clockwise from the top; also the slot order inside a [`Tile`].
    pub const ALL: [NeighbourTile; 4] = [
        NeighbourTile::Top,
        NeighbourTile::Right,
        NeighbourTile::Bottom,
        NeighbourTile::Left,
    ];

    /// `(d_column, d_row)` step toward this neighbour. Rows grow downward.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            NeighbourTile::Top => (0, -1),
            NeighbourTile::Right => (1, 0),
            NeighbourTile::Bottom => (0, 1),
            NeighbourTile::Left => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            NeighbourTile::Top => NeighbourTile::Bottom,
            NeighbourTile::Right => NeighbourTile::Left,
            NeighbourTile::Bottom => NeighbourTile::Top,
            NeighbourTile::Left => NeighbourTile::Right,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

// =============================================================================
// TILE
// =============================================================================

/// Arena index of a tile inside its [`Grid`](crate::grid::Grid).
///
/// Equal to `row * columns + column`. Only meaningful for the grid that
/// produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub(crate) usize);

impl TileId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Debug annotation pair shown over a tile when the grid view is on.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLabels {
    pub cost: String,
    pub status: String,
    pub enabled: bool,
}

impl TileLabels {
    fn new(cost: f32, status: TileStatus) -> Self {
        Self { cost: cost_text(cost), status: status.to_string(), enabled: true }
    }
}

fn cost_text(cost: f32) -> String {
    format!("{cost:.1}")
}

/// A single node of the grid graph.
#[derive(Clone, Debug)]
pub struct Tile {
    grid_position: GridPos,
    world_position: WorldPos,
    status: TileStatus,
    cost: f32,
    neighbours: [Option<TileId>; 4],
    enabled: bool,
    labels: Option<TileLabels>,
}

impl Tile {
    pub fn new(grid_position: GridPos, world_position: WorldPos) -> Self {
        Self {
            grid_position,
            world_position,
            status: TileStatus::Unvisited,
            cost: 0.0,
            neighbours: [None; 4],
            enabled: true,
            labels: None,
        }
    }

    // ── Position ───────────────────────────────────────────────────────────

    pub fn grid_position(&self) -> GridPos { self.grid_position }
    pub fn world_position(&self) -> WorldPos { self.world_position }

    // ── Neighbours ─────────────────────────────────────────────────────────

    /// The tile wired in `direction`, or `None` at the grid boundary.
    pub fn neighbour(&self, direction: NeighbourTile) -> Option<TileId> {
        self.neighbours[direction.slot()]
    }

    /// Overwrite one neighbour slot. Pass `None` to mark a boundary.
    pub fn set_neighbour(&mut self, direction: NeighbourTile, tile: Option<TileId>) {
        self.neighbours[direction.slot()] = tile;
    }

    /// All wired neighbours, clockwise from the top.
    pub fn neighbours(&self) -> impl Iterator<Item = (NeighbourTile, TileId)> + '_ {
        NeighbourTile::ALL
            .into_iter()
            .filter_map(|dir| self.neighbour(dir).map(|id| (dir, id)))
    }

    // ── Status / cost ──────────────────────────────────────────────────────

    pub fn status(&self) -> TileStatus { self.status }

    pub fn set_status(&mut self, status: TileStatus) {
        self.status = status;
        if let Some(labels) = self.labels.as_mut() {
            labels.status = status.to_string();
        }
    }

    pub fn cost(&self) -> f32 { self.cost }

    pub fn set_cost(&mut self, cost: f32) {
        self.cost = cost;
        if let Some(labels) = self.labels.as_mut() {
            labels.cost = cost_text(cost);
        }
    }

    // ── Visibility ─────────────────────────────────────────────────────────

    pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn set_enabled(&mut self, enabled: bool) { self.enabled = enabled; }

    /// Attach the cost/status label pair. Keeps an existing pair untouched.
    pub fn add_labels(&mut self) {
        if self.labels.is_none() {
            self.labels = Some(TileLabels::new(self.cost, self.status));
        }
    }

    /// Toggle label visibility. No-op on a tile without labels.
    pub fn set_labels_enabled(&mut self, enabled: bool) {
        if let Some(labels) = self.labels.as_mut() {
            labels.enabled = enabled;
        }
    }

    pub fn labels(&self) -> Option<&TileLabels> {
        self.labels.as_ref()
    }

    /// Labels the host should draw this frame: attached, enabled, and on an enabled tile.
    pub fn visible_labels(&self) -> Option<&TileLabels> {
        self.labels.as_ref().filter(|l| l.enabled && self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile::new(GridPos::new(2, 3), WorldPos::new(128.0, 192.0))
    }

    #[test]
    fn new_tile_is_unvisited_and_unwired() {
        let t = tile();
        assert_eq!(t.status(), TileStatus::Unvisited);
        assert_eq!(t.cost(), 0.0);
        for dir in NeighbourTile::ALL {
            assert_eq!(t.neighbour(dir), None);
        }
    }

    #[test]
    fn set_neighbour_accepts_none() {
        let mut t = tile();
        t.set_neighbour(NeighbourTile::Right, Some(TileId(7)));
        assert_eq!(t.neighbour(NeighbourTile::Right), Some(TileId(7)));
        t.set_neighbour(NeighbourTile::Right, None);
        assert_eq!(t.neighbour(NeighbourTile::Right), None);
    }

    #[test]
    fn opposite_is_involution() {
        for dir in NeighbourTile::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn labels_follow_status_and_cost() {
        let mut t = tile();
        t.add_labels();
        t.set_status(TileStatus::Goal);
        t.set_cost(3.5);
        let labels = t.labels().unwrap();
        assert_eq!(labels.status, "GOAL");
        assert_eq!(labels.cost, "3.5");
    }

    #[test]
    fn add_labels_is_idempotent() {
        let mut t = tile();
        t.add_labels();
        t.set_labels_enabled(false);
        t.add_labels();
        assert!(!t.labels().unwrap().enabled);
    }

    #[test]
    fn visible_labels_need_enabled_tile() {
        let mut t = tile();
        t.add_labels();
        t.set_enabled(false);
        assert!(t.visible_labels().is_none());
        t.set_enabled(true);
        assert!(t.visible_labels().is_some());
    }
}
