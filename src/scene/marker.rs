use glam::Vec2;

use crate::grid::{GridPos, TileStatus, WorldPos};
use crate::renderer::SpriteKind;

/// Which of the two placeable objects a [`Marker`] is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Start,
    Goal,
}

impl MarkerKind {
    /// Status the marker stamps onto the tile it occupies.
    pub fn status(self) -> TileStatus {
        match self {
            MarkerKind::Start => TileStatus::Start,
            MarkerKind::Goal => TileStatus::Goal,
        }
    }

    pub fn sprite(self) -> SpriteKind {
        match self {
            MarkerKind::Start => SpriteKind::StarShip,
            MarkerKind::Goal => SpriteKind::Target,
        }
    }

    pub fn other(self) -> Self {
        match self {
            MarkerKind::Start => MarkerKind::Goal,
            MarkerKind::Goal => MarkerKind::Start,
        }
    }
}

/// A START or GOAL object sitting on a grid cell.
///
/// The marker keeps its own copy of its grid position; the scene is
/// responsible for keeping it in step with the tile holding its status.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    kind: MarkerKind,
    grid_position: GridPos,
    world_position: WorldPos,
}

impl Marker {
    /// Marker on `tile_world` (a tile's top-left corner), centred in a cell of `tile_size`.
    pub fn new(kind: MarkerKind, grid_position: GridPos, tile_world: WorldPos, tile_size: f32) -> Self {
        Self { kind, grid_position, world_position: centred(tile_world, tile_size) }
    }

    pub fn kind(&self) -> MarkerKind { self.kind }
    pub fn grid_position(&self) -> GridPos { self.grid_position }
    pub fn world_position(&self) -> WorldPos { self.world_position }

    pub(crate) fn place(&mut self, grid_position: GridPos, tile_world: WorldPos, tile_size: f32) {
        self.grid_position = grid_position;
        self.world_position = centred(tile_world, tile_size);
    }
}

fn centred(tile_world: WorldPos, tile_size: f32) -> WorldPos {
    tile_world + Vec2::splat(tile_size * 0.5)
}
