//! Connected tile-grid scene.
//!
//! [`grid`] builds a row-major arena of tiles wired into a 4-connected graph
//! (TOP/RIGHT/BOTTOM/LEFT), each carrying a traversal status and cost.
//! [`scene`] places the START and GOAL markers on it and relays edits from
//! the [`debug`] panel. [`engine`] drives scenes headlessly, one frame at a
//! time, handing them the input, audio and draw contexts.

pub mod audio;
pub mod config;
pub mod debug;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod scene;

pub use error::{ConfigError, GridError};
pub use grid::{Grid, GridPos, NeighbourTile, Tile, TileId, TileStatus, WorldPos};
