use std::fmt;
use std::ops::Add;

use glam::{IVec2, Vec2};

use crate::error::GridError;

// =============================================================================
// COORDINATE SPACES
//
// Grid space and world space are distinct types. A `WorldPos` only becomes
// a `GridPos` through `Grid::world_to_grid`, which knows the tile size.
// =============================================================================

/// Integer `(column, row)` coordinate of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub column: i32,
    pub row: i32,
}

impl GridPos {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Convert a grid-space float vector by truncating each component toward zero.
    ///
    /// Host widgets (sliders, recorded entity positions) hand grid coordinates
    /// around as floats; this is the only way to turn those into a `GridPos`.
    ///
    /// Truncation is toward zero, not floor: a component in `(-1.0, 0.0)`
    /// becomes `0`, so a slightly negative float lands on column or row 0.
    /// Use [`Grid::world_to_grid`](crate::grid::Grid::world_to_grid) when
    /// off-grid points must be rejected. NaN and infinite components fail
    /// with [`GridError::NonFinitePosition`].
    pub fn truncate(v: Vec2) -> Result<Self, GridError> {
        if !v.is_finite() {
            return Err(GridError::NonFinitePosition { x: v.x, y: v.y });
        }
        Ok(Self { column: v.x as i32, row: v.y as i32 })
    }

    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.column, self.row)
    }

    /// Grid-space float vector, the form markers record their position in.
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.column as f32, self.row as f32)
    }

    /// Position shifted by `(dx, dy)`. No bounds check.
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self { column: self.column + dx, row: self.row + dy }
    }
}

impl From<[i32; 2]> for GridPos {
    fn from([column, row]: [i32; 2]) -> Self {
        Self { column, row }
    }
}

impl From<GridPos> for [i32; 2] {
    fn from(pos: GridPos) -> Self {
        [pos.column, pos.row]
    }
}

impl From<IVec2> for GridPos {
    fn from(v: IVec2) -> Self {
        Self { column: v.x, row: v.y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Floating-point world-space position (pixels / world units).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WorldPos(pub Vec2);

impl WorldPos {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(self) -> f32 { self.0.x }
    pub fn y(self) -> f32 { self.0.y }
}

impl Add<Vec2> for WorldPos {
    type Output = WorldPos;

    fn add(self, rhs: Vec2) -> Self::Output {
        WorldPos(self.0 + rhs)
    }
}
