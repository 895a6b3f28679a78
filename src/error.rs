use std::path::PathBuf;

/// Failures raised by grid construction and tile lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("tile ({column}, {row}) is outside the {columns}x{rows} grid")]
    OutOfRange { column: i32, row: i32, columns: i32, rows: i32 },

    #[error("invalid grid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("position ({x}, {y}) has a non-finite component")]
    NonFinitePosition { x: f32, y: f32 },

    #[error("tile ({column}, {row}) is already held by another marker")]
    TileOccupied { column: i32, row: i32 },
}

impl GridError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

/// Failures raised while loading or validating a [`SceneConfig`](crate::config::SceneConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scene config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] GridError),

    #[error("{marker} position ({column}, {row}) lies outside the grid")]
    MarkerOutOfGrid { marker: &'static str, column: i32, row: i32 },

    #[error("start and goal share tile ({column}, {row})")]
    MarkersOverlap { column: i32, row: i32 },
}
