use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, GridError};
use crate::grid::GridPos;

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Grid dimensions and cell size.
///
/// Dimensions are signed so that a negative value in a config file reaches
/// validation and is reported, instead of failing to deserialize.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: i32,
    pub rows: i32,
    /// World units per cell.
    pub tile_size: f32,
}

impl Default for GridConfig {
    /// 20 × 15 cells of 40 units, filling an 800 × 600 view.
    fn default() -> Self {
        Self { columns: 20, rows: 15, tile_size: 40.0 }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.columns < 1 || self.rows < 1 {
            return Err(GridError::invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.columns, self.rows
            )));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(GridError::invalid(format!(
                "tile size must be positive and finite, got {}",
                self.tile_size
            )));
        }
        Ok(())
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        (0..self.columns).contains(&pos.column) && (0..self.rows).contains(&pos.row)
    }
}

// ── SoundAsset ────────────────────────────────────────────────────────────────

/// A named sound file preloaded when the play scene is entered.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SoundAsset {
    pub name: String,
    pub path: PathBuf,
}

impl SoundAsset {
    pub fn new(name: &str, path: impl Into<PathBuf>) -> Self {
        Self { name: name.to_string(), path: path.into() }
    }
}

// ── SceneConfig ───────────────────────────────────────────────────────────────

/// Everything the play scene needs at startup.
///
/// Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub title: String,
    pub grid: GridConfig,
    /// Initial START marker cell, `[column, row]`.
    pub start: [i32; 2],
    /// Initial GOAL marker cell, `[column, row]`.
    pub goal: [i32; 2],
    pub sounds: Vec<SoundAsset>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "Play Scene".to_string(),
            grid: GridConfig::default(),
            start: [1, 3],
            goal: [15, 11],
            sounds: vec![
                SoundAsset::new("yay", "assets/audio/yay.ogg"),
                SoundAsset::new("thunder", "assets/audio/thunder.ogg"),
            ],
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON scene config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON scene config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn start_position(&self) -> GridPos { self.start.into() }
    pub fn goal_position(&self) -> GridPos { self.goal.into() }

    /// Grid must be buildable and both markers must sit on distinct in-grid cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;

        for (marker, pos) in [("start", self.start_position()), ("goal", self.goal_position())] {
            if !self.grid.contains(pos) {
                return Err(ConfigError::MarkerOutOfGrid {
                    marker,
                    column: pos.column,
                    row: pos.row,
                });
            }
        }

        if self.start == self.goal {
            return Err(ConfigError::MarkersOverlap { column: self.start[0], row: self.start[1] });
        }
        Ok(())
    }
}
