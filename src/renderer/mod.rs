pub mod ascii;

use crate::grid::{GridPos, TileStatus, WorldPos};

pub use ascii::AsciiRenderer;

// ── Draw commands ────────────────────────────────────────────────────────────

/// What a marker sprite represents; the host picks the art.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    /// The START object (a ship).
    StarShip,
    /// The GOAL object.
    Target,
}

/// One queued draw call. Scenes push these; a [`Renderer`] consumes them.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Layer 0 — a tile quad at `world` with edge length `size`.
    Tile {
        grid: GridPos,
        world: WorldPos,
        size: f32,
        status: TileStatus,
        /// `(cost, status)` label text, present only while labels are visible.
        labels: Option<(String, String)>,
    },
    /// Layer 1 — a marker sprite centred on `world`.
    Sprite { kind: SpriteKind, grid: GridPos, world: WorldPos },
    /// Layer 2 — screen-fixed text.
    Text { x: f32, y: f32, text: String },
}

impl DrawCommand {
    fn layer(&self) -> u8 {
        match self {
            DrawCommand::Tile { .. } => 0,
            DrawCommand::Sprite { .. } => 1,
            DrawCommand::Text { .. } => 2,
        }
    }
}

/// Per-frame display list; cleared by the engine before each draw.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn text(&mut self, x: f32, y: f32, text: impl Into<String>) {
        self.push(DrawCommand::Text { x, y, text: text.into() });
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands ordered back-to-front by layer, stable within a layer.
    pub fn sorted(&self) -> Vec<&DrawCommand> {
        let mut sorted: Vec<&DrawCommand> = self.commands.iter().collect();
        sorted.sort_by_key(|c| c.layer());
        sorted
    }
}

/// Host rendering backend.
pub trait Renderer {
    fn render(&mut self, list: &DrawList);
}
