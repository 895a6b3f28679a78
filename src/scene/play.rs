use log::{debug, info, warn};

use crate::config::SceneConfig;
use crate::debug::{DebugPanel, DebugPanelView, PanelIntent};
use crate::engine::Engine;
use crate::error::GridError;
use crate::grid::{Grid, GridPos, TileStatus};
use crate::input::{ActionMap, KeyCode};
use crate::renderer::DrawCommand;
use crate::scene::marker::{Marker, MarkerKind};
use crate::scene::title::{EndScene, StartScene};
use crate::scene::{Scene, SceneAction};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum PlayAction {
    Quit,
    ToStart,
    ToEnd,
}

const ACTION_ORDER: [PlayAction; 3] = [PlayAction::Quit, PlayAction::ToStart, PlayAction::ToEnd];

/// The grid scene: owns the tile grid and the START/GOAL markers placed on it.
pub struct PlayScene {
    config: SceneConfig,
    grid: Grid,
    start: Marker,
    goal: Marker,
    panel: DebugPanel,
    actions: ActionMap<PlayAction>,
}

impl PlayScene {
    /// Build the grid, then place GOAL and START at their configured cells.
    pub fn new(config: SceneConfig) -> Result<Self, GridError> {
        let mut grid = Grid::from_config(&config.grid)?;
        let start_pos = config.start_position();
        let goal_pos = config.goal_position();
        if start_pos == goal_pos {
            return Err(GridError::TileOccupied { column: goal_pos.column, row: goal_pos.row });
        }

        let goal = spawn_marker(&mut grid, MarkerKind::Goal, goal_pos)?;
        let start = spawn_marker(&mut grid, MarkerKind::Start, start_pos)?;

        let panel = DebugPanel::new(&config.title, grid.columns(), grid.rows(), start_pos, goal_pos);
        let actions = ActionMap::new()
            .with(PlayAction::Quit, KeyCode::Escape)
            .with(PlayAction::ToStart, KeyCode::Digit1)
            .with(PlayAction::ToEnd, KeyCode::Digit2);

        Ok(Self { config, grid, start, goal, panel, actions })
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }
    pub fn config(&self) -> &SceneConfig { &self.config }

    pub fn marker(&self, kind: MarkerKind) -> &Marker {
        match kind {
            MarkerKind::Start => &self.start,
            MarkerKind::Goal => &self.goal,
        }
    }

    fn marker_mut(&mut self, kind: MarkerKind) -> &mut Marker {
        match kind {
            MarkerKind::Start => &mut self.start,
            MarkerKind::Goal => &mut self.goal,
        }
    }

    /// Move a marker to `pos`: the tile it leaves goes back to UNVISITED and
    /// the tile it lands on takes the marker's status.
    ///
    /// Fails without touching any state if `pos` is outside the grid or holds
    /// the other marker.
    pub fn move_marker(&mut self, kind: MarkerKind, pos: GridPos) -> Result<(), GridError> {
        if self.marker(kind.other()).grid_position() == pos {
            return Err(GridError::TileOccupied { column: pos.column, row: pos.row });
        }
        let tile_world = self.grid.tile_at(pos)?.world_position();
        let old = self.marker(kind).grid_position();

        self.grid.tile_at_mut(old)?.set_status(TileStatus::Unvisited);
        let tile_size = self.grid.tile_size();
        self.marker_mut(kind).place(pos, tile_world, tile_size);
        self.grid.tile_at_mut(pos)?.set_status(kind.status());

        match kind {
            MarkerKind::Start => self.panel.set_start_position(pos),
            MarkerKind::Goal => self.panel.set_goal_position(pos),
        }
        debug!("{kind:?} marker moved {old} -> {pos}");
        Ok(())
    }

    /// Show or hide the debug grid view.
    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.panel.set_toggle_grid(enabled);
        self.grid.set_grid_enabled(enabled);
    }

    /// Apply one debug-panel edit. Slider values are clamped into the grid first.
    pub fn apply_intent(&mut self, intent: PanelIntent) -> Result<(), GridError> {
        match intent {
            PanelIntent::ToggleGrid(enabled) => {
                self.set_grid_enabled(enabled);
                Ok(())
            }
            PanelIntent::MoveStart(slider) => {
                let pos = self.panel.clamp(slider);
                self.move_marker(MarkerKind::Start, pos)
            }
            PanelIntent::MoveGoal(slider) => {
                let pos = self.panel.clamp(slider);
                self.move_marker(MarkerKind::Goal, pos)
            }
        }
    }
}

fn spawn_marker(grid: &mut Grid, kind: MarkerKind, pos: GridPos) -> Result<Marker, GridError> {
    let tile_size = grid.tile_size();
    let tile = grid.tile_at_mut(pos)?;
    tile.set_status(kind.status());
    Ok(Marker::new(kind, pos, tile.world_position(), tile_size))
}

impl Scene for PlayScene {
    fn name(&self) -> &str {
        &self.config.title
    }

    fn on_enter(&mut self, engine: &mut Engine) {
        let loaded = engine.audio.preload(&self.config.sounds);
        info!("{}: preloaded {loaded}/{} sounds", self.config.title, self.config.sounds.len());
    }

    fn update(&mut self, engine: &mut Engine) -> SceneAction {
        match self.actions.first_pressed(&ACTION_ORDER, &engine.input) {
            Some(PlayAction::Quit) => SceneAction::Quit,
            Some(PlayAction::ToStart) => {
                SceneAction::Switch(Box::new(StartScene::new(self.config.clone())))
            }
            Some(PlayAction::ToEnd) => {
                SceneAction::Switch(Box::new(EndScene::new(self.config.clone())))
            }
            None => SceneAction::None,
        }
    }

    fn draw(&mut self, engine: &mut Engine) {
        let size = self.grid.tile_size();
        for tile in self.grid.tiles().iter().filter(|t| t.is_enabled()) {
            engine.draw.push(DrawCommand::Tile {
                grid: tile.grid_position(),
                world: tile.world_position(),
                size,
                status: tile.status(),
                labels: tile.visible_labels().map(|l| (l.cost.clone(), l.status.clone())),
            });
        }

        for marker in [&self.goal, &self.start] {
            engine.draw.push(DrawCommand::Sprite {
                kind: marker.kind().sprite(),
                grid: marker.grid_position(),
                world: marker.world_position(),
            });
        }
    }

    fn debug_panel(&self) -> Option<DebugPanelView> {
        Some(self.panel.describe())
    }

    fn apply_debug(&mut self, _engine: &mut Engine, intents: &[PanelIntent]) {
        for intent in intents {
            if let Err(e) = self.apply_intent(*intent) {
                warn!("debug panel edit {intent:?} rejected: {e}");
            }
        }
    }
}
