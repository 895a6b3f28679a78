// =============================================================================
// DEBUG PANEL — describe / intent exchange with the host UI
//
// Each frame the active scene describes the panel (`DebugPanelView`); the host
// draws it with whatever immediate-mode toolkit it has and answers with the
// edits the user made (`PanelIntent`). The scene applies those edits itself.
// =============================================================================

use crate::grid::GridPos;

/// Snapshot of the debug panel for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugPanelView {
    pub title: String,
    /// State of the "Toggle Grid" checkbox.
    pub toggle_grid: bool,
    /// "Start Position" slider pair, `[column, row]`.
    pub start_position: [i32; 2],
    /// "Goal Position" slider pair, `[column, row]`.
    pub goal_position: [i32; 2],
    /// Inclusive slider maxima, `[columns - 1, rows - 1]`.
    pub slider_max: [i32; 2],
}

/// An edit the host UI reports back after drawing the panel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PanelIntent {
    ToggleGrid(bool),
    MoveStart([i32; 2]),
    MoveGoal([i32; 2]),
}

/// Panel state owned by a scene. Slider values live here, not in the host.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugPanel {
    title: String,
    toggle_grid: bool,
    start_position: [i32; 2],
    goal_position: [i32; 2],
    slider_max: [i32; 2],
}

impl DebugPanel {
    pub fn new(title: &str, columns: i32, rows: i32, start: GridPos, goal: GridPos) -> Self {
        Self {
            title: title.to_string(),
            toggle_grid: false,
            start_position: start.into(),
            goal_position: goal.into(),
            slider_max: [(columns - 1).max(0), (rows - 1).max(0)],
        }
    }

    pub fn describe(&self) -> DebugPanelView {
        DebugPanelView {
            title: self.title.clone(),
            toggle_grid: self.toggle_grid,
            start_position: self.start_position,
            goal_position: self.goal_position,
            slider_max: self.slider_max,
        }
    }

    /// Clamp a slider pair into the grid.
    pub fn clamp(&self, [column, row]: [i32; 2]) -> GridPos {
        GridPos::new(column.clamp(0, self.slider_max[0]), row.clamp(0, self.slider_max[1]))
    }

    pub fn set_toggle_grid(&mut self, enabled: bool) { self.toggle_grid = enabled; }

    pub fn set_start_position(&mut self, pos: GridPos) { self.start_position = pos.into(); }
    pub fn set_goal_position(&mut self, pos: GridPos) { self.goal_position = pos.into(); }
}
