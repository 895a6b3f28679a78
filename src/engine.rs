use log::trace;

use crate::audio::AudioContext;
use crate::debug::{DebugPanelView, PanelIntent};
use crate::input::{InputState, KeyCode};
use crate::renderer::{DrawList, Renderer};

// ── Game trait ──────────────────────────────────────────────────────────────

pub trait Game {
    fn on_enter(&mut self, _engine: &mut Engine) {}
    fn update(&mut self, engine: &mut Engine);
    fn render(&mut self, engine: &mut Engine);
    /// Optional: describe the debug panel the host should draw after this frame.
    fn debug_panel(&self) -> Option<DebugPanelView> { None }
    /// Optional: apply the edits the host reported from the last drawn panel.
    fn apply_debug(&mut self, _engine: &mut Engine, _intents: &[PanelIntent]) {}
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Headless frame driver. Owns the contexts every scene call receives:
/// input, audio, and the display list the host renders.
pub struct Engine {
    /// Keyboard state for the current frame; fed by the host.
    pub input: InputState,
    /// Preloaded sound effects.
    pub audio: AudioContext,
    /// Display list rebuilt every frame by `Game::render`.
    pub draw: DrawList,
    frames: u64,
    /// Set to `true` by `request_quit()`; the host stops after the current frame.
    quit_requested: bool,
}

impl Engine {
    pub fn new(audio: AudioContext) -> Self {
        Self {
            input: InputState::new(),
            audio,
            draw: DrawList::new(),
            frames: 0,
            quit_requested: false,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    /// Frames run so far, including one that ended in a quit request.
    pub fn frames(&self) -> u64 { self.frames }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.input.is_key_held(key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.input.is_key_pressed(key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.input.is_key_released(key) }

    /// Signal that the application should exit after the current frame.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool { self.quit_requested }

    // ── Frame ──────────────────────────────────────────────────────────────

    /// Run one frame: update, apply debug-panel edits, draw, render, then
    /// clear per-frame input.
    ///
    /// Returns the panel the host should draw next, or `None` if the game
    /// has none or asked to quit.
    pub fn frame(
        &mut self,
        game: &mut dyn Game,
        intents: &[PanelIntent],
        renderer: &mut dyn Renderer,
    ) -> Option<DebugPanelView> {
        self.frames += 1;
        trace!("frame {}", self.frames);

        game.update(self);
        if self.quit_requested {
            self.input.clear_frame_state();
            return None;
        }

        if !intents.is_empty() {
            game.apply_debug(self, intents);
        }

        self.draw.clear();
        game.render(self);
        renderer.render(&self.draw);

        self.input.clear_frame_state();
        game.debug_panel()
    }
}

impl Default for Engine {
    fn default() -> Self { Self::new(AudioContext::new()) }
}
