mod marker;
mod play;
mod title;

pub use marker::{Marker, MarkerKind};
pub use play::PlayScene;
pub use title::{EndScene, StartScene};

use log::info;

use crate::debug::{DebugPanelView, PanelIntent};
use crate::engine::{Engine, Game};

pub enum SceneAction {
    None,
    /// Leave the current scene and enter the given one in its place.
    Switch(Box<dyn Scene>),
    Quit,
}

pub trait Scene {
    fn name(&self) -> &str;
    fn on_enter(&mut self, _engine: &mut Engine) {}
    fn update(&mut self, engine: &mut Engine) -> SceneAction;
    fn draw(&mut self, engine: &mut Engine);
    fn debug_panel(&self) -> Option<DebugPanelView> { None }
    fn apply_debug(&mut self, _engine: &mut Engine, _intents: &[PanelIntent]) {}
}

pub struct SceneStack {
    scenes: Vec<Box<dyn Scene>>,
    initialized: bool,
}

impl SceneStack {
    pub fn new(initial: Box<dyn Scene>) -> Self {
        Self { scenes: vec![initial], initialized: false }
    }

    pub fn len(&self) -> usize { self.scenes.len() }
    pub fn is_empty(&self) -> bool { self.scenes.is_empty() }

    /// Name of the scene currently receiving updates.
    pub fn top_name(&self) -> Option<&str> {
        self.scenes.last().map(|s| s.name())
    }

    fn enter(engine: &mut Engine, mut scene: Box<dyn Scene>) -> Box<dyn Scene> {
        info!("entering {}", scene.name());
        scene.on_enter(engine);
        scene
    }

    fn exit(scene: Box<dyn Scene>) {
        info!("leaving {}", scene.name());
    }

    fn update_inner(&mut self, engine: &mut Engine) {
        let action = if let Some(top) = self.scenes.last_mut() {
            top.update(engine)
        } else {
            return;
        };

        match action {
            SceneAction::None => {}
            SceneAction::Switch(s) => {
                if let Some(top) = self.scenes.pop() {
                    Self::exit(top);
                }
                let s = Self::enter(engine, s);
                self.scenes.push(s);
            }
            SceneAction::Quit => {
                engine.request_quit();
            }
        }
    }

    fn draw_inner(&mut self, engine: &mut Engine) {
        if let Some(top) = self.scenes.last_mut() {
            top.draw(engine);
        }
    }
}

impl Game for SceneStack {
    fn update(&mut self, engine: &mut Engine) {
        if !self.initialized {
            self.initialized = true;
            if let Some(s) = self.scenes.first_mut() {
                info!("entering {}", s.name());
                s.on_enter(engine);
            }
        }
        self.update_inner(engine);
    }

    fn render(&mut self, engine: &mut Engine) {
        self.draw_inner(engine);
    }

    fn debug_panel(&self) -> Option<DebugPanelView> {
        self.scenes.last()?.debug_panel()
    }

    fn apply_debug(&mut self, engine: &mut Engine, intents: &[PanelIntent]) {
        if let Some(top) = self.scenes.last_mut() {
            top.apply_debug(engine, intents);
        }
    }
}
