use log::error;

use crate::config::SceneConfig;
use crate::engine::Engine;
use crate::input::KeyCode;
use crate::scene::play::PlayScene;
use crate::scene::{Scene, SceneAction};

fn play(config: &SceneConfig) -> SceneAction {
    match PlayScene::new(config.clone()) {
        Ok(scene) => SceneAction::Switch(Box::new(scene)),
        Err(e) => {
            error!("cannot start play scene: {e}");
            SceneAction::Quit
        }
    }
}

/// Title screen. [Enter] plays, [Esc] quits.
pub struct StartScene {
    config: SceneConfig,
}

impl StartScene {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Scene for StartScene {
    fn name(&self) -> &str { "Start Scene" }

    fn update(&mut self, engine: &mut Engine) -> SceneAction {
        if engine.is_key_pressed(KeyCode::Enter) { play(&self.config) }
        else if engine.is_key_pressed(KeyCode::Escape) { SceneAction::Quit }
        else { SceneAction::None }
    }

    fn draw(&mut self, engine: &mut Engine) {
        engine.draw.text(20.0, 20.0, "START SCENE");
        engine.draw.text(20.0, 44.0, "Press [Enter] to play");
    }
}

/// Game-over screen. [R] plays again, [Esc] quits.
pub struct EndScene {
    config: SceneConfig,
}

impl EndScene {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Scene for EndScene {
    fn name(&self) -> &str { "End Scene" }

    fn update(&mut self, engine: &mut Engine) -> SceneAction {
        if engine.is_key_pressed(KeyCode::KeyR) { play(&self.config) }
        else if engine.is_key_pressed(KeyCode::Escape) { SceneAction::Quit }
        else { SceneAction::None }
    }

    fn draw(&mut self, engine: &mut Engine) {
        engine.draw.text(20.0, 20.0, "END SCENE");
        engine.draw.text(20.0, 44.0, "Press [R] to play again");
    }
}
