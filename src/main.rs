//! Headless runner for the play scene: builds the grid, applies any
//! placements given on the command line as debug-panel edits, and prints
//! the final frame.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use tilescene::audio::AudioContext;
use tilescene::config::SceneConfig;
use tilescene::debug::PanelIntent;
use tilescene::engine::Engine;
use tilescene::renderer::AsciiRenderer;
use tilescene::scene::{PlayScene, SceneStack};
use tilescene::ConfigError;

#[derive(Parser)]
#[command(name = "tilescene", version, about = "Run the tile-grid play scene headless")]
struct Cli {
    /// JSON scene config; built-in defaults when omitted
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 1)]
    frames: u32,

    /// Turn the debug grid view on
    #[arg(short = 'g', long)]
    show_grid: bool,

    /// Move the START marker to COLUMN,ROW
    #[arg(long, value_name = "COLUMN,ROW", value_parser = parse_cell)]
    start: Option<[i32; 2]>,

    /// Move the GOAL marker to COLUMN,ROW
    #[arg(long, value_name = "COLUMN,ROW", value_parser = parse_cell)]
    goal: Option<[i32; 2]>,
}

impl Cli {
    fn intents(&self) -> Vec<PanelIntent> {
        let mut intents = Vec::new();
        if self.show_grid {
            intents.push(PanelIntent::ToggleGrid(true));
        }
        if let Some(cell) = self.start {
            intents.push(PanelIntent::MoveStart(cell));
        }
        if let Some(cell) = self.goal {
            intents.push(PanelIntent::MoveGoal(cell));
        }
        intents
    }
}

fn parse_cell(s: &str) -> Result<[i32; 2], String> {
    let (column, row) = s
        .split_once(',')
        .ok_or_else(|| format!("expected COLUMN,ROW, got '{s}'"))?;
    let parse = |v: &str| v.trim().parse::<i32>().map_err(|e| format!("'{v}': {e}"));
    Ok([parse(column)?, parse(row)?])
}

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SceneConfig::from_file(path)?,
        None => SceneConfig::default(),
    };
    info!(
        "{}: {}x{} grid, tile size {}",
        config.title, config.grid.columns, config.grid.rows, config.grid.tile_size
    );

    let mut renderer = AsciiRenderer::new(config.grid.columns, config.grid.rows);
    let mut game = SceneStack::new(Box::new(PlayScene::new(config)?));
    let mut engine = Engine::new(AudioContext::new());

    let edits = cli.intents();
    let mut panel = None;
    for frame in 0..cli.frames.max(1) {
        let intents: &[PanelIntent] = if frame == 0 { &edits[..] } else { &[] };
        panel = engine.frame(&mut game, intents, &mut renderer);
        if engine.quit_requested() {
            break;
        }
    }

    print!("{}", renderer.frame());
    if let Some(view) = panel {
        println!(
            "[{}] grid: {}  start: {:?}  goal: {:?}",
            view.title,
            if view.toggle_grid { "on" } else { "off" },
            view.start_position,
            view.goal_position,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_accepts_spaces() {
        assert_eq!(parse_cell("5, 7"), Ok([5, 7]));
    }

    #[test]
    fn parse_cell_rejects_garbage() {
        assert!(parse_cell("5").is_err());
        assert!(parse_cell("a,1").is_err());
    }
}
