//! Headless match runner
//!
//! Simulates a match without a renderer and prints the final state as JSON.
//! Usage: `pong-headless [settings.json]`
//!
//! There are no command-line flags: world size and seed come from the
//! settings file's `width`, `height` and `seed` keys, e.g.
//! `{ "width": 800, "height": 600, "seed": 42 }`. Without a file the defaults
//! are 800x600 with a clock-derived seed.

use std::process::ExitCode;

use pong_sim::Settings;
use pong_sim::sim::{AiController, Game, PaddleController};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    match run(&settings) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<String, Box<dyn std::error::Error>> {
    let controllers: Vec<Box<dyn PaddleController>> = (0..settings.ai_players)
        .map(|_| Box::new(AiController) as Box<dyn PaddleController>)
        .collect();
    let mut game = Game::from_settings(settings, controllers)?;

    let frame = settings.frame_duration();
    for frame_index in 0..settings.frames {
        if game.tick(frame) {
            let [left, right] = game.scores();
            log::info!("Frame {frame_index}: score {left} - {right}");
        }
        if let Some(winner) = game.leader_at_winning_score() {
            log::info!("Player {} reached {} points", winner + 1, game.winning_score);
            break;
        }
    }

    Ok(serde_json::to_string_pretty(&game.snapshot())?)
}
