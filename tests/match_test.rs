use std::time::Duration;

use glam::Vec2;
use pong_sim::Settings;
use pong_sim::sim::{AiController, Game, GameError, InertController, KeyboardController, PaddleController};

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn test_inert_match_keeps_ball_in_bounds() {
    let controllers: Vec<Box<dyn PaddleController>> =
        vec![Box::new(InertController), Box::new(InertController)];
    let mut game = Game::new(Vec2::new(800.0, 600.0), controllers, 1).unwrap();

    let mut last_scores = game.scores();
    for step in 0..1000 {
        game.tick(FRAME);

        for ball in &game.balls {
            assert!(
                (0.0..=800.0).contains(&ball.pos.x),
                "step {step}: x = {}",
                ball.pos.x
            );
            assert!(
                (0.0..=599.0).contains(&ball.pos.y),
                "step {step}: y = {}",
                ball.pos.y
            );
        }

        // Scores never go down
        let scores = game.scores();
        assert!(scores[0] >= last_scores[0] && scores[1] >= last_scores[1]);
        last_scores = scores;
    }
}

#[test]
fn test_ai_versus_keyboard_match() {
    let keys = KeyboardController::new();
    let controllers: Vec<Box<dyn PaddleController>> =
        vec![Box::new(keys.clone()), Box::new(AiController)];
    let mut game = Game::new(Vec2::new(800.0, 600.0), controllers, 77).unwrap();

    let mut points = 0;
    for _ in 0..2000 {
        // Hold "up" by re-signalling it every frame
        keys.press_up();
        if game.tick(FRAME) {
            points += 1;
        }
        assert!(!keys.peek().up);
    }

    let [left, right] = game.scores();
    assert_eq!(left + right, points);
    // The held key drives the left paddle off the top of the world
    assert!(game.players[0].paddle.pos.y < 0.0);
}

#[test]
fn test_same_settings_same_match() {
    let settings = Settings::from_json_str(r#"{ "seed": 2024, "ai_players": 2 }"#).unwrap();

    let play = || {
        let controllers: Vec<Box<dyn PaddleController>> =
            vec![Box::new(AiController), Box::new(AiController)];
        let mut game = Game::from_settings(&settings, controllers).unwrap();
        for _ in 0..settings.frames {
            game.tick(settings.frame_duration());
        }
        game.snapshot()
    };

    assert_eq!(play(), play());
}

#[test]
fn test_too_many_controllers() {
    let controllers: Vec<Box<dyn PaddleController>> = vec![
        Box::new(InertController),
        Box::new(InertController),
        Box::new(InertController),
        Box::new(AiController),
    ];
    let result = Game::new(Vec2::new(800.0, 600.0), controllers, 1);
    assert!(matches!(result, Err(GameError::InvalidArgument(_))));
}
