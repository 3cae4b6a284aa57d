//! Game state and core simulation types
//!
//! The `Game` owns every entity. Controllers are supplied by the caller and
//! only ever see the world through a `ControlContext`.

use std::cmp::Ordering;
use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::controller::{InertController, PaddleController};
use super::error::GameError;
use crate::consts::*;
use crate::settings::Settings;

/// A ball entity
///
/// Every ball shares the same radius (`BALL_RADIUS`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's bounding square
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Serve a fresh ball from the center of the world.
    ///
    /// Draws four values from `rng` in a fixed order: x magnitude, y
    /// magnitude, x sign, y sign. Seeded games depend on this order.
    pub fn serve(rng: &mut Pcg32, dimensions: Vec2) -> Self {
        let mut vel = Vec2::new(
            BALL_MIN_AXIS_SPEED + rng.random::<f32>() * BALL_AXIS_SPEED_SPREAD,
            BALL_MIN_AXIS_SPEED + rng.random::<f32>() * BALL_AXIS_SPEED_SPREAD,
        );
        if rng.random::<f32>() >= 0.5 {
            vel.x = -vel.x;
        }
        if rng.random::<f32>() >= 0.5 {
            vel.y = -vel.y;
        }

        Self {
            pos: dimensions * 0.5,
            vel,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

/// One side of the match
pub struct Player {
    pub paddle: Paddle,
    pub controller: Box<dyn PaddleController>,
    pub score: u32,
}

impl Player {
    pub fn new(paddle: Paddle, controller: Box<dyn PaddleController>) -> Self {
        Self {
            paddle,
            controller,
            score: 0,
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("paddle", &self.paddle)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Events {
    /// Player 1 (left) scored
    pub left_scored: bool,
    /// Player 2 (right) scored
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Read-only copy of everything a renderer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub dimensions: Vec2,
    pub balls: Vec<Ball>,
    pub paddles: [Paddle; PLAYER_COUNT],
    pub scores: [u32; PLAYER_COUNT],
}

/// Complete game state
pub struct Game {
    pub balls: Vec<Ball>,
    pub players: [Player; PLAYER_COUNT],
    /// World size; the playfield spans `[0, x) x [0, y)`
    pub dimensions: Vec2,
    /// Informational only; `tick` never ends the match
    pub winning_score: u32,
    /// Events from the most recent tick
    pub events: Events,
    pub(crate) rng: Pcg32,
}

impl Game {
    /// Create a game with up to two controllers.
    ///
    /// Missing controllers are filled with `InertController`. The first
    /// controller drives the left paddle.
    pub fn new(
        dimensions: Vec2,
        controllers: Vec<Box<dyn PaddleController>>,
        seed: u64,
    ) -> Result<Self, GameError> {
        if controllers.len() > PLAYER_COUNT {
            return Err(GameError::InvalidArgument(format!(
                "too many controllers: got {}, at most {PLAYER_COUNT} allowed",
                controllers.len()
            )));
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = vec![Ball::serve(&mut rng, dimensions)];

        let mut controllers = controllers.into_iter();
        let mut next_controller = || {
            controllers
                .next()
                .unwrap_or_else(|| Box::new(InertController) as Box<dyn PaddleController>)
        };

        let center_y = dimensions.y * 0.5;
        let left = Player::new(
            Paddle::new(Vec2::new(PADDLE_INSET, center_y)),
            next_controller(),
        );
        let right = Player::new(
            Paddle::new(Vec2::new(dimensions.x - PADDLE_INSET, center_y)),
            next_controller(),
        );

        log::info!(
            "New game {}x{} (seed {seed})",
            dimensions.x,
            dimensions.y
        );

        Ok(Self {
            balls,
            players: [left, right],
            dimensions,
            winning_score: DEFAULT_WINNING_SCORE,
            events: Events::default(),
            rng,
        })
    }

    /// Create a game from match settings
    pub fn from_settings(
        settings: &Settings,
        controllers: Vec<Box<dyn PaddleController>>,
    ) -> Result<Self, GameError> {
        let game = Self::new(settings.dimensions(), controllers, settings.resolve_seed())?;
        Ok(game.with_winning_score(settings.winning_score))
    }

    pub fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.winning_score = winning_score;
        self
    }

    /// Index of the player who has reached `winning_score` with a strictly
    /// higher score than the opponent.
    ///
    /// A tie returns `None` even at or above the winning score. Front-ends may
    /// use this to end a match; the simulation keeps running regardless.
    pub fn leader_at_winning_score(&self) -> Option<usize> {
        if self.winning_score == 0 {
            return None;
        }
        let [left, right] = self.scores();
        let (leader, score) = match left.cmp(&right) {
            Ordering::Greater => (0, left),
            Ordering::Less => (1, right),
            Ordering::Equal => return None,
        };
        (score >= self.winning_score).then_some(leader)
    }

    pub fn scores(&self) -> [u32; PLAYER_COUNT] {
        [self.players[0].score, self.players[1].score]
    }

    pub fn paddles(&self) -> [Paddle; PLAYER_COUNT] {
        [self.players[0].paddle, self.players[1].paddle]
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            dimensions: self.dimensions,
            balls: self.balls.clone(),
            paddles: self.paddles(),
            scores: self.scores(),
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("balls", &self.balls)
            .field("players", &self.players)
            .field("dimensions", &self.dimensions)
            .field("winning_score", &self.winning_score)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::controller::{AiController, KeyboardController};

    fn dims() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_new_game_accepts_up_to_two_controllers() {
        assert!(Game::new(dims(), vec![], 1).is_ok());

        let one: Vec<Box<dyn PaddleController>> = vec![Box::new(AiController)];
        assert!(Game::new(dims(), one, 1).is_ok());

        let two: Vec<Box<dyn PaddleController>> =
            vec![Box::new(AiController), Box::new(KeyboardController::new())];
        assert!(Game::new(dims(), two, 1).is_ok());
    }

    #[test]
    fn test_new_game_rejects_three_controllers() {
        let controllers: Vec<Box<dyn PaddleController>> = vec![
            Box::new(AiController),
            Box::new(AiController),
            Box::new(InertController),
        ];
        let err = Game::new(dims(), controllers, 1).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument(_)));
        assert!(err.to_string().contains("too many controllers"));
    }

    #[test]
    fn test_initial_layout() {
        let game = Game::new(dims(), vec![], 7).unwrap();

        assert_eq!(game.balls.len(), 1);
        assert_eq!(game.balls[0].pos, Vec2::new(400.0, 300.0));

        let left = game.players[0].paddle;
        let right = game.players[1].paddle;
        assert_eq!(left.pos, Vec2::new(40.0, 300.0));
        assert_eq!(right.pos, Vec2::new(760.0, 300.0));
        assert_eq!(left.size, Vec2::new(20.0, 60.0));
        assert_eq!(right.size, Vec2::new(20.0, 60.0));
        assert_eq!(game.scores(), [0, 0]);
        assert_eq!(game.winning_score, DEFAULT_WINNING_SCORE);
    }

    #[test]
    fn test_serve_velocity_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let ball = Ball::serve(&mut rng, dims());
            assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
            for axis in [ball.vel.x, ball.vel.y] {
                assert!((100.0..300.0).contains(&axis.abs()), "axis speed {axis}");
            }
        }
    }

    #[test]
    fn test_serve_draw_order() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut draws = Pcg32::seed_from_u64(3);
        let mx: f32 = draws.random();
        let my: f32 = draws.random();
        let sx: f32 = draws.random();
        let sy: f32 = draws.random();

        let ball = Ball::serve(&mut rng, dims());
        let expect_x = (100.0 + mx * 200.0) * if sx >= 0.5 { -1.0 } else { 1.0 };
        let expect_y = (100.0 + my * 200.0) * if sy >= 0.5 { -1.0 } else { 1.0 };
        assert_eq!(ball.vel.x.to_bits(), expect_x.to_bits());
        assert_eq!(ball.vel.y.to_bits(), expect_y.to_bits());
    }

    #[test]
    fn test_same_seed_same_ball() {
        let a = Game::new(dims(), vec![], 99999).unwrap();
        let b = Game::new(dims(), vec![], 99999).unwrap();
        assert_eq!(a.balls[0].vel.x.to_bits(), b.balls[0].vel.x.to_bits());
        assert_eq!(a.balls[0].vel.y.to_bits(), b.balls[0].vel.y.to_bits());
    }

    #[test]
    fn test_leader_at_winning_score() {
        let mut game = Game::new(dims(), vec![], 1).unwrap().with_winning_score(3);
        assert_eq!(game.leader_at_winning_score(), None);

        game.players[1].score = 3;
        assert_eq!(game.leader_at_winning_score(), Some(1));

        game.players[0].score = 2;
        assert_eq!(game.leader_at_winning_score(), Some(1));

        game.players[0].score = 4;
        assert_eq!(game.leader_at_winning_score(), Some(0));

        game.winning_score = 0;
        assert_eq!(game.leader_at_winning_score(), None);
    }

    #[test]
    fn test_tied_scores_have_no_leader() {
        let mut game = Game::new(dims(), vec![], 1).unwrap().with_winning_score(3);
        game.players[0].score = 3;
        game.players[1].score = 3;
        assert_eq!(game.leader_at_winning_score(), None);

        game.players[0].score = 5;
        game.players[1].score = 5;
        assert_eq!(game.leader_at_winning_score(), None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = Game::new(dims(), vec![], 5).unwrap();
        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert_eq!(back.scores, [0, 0]);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            left_scored: true,
            right_scored: false,
            ball_hit_paddle: true,
            ball_hit_wall: true,
        };
        assert!(events.scored());
        events.clear();
        assert_eq!(events, Events::default());
        assert!(!events.scored());
    }
}
