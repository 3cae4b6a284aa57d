//! Per-frame simulation tick
//!
//! Advances the game by the wall-clock time that elapsed since the previous
//! frame. Order within a tick: controllers and paddles, then for each ball
//! movement, scoring, wall bounce and finally paddle collision.

use std::time::Duration;

use super::collision::{Exit, bounce_off_paddle, bounce_off_walls, scoring_exit};
use super::controller::ControlContext;
use super::state::{Ball, Game};
use crate::consts::*;

impl Game {
    /// Advance the simulation by `elapsed`.
    ///
    /// Returns true if a point was scored during this tick. The elapsed time
    /// is not validated: negative or non-finite values produce garbage state.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.tick_secs(elapsed.as_secs_f32())
    }

    /// Advance the simulation by `t` seconds
    pub fn tick_secs(&mut self, t: f32) -> bool {
        self.events.clear();

        for i in 0..PLAYER_COUNT {
            let paddles = self.paddles();
            let ctx = ControlContext {
                player: i,
                balls: &self.balls,
                paddles: &paddles,
            };
            let input = self.players[i].controller.act(&ctx);

            // Both flags set cancel out; paddles are not clamped to the world
            let paddle = &mut self.players[i].paddle;
            if input.up {
                paddle.pos.y -= PADDLE_SPEED * t;
            }
            if input.down {
                paddle.pos.y += PADDLE_SPEED * t;
            }
        }

        let dimensions = self.dimensions;
        for ball in self.balls.iter_mut() {
            let delta = ball.vel * t;
            ball.pos += delta;

            if scoring_exit(ball, dimensions) == Some(Exit::Left) {
                self.players[1].score += 1;
                self.events.right_scored = true;
                *ball = Ball::serve(&mut self.rng, dimensions);
                log::debug!(
                    "Player 2 scores ({} - {})",
                    self.players[0].score,
                    self.players[1].score
                );
            }
            if scoring_exit(ball, dimensions) == Some(Exit::Right) {
                self.players[0].score += 1;
                self.events.left_scored = true;
                *ball = Ball::serve(&mut self.rng, dimensions);
                log::debug!(
                    "Player 1 scores ({} - {})",
                    self.players[0].score,
                    self.players[1].score
                );
            }

            if bounce_off_walls(ball, dimensions) {
                self.events.ball_hit_wall = true;
            }

            // Each overlapping paddle flips the ball again
            for (i, player) in self.players.iter().enumerate() {
                if bounce_off_paddle(ball, &player.paddle, delta.x) {
                    self.events.ball_hit_paddle = true;
                    log::trace!("Ball hit paddle {} at {:?}", i + 1, ball.pos);
                }
            }
        }

        self.events.scored()
    }
}
