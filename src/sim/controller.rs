//! Paddle controllers
//!
//! A controller produces one `PaddleInput` per player per tick. The game polls
//! every controller at the start of `tick`, handing it a read-only view of the
//! world so AI controllers never need to own or alias the game.

use std::cell::Cell;
use std::rc::Rc;

use super::state::{Ball, Paddle};
use crate::consts::{BALL_RADIUS, PLAYER_COUNT};

/// Movement command for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub const NONE: Self = Self {
        up: false,
        down: false,
    };
    pub const UP: Self = Self {
        up: true,
        down: false,
    };
    pub const DOWN: Self = Self {
        up: false,
        down: true,
    };
}

/// Read-only view of the world handed to a controller during `tick`
#[derive(Debug, Clone, Copy)]
pub struct ControlContext<'a> {
    /// Index of the player being controlled
    pub player: usize,
    pub balls: &'a [Ball],
    pub paddles: &'a [Paddle; PLAYER_COUNT],
}

impl<'a> ControlContext<'a> {
    /// The controlled player's paddle
    #[inline]
    pub fn own_paddle(&self) -> &'a Paddle {
        &self.paddles[self.player]
    }

    /// The ball AI players track
    #[inline]
    pub fn primary_ball(&self) -> Option<&'a Ball> {
        self.balls.first()
    }
}

/// Anything that can steer a paddle
pub trait PaddleController {
    /// Produce the input for the upcoming tick. Called exactly once per tick.
    fn act(&mut self, ctx: &ControlContext<'_>) -> PaddleInput;
}

/// Controller that never moves its paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct InertController;

impl PaddleController for InertController {
    fn act(&mut self, _ctx: &ControlContext<'_>) -> PaddleInput {
        PaddleInput::NONE
    }
}

/// Human-input adapter
///
/// Holds latched `up`/`down` flags shared between the game and the front-end.
/// Clone the controller before handing it to `Game::new` and keep the clone in
/// the event loop. Each `act` consumes the latch, so a held key has to be
/// re-signalled every tick.
#[derive(Debug, Clone, Default)]
pub struct KeyboardController {
    latch: Rc<Cell<PaddleInput>>,
}

impl KeyboardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_up(&self) {
        let mut input = self.latch.get();
        input.up = true;
        self.latch.set(input);
    }

    pub fn press_down(&self) {
        let mut input = self.latch.get();
        input.down = true;
        self.latch.set(input);
    }

    /// Overwrite both flags at once
    pub fn set(&self, input: PaddleInput) {
        self.latch.set(input);
    }

    /// Current flags without consuming them
    pub fn peek(&self) -> PaddleInput {
        self.latch.get()
    }
}

impl PaddleController for KeyboardController {
    fn act(&mut self, _ctx: &ControlContext<'_>) -> PaddleInput {
        self.latch.take()
    }
}

/// Ball-tracking AI
///
/// Moves toward the vertical center of the first ball. Never idles: when the
/// centers are level it keeps moving down.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiController;

impl PaddleController for AiController {
    fn act(&mut self, ctx: &ControlContext<'_>) -> PaddleInput {
        let Some(ball) = ctx.primary_ball() else {
            return PaddleInput::NONE;
        };
        let paddle = ctx.own_paddle();
        let paddle_center = paddle.pos.y + paddle.size.y * 0.5;
        let ball_center = ball.pos.y + BALL_RADIUS;

        if ball_center < paddle_center {
            PaddleInput::UP
        } else {
            PaddleInput::DOWN
        }
    }
}
