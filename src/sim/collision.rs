//! Collision detection and response
//!
//! Balls and paddles collide as axis-aligned boxes. Horizontal world edges are
//! scoring boundaries, vertical ones are walls.

use glam::Vec2;

use super::math::Rect;
use super::state::{Ball, Paddle};
use crate::consts::BALL_RADIUS;

/// Which side a ball left the world through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Left,
    Right,
}

impl Ball {
    /// Bounding square, `2 * BALL_RADIUS` on a side
    #[inline]
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(BALL_RADIUS * 2.0))
    }
}

impl Paddle {
    #[inline]
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Check whether the ball crossed a scoring boundary
pub fn scoring_exit(ball: &Ball, dimensions: Vec2) -> Option<Exit> {
    if ball.pos.x < 0.0 {
        Some(Exit::Left)
    } else if ball.pos.x > dimensions.x - 1.0 {
        Some(Exit::Right)
    } else {
        None
    }
}

/// Clamp the ball to the top/bottom walls, reflecting its vertical velocity.
///
/// Returns true if the ball bounced.
pub fn bounce_off_walls(ball: &mut Ball, dimensions: Vec2) -> bool {
    let mut bounced = false;
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    let floor = dimensions.y - 1.0;
    if ball.pos.y > floor {
        ball.pos.y = floor;
        ball.vel.y = -ball.vel.y;
        bounced = true;
    }
    bounced
}

/// Reflect the ball off a paddle it overlaps.
///
/// Only the horizontal part of this tick's motion (`delta_x`) is undone; any
/// vertical motion or wall clamp already applied is kept.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, delta_x: f32) -> bool {
    if !ball.bounding_rect().intersects(&paddle.bounding_rect()) {
        return false;
    }
    ball.vel.x = -ball.vel.x;
    ball.pos.x -= delta_x;
    true
}
