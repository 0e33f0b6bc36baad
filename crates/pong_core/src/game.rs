use pong_common::{Color, Renderer};

use crate::config::{GameConfig, PaddleControls};
use crate::input::InputState;

#[cfg(test)]
mod tests;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const PADDLE_COLOR: Color = Color::WHITE;
pub const BALL_COLOR: Color = Color::WHITE;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Vertical center.
    pub position: f32,
    /// Fixed horizontal center.
    pub x: f32,
    /// Horizontal half-extent.
    pub width: f32,
    /// Full vertical extent; the paddle spans `position ± height / 2`.
    pub height: f32,
    pub velocity: f32,
    pub controls: PaddleControls,
}

impl Paddle {
    fn new(x: f32, config: &GameConfig, controls: PaddleControls) -> Self {
        Self {
            position: 0.0,
            x,
            width: config.paddle_width,
            height: config.paddle_height,
            velocity: 0.0,
            controls,
        }
    }

    fn steer(&mut self, input: &InputState, speed: f32) {
        self.velocity = if input.is_pressed(&self.controls.up_key) {
            speed
        } else if input.is_pressed(&self.controls.down_key) {
            -speed
        } else {
            0.0
        };
    }

    fn advance(&mut self) {
        let limit = 1.0 - self.height / 2.0;
        self.position = (self.position + self.velocity).max(-limit).min(limit);
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        let half_height = self.height / 2.0;
        x >= self.x - self.width
            && x <= self.x + self.width
            && y >= self.position - half_height
            && y <= self.position + half_height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    /// Half-extent of the square.
    pub size: f32,
}

impl Ball {
    fn serve(config: &GameConfig) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            dx: config.ball_dx,
            dy: config.ball_dy,
            size: config.ball_size,
        }
    }

    fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    // Not clamped; consecutive ticks past the edge flip again.
    fn bounce_off_walls(&mut self) {
        if self.y > 1.0 - self.size || self.y < -1.0 + self.size {
            self.dy = -self.dy;
        }
    }

    /// Side credited with a goal if the ball has left the field horizontally.
    fn goal(&self) -> Option<Side> {
        if self.x > 1.0 {
            Some(Side::Left)
        } else if self.x < -1.0 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    fn credit(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Both paddles, the ball and the running score.
pub struct GameState {
    config: GameConfig,
    left: Paddle,
    right: Paddle,
    ball: Ball,
    score: Score,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            left: Paddle::new(-config.paddle_x, config, config.left_controls.clone()),
            right: Paddle::new(config.paddle_x, config, config.right_controls.clone()),
            ball: Ball::serve(config),
            score: Score::default(),
            config: config.clone(),
        }
    }

    /// Back to the opening serve with a blank score.
    pub fn reset(&mut self) {
        *self = Self::new(&self.config);
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self, input: &InputState) {
        let speed = self.config.paddle_speed;
        for paddle in [&mut self.left, &mut self.right] {
            paddle.steer(input, speed);
            paddle.advance();
        }

        self.ball.advance();
        self.ball.bounce_off_walls();

        // Velocity-only reflection, the ball is not pushed back out of the box.
        for paddle in [&self.left, &self.right] {
            if paddle.contains(self.ball.x, self.ball.y) {
                self.ball.dx = -self.ball.dx;
            }
        }

        if let Some(side) = self.ball.goal() {
            self.score.credit(side);
            log::info!(
                "Goal for {:?}, score {}:{}",
                side,
                self.score.left,
                self.score.right
            );
            self.ball.x = 0.0;
            self.ball.y = 0.0;
            self.ball.dx = -self.ball.dx;
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.clear(BACKGROUND_COLOR);
        for paddle in [&self.left, &self.right] {
            renderer.draw_rect(
                paddle.x,
                paddle.position,
                paddle.width,
                paddle.height / 2.0,
                PADDLE_COLOR,
            );
        }
        let ball = &self.ball;
        renderer.draw_rect(ball.x, ball.y, ball.size, ball.size, BALL_COLOR);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn left(&self) -> &Paddle {
        &self.left
    }

    pub fn right(&self) -> &Paddle {
        &self.right
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }
}
