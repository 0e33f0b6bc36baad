use super::*;

const EPSILON: f32 = 1e-4;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn held(keys: &[&str]) -> InputState {
    let mut input = InputState::new();
    for key in keys {
        input.set_pressed(key, true);
    }
    input
}

#[derive(Debug, PartialEq)]
enum DrawCall {
    Clear(Color),
    Rect(f32, f32, f32, f32, Color),
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_rect(&mut self, x: f32, y: f32, half_width: f32, half_height: f32, color: Color) {
        self.calls
            .push(DrawCall::Rect(x, y, half_width, half_height, color));
    }
}

#[test]
fn paddle_clamp_keeps_paddle_on_the_field() {
    let config = GameConfig::default();
    let mut paddle = Paddle::new(0.9, &config, config.right_controls.clone());
    let limit = 1.0 - paddle.height / 2.0;

    for p in -20..=20 {
        for v in [-0.5, -0.02, 0.0, 0.02, 0.5] {
            paddle.position = p as f32 * 0.1;
            paddle.velocity = v;
            paddle.advance();
            assert!(
                paddle.position >= -limit && paddle.position <= limit,
                "p={p} v={v} -> {}",
                paddle.position
            );
        }
    }
}

#[test]
fn held_key_drives_paddle_to_the_edge_and_stops() {
    let mut state = GameState::default();
    let input = held(&["w"]);
    for _ in 0..200 {
        state.step(&input);
    }
    assert_close(state.left().position, 1.0 - state.left().height / 2.0);
    assert_close(state.right().position, 0.0);
}

#[test]
fn each_paddle_reads_its_own_controls() {
    let mut state = GameState::default();
    let speed = state.config().paddle_speed;

    state.step(&held(&["w"]));
    assert_close(state.left().position, speed);
    assert_close(state.right().position, 0.0);

    state.step(&held(&["ArrowDown"]));
    assert_close(state.left().position, speed);
    assert_close(state.right().position, -speed);
    assert_close(state.right().velocity, -speed);
    assert_close(state.left().velocity, 0.0);
}

#[test]
fn up_wins_when_both_keys_are_held() {
    let mut state = GameState::default();
    state.step(&held(&["s", "w"]));
    assert_close(state.left().velocity, state.config().paddle_speed);
}

#[test]
fn custom_controls_are_honoured() {
    let config = GameConfig::builder()
        .left_controls(PaddleControls::new("q", "a"))
        .right_controls(PaddleControls::new("o", "l"))
        .build();
    let mut state = GameState::new(&config);

    state.step(&held(&["w", "ArrowUp"]));
    assert_close(state.left().position, 0.0);
    assert_close(state.right().position, 0.0);

    state.step(&held(&["a", "o"]));
    assert_close(state.left().position, -config.paddle_speed);
    assert_close(state.right().position, config.paddle_speed);
}

#[test]
fn ball_reflects_off_the_top_wall() {
    let mut state = GameState::default();
    let size = state.ball().size;
    *state.ball_mut() = Ball {
        x: 0.0,
        y: 1.0 - size + 0.001,
        dx: 0.01,
        dy: 0.01,
        size,
    };

    state.step(&InputState::new());
    assert_close(state.ball().dy, -0.01);
    assert_close(state.ball().dx, 0.01);
}

#[test]
fn ball_reflects_off_the_bottom_wall() {
    let mut state = GameState::default();
    let size = state.ball().size;
    *state.ball_mut() = Ball {
        x: 0.0,
        y: -1.0 + size,
        dx: 0.01,
        dy: -0.01,
        size,
    };

    state.step(&InputState::new());
    assert_close(state.ball().dy, 0.01);
}

#[test]
fn ball_past_the_wall_flips_again_next_tick() {
    let mut state = GameState::default();
    let size = state.ball().size;
    *state.ball_mut() = Ball {
        x: 0.0,
        y: 1.0 - size + 0.005,
        dx: 0.0,
        dy: 0.01,
        size,
    };

    state.step(&InputState::new());
    assert_close(state.ball().dy, -0.01);
    state.step(&InputState::new());
    assert_close(state.ball().dy, 0.01);
}

#[test]
fn ball_inside_paddle_box_reflects_horizontally() {
    let mut state = GameState::default();
    let size = state.ball().size;
    *state.ball_mut() = Ball {
        x: 0.88,
        y: 0.05,
        dx: 0.01,
        dy: 0.0,
        size,
    };

    state.step(&InputState::new());
    assert!(state.right().contains(state.ball().x, state.ball().y));
    assert_close(state.ball().dx, -0.01);
    assert_close(state.ball().x, 0.89);
}

#[test]
fn ball_reflects_off_the_left_paddle() {
    let mut state = GameState::default();
    let size = state.ball().size;
    state.left.position = -0.5;
    *state.ball_mut() = Ball {
        x: -0.88,
        y: -0.6,
        dx: -0.01,
        dy: 0.0,
        size,
    };

    state.step(&InputState::new());
    assert_close(state.ball().dx, 0.01);
}

#[test]
fn ball_above_paddle_passes_by() {
    let mut state = GameState::default();
    let size = state.ball().size;
    *state.ball_mut() = Ball {
        x: 0.88,
        y: 0.5,
        dx: 0.01,
        dy: 0.0,
        size,
    };

    state.step(&InputState::new());
    assert_close(state.ball().dx, 0.01);
}

#[test]
fn goal_on_the_right_resets_ball_and_credits_left() {
    let mut state = GameState::default();
    let size = state.ball().size;
    *state.ball_mut() = Ball {
        x: 1.0001,
        y: 0.3,
        dx: 0.01,
        dy: 0.01,
        size,
    };

    state.step(&InputState::new());
    assert_eq!(state.ball().x, 0.0);
    assert_eq!(state.ball().y, 0.0);
    assert_close(state.ball().dx, -0.01);
    assert_eq!(state.score(), Score { left: 1, right: 0 });
}

#[test]
fn goal_on_the_left_negates_dx_and_credits_right() {
    let mut state = GameState::default();
    let size = state.ball().size;
    *state.ball_mut() = Ball {
        x: -1.0001,
        y: -0.3,
        dx: -0.01,
        dy: 0.01,
        size,
    };

    state.step(&InputState::new());
    assert_eq!((state.ball().x, state.ball().y), (0.0, 0.0));
    assert_close(state.ball().dx, 0.01);
    assert_eq!(state.score(), Score { left: 0, right: 1 });
}

#[test]
fn fifty_quiet_ticks_follow_closed_form_integration() {
    let mut state = GameState::default();
    assert_eq!(state.left().position, 0.0);
    let input = InputState::new();

    for _ in 0..50 {
        state.step(&input);
    }

    assert_close(state.ball().x, 0.5);
    assert_close(state.ball().y, 0.5);
    assert_close(state.ball().dx, 0.01);
    assert_close(state.ball().dy, 0.01);
    assert_eq!(state.score(), Score::default());
}

#[test]
fn reset_restores_the_opening_serve() {
    let mut state = GameState::default();
    let input = held(&["w", "ArrowDown"]);
    for _ in 0..150 {
        state.step(&input);
    }
    let ball = state.ball_mut();
    ball.x = 1.0001;
    ball.dx = 0.01;
    state.step(&input);
    assert_ne!(state.score(), Score::default());

    state.reset();
    assert_eq!(state.score(), Score::default());
    assert_eq!(state.left().position, 0.0);
    assert_eq!(state.right().position, 0.0);
    assert_eq!(*state.ball(), Ball::serve(state.config()));
}

#[test]
fn draw_clears_then_paints_paddles_and_ball() {
    let state = GameState::default();
    let mut renderer = RecordingRenderer::default();
    state.draw(&mut renderer);

    assert_eq!(
        renderer.calls,
        vec![
            DrawCall::Clear(BACKGROUND_COLOR),
            DrawCall::Rect(-0.9, 0.0, 0.02, 0.15, PADDLE_COLOR),
            DrawCall::Rect(0.9, 0.0, 0.02, 0.15, PADDLE_COLOR),
            DrawCall::Rect(0.0, 0.0, 0.02, 0.02, BALL_COLOR),
        ]
    );
}
