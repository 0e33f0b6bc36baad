use crate::config::GameConfig;
use crate::game::GameState;
use crate::input::InputState;
use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};
use pong_common::{App, Key, Renderer};

/// Frontend-facing wrapper that pairs the game state with live keyboard input.
#[derive(Default)]
pub struct PongApp {
    should_exit: bool,
    pub state: GameState,
    pub input: InputState,
}

impl PongApp {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            should_exit: false,
            state: GameState::new(config),
            input: InputState::new(),
        }
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.input.release_all();
    }
}

impl App for PongApp {
    fn init(&mut self) {
        let config = self.state.config();
        log::info!(
            "Pong init, left {:?}, right {:?}",
            config.left_controls,
            config.right_controls
        );
    }

    fn update(&mut self) {
        self.state.step(&self.input);
    }

    fn draw(&mut self, renderer: &mut dyn Renderer) {
        self.state.draw(renderer);
    }

    fn handle_key_event(&mut self, key: &str, is_down: bool) {
        log::debug!("key {:?} down={}", key, is_down);
        if is_down && Key::Escape.name() == Some(key) {
            self.should_exit = true;
        }
        self.input.set_pressed(key, is_down);
    }

    fn focus_lost(&mut self) {
        log::debug!("focus lost, releasing held keys");
        self.input.release_all();
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        let score = self.state.score();
        log::info!("Pong exit, final score {}:{}", score.left, score.right);
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Pong".to_string()
    }
}
