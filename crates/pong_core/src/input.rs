use std::collections::HashMap;

/// Which keys are currently held, keyed by `KeyboardEvent.key` style names.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, key: &str, is_down: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = is_down,
            None => {
                self.keys.insert(key.to_owned(), is_down);
            }
        }
    }

    /// Unknown keys read as released.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn release_all(&mut self) {
        self.keys.values_mut().for_each(|state| *state = false);
    }
}
