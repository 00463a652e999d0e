use std::time::Duration;

pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Typing caret visibility, flipped on every tick.
#[derive(Debug, Clone)]
pub struct CursorBlinker {
    visible: bool,
}

impl Default for CursorBlinker {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorBlinker {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn tick(&mut self) {
        self.visible = !self.visible;
    }
}
