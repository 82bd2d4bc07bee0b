//! Control state sampled by the engine each frame
//!
//! The host updates this from key or touch events; the engine only reads it.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Fire,
    MuteToggle,
}

impl Control {
    /// Keyboard binding by DOM-style key name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Control::Left),
            "ArrowRight" | "d" | "D" => Some(Control::Right),
            " " | "Space" => Some(Control::Fire),
            "m" | "M" => Some(Control::MuteToggle),
            _ => None,
        }
    }
}

/// Pressed/released state of every control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub mute_toggle: bool,
}

impl ControlState {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
            Control::Fire => self.fire = pressed,
            Control::MuteToggle => self.mute_toggle = pressed,
        }
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Fire => self.fire,
            Control::MuteToggle => self.mute_toggle,
        }
    }

    /// Apply a key event; unknown keys are ignored
    pub fn key_event(&mut self, key: &str, pressed: bool) {
        if let Some(control) = Control::from_key(key) {
            self.set(control, pressed);
        }
    }
}
