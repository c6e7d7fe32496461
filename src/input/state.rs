//! Raw device state

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use super::events::{ControllerButton, KeyCode, PointerButton};

/// Number of controller slots sampled each frame
pub const MAX_CONTROLLERS: usize = 4;

/// Raw device snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    pub keyboard: KeyboardState,
    pub pointer: PointerState,
    /// Controller state per player slot
    pub controllers: [ControllerState; MAX_CONTROLLERS],
    /// Whether the host window currently has focus
    pub focused: bool,
    /// Time elapsed since the previous frame in seconds
    pub delta_time: f32,
}

/// Keyboard state: which keys are physically down
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardState {
    keys: EnumMap<KeyCode, bool>,
}

impl KeyboardState {
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys[key]
    }

    pub fn set(&mut self, key: KeyCode, down: bool) {
        self.keys[key] = down;
    }

    /// Returns true if either shift key is down
    pub fn shift_held(&self) -> bool {
        self.keys[KeyCode::ShiftLeft] || self.keys[KeyCode::ShiftRight]
    }

    /// Iterates the full key set with its down state
    pub fn iter(&self) -> impl Iterator<Item = (KeyCode, bool)> + '_ {
        self.keys.iter().map(|(key, down)| (key, *down))
    }

    /// Releases every key
    pub fn clear(&mut self) {
        self.keys = EnumMap::default();
    }
}

/// Pointer (mouse) state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    /// DPI-scaled logical coordinates, already transformed for the UI
    pub position: [f32; 2],
    /// Pointer button states
    pub buttons: EnumMap<PointerButton, bool>,
    /// Cumulative vertical scroll since startup
    pub scroll: f32,
}

impl PointerState {
    pub fn is_down(&self, button: PointerButton) -> bool {
        self.buttons[button]
    }
}

/// Full state of one controller slot
///
/// Stick axes are in `[-1, 1]` with positive Y pointing up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerState {
    pub connected: bool,
    pub buttons: EnumMap<ControllerButton, bool>,
    pub left_stick: [f32; 2],
    pub right_stick: [f32; 2],
    pub left_trigger: f32,
    pub right_trigger: f32,
}

impl ControllerState {
    /// Creates a connected controller with nothing pressed
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    /// Creates a connected controller holding `buttons`
    pub fn with_buttons(buttons: &[ControllerButton]) -> Self {
        let mut controller = Self::connected();
        for button in buttons {
            controller.buttons[*button] = true;
        }
        controller
    }

    pub fn is_down(&self, button: ControllerButton) -> bool {
        self.buttons[button]
    }
}

impl InputSnapshot {
    /// Creates a focused, empty snapshot
    pub fn new(delta_time: f32) -> Self {
        Self {
            focused: true,
            delta_time,
            ..Self::default()
        }
    }

    /// Iterates the controller slots that currently report connected
    pub fn connected_controllers(&self) -> impl Iterator<Item = (usize, &ControllerState)> {
        self.controllers
            .iter()
            .enumerate()
            .filter(|(_, controller)| controller.connected)
    }
}
