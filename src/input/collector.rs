//! Raw input collection from winit events

use tracing::trace;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::events::{KeyCode, PointerButton};
use super::state::{ControllerState, InputSnapshot, MAX_CONTROLLERS};

/// Pixels per scroll line when the platform reports line deltas
const PIXELS_PER_LINE: f32 = 20.0;

/// Errors from host-facing collector calls
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("controller slot {slot} out of range (max {max})")]
    ControllerSlot { slot: usize, max: usize },
}

/// Collects raw input from winit events and maintains the device snapshot
///
/// Winit has no gamepad support, so controller slots are filled in by the host from
/// whatever gamepad backend it uses.
#[derive(Debug)]
pub struct InputCollector {
    state: InputSnapshot,
    scale_factor: f32,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self {
            state: InputSnapshot::new(0.0),
            scale_factor: 1.0,
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor([position.x as f32, position.y as f32]);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                match PointerButton::from_winit(*button) {
                    Some(button) => self.set_pointer_button(button, state.is_pressed()),
                    None => trace!(?button, "Ignoring untracked mouse button"),
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let pixels = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y * PIXELS_PER_LINE,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.scroll_by(pixels);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Auto-repeat comes from the router, not the OS
                if event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                match KeyCode::from_winit(code) {
                    Some(key) => self.set_key(key, event.state == ElementState::Pressed),
                    None => trace!(?code, "Ignoring untracked key"),
                }
            }

            WindowEvent::Focused(focused) => self.set_focused(*focused),

            _ => {}
        }
    }

    /// Records a cursor move in physical pixels
    pub fn move_cursor(&mut self, physical: [f32; 2]) {
        self.state.pointer.position = [
            physical[0] / self.scale_factor,
            physical[1] / self.scale_factor,
        ];
    }

    pub fn set_pointer_button(&mut self, button: PointerButton, down: bool) {
        self.state.pointer.buttons[button] = down;
    }

    /// Adds to the cumulative scroll value
    pub fn scroll_by(&mut self, amount: f32) {
        self.state.pointer.scroll += amount;
    }

    pub fn set_key(&mut self, key: KeyCode, down: bool) {
        self.state.keyboard.set(key, down);
    }

    /// Updates window focus
    ///
    /// Releases are not delivered while unfocused, so losing focus releases everything.
    pub fn set_focused(&mut self, focused: bool) {
        self.state.focused = focused;
        if !focused {
            self.state.keyboard.clear();
            self.state.pointer.buttons = Default::default();
        }
    }

    /// Stores the sampled state of one controller slot
    pub fn set_controller(
        &mut self,
        slot: usize,
        state: ControllerState,
    ) -> Result<(), InputError> {
        let entry = self
            .state
            .controllers
            .get_mut(slot)
            .ok_or(InputError::ControllerSlot {
                slot,
                max: MAX_CONTROLLERS,
            })?;
        *entry = state;
        Ok(())
    }

    /// Marks a controller slot as disconnected
    pub fn disconnect_controller(&mut self, slot: usize) -> Result<(), InputError> {
        self.set_controller(slot, ControllerState::default())
    }

    /// Get current input state
    pub fn state(&self) -> &InputSnapshot {
        &self.state
    }

    /// Clones the current state into this frame's snapshot
    ///
    /// Continuous state (held keys, cursor, cumulative scroll) is kept for the next frame.
    pub fn snapshot(&self, delta_time: f32) -> InputSnapshot {
        InputSnapshot {
            delta_time,
            ..self.state.clone()
        }
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::ControllerButton;

    #[test]
    fn test_cursor_is_dpi_scaled() {
        let mut collector = InputCollector::new();
        collector.set_scale_factor(2.0);
        collector.move_cursor([200.0, 100.0]);
        assert_eq!(collector.state().pointer.position, [100.0, 50.0]);
    }

    #[test]
    fn test_scroll_accumulates() {
        let mut collector = InputCollector::new();
        collector.scroll_by(20.0);
        collector.scroll_by(-5.0);
        assert_eq!(collector.snapshot(0.016).pointer.scroll, 15.0);
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let mut collector = InputCollector::new();
        collector.set_key(KeyCode::W, true);
        collector.set_pointer_button(PointerButton::Left, true);

        collector.handle_window_event(&WindowEvent::Focused(false));
        let snapshot = collector.snapshot(0.016);
        assert!(!snapshot.focused);
        assert!(!snapshot.keyboard.is_down(KeyCode::W));
        assert!(!snapshot.pointer.is_down(PointerButton::Left));

        collector.handle_window_event(&WindowEvent::Focused(true));
        assert!(collector.state().focused);
    }

    #[test]
    fn test_snapshot_keeps_held_keys() {
        let mut collector = InputCollector::new();
        collector.set_key(KeyCode::Tab, true);
        let first = collector.snapshot(0.016);
        let second = collector.snapshot(0.032);
        assert!(first.keyboard.is_down(KeyCode::Tab));
        assert!(second.keyboard.is_down(KeyCode::Tab));
        assert_eq!(second.delta_time, 0.032);
    }

    #[test]
    fn test_controller_slots() {
        let mut collector = InputCollector::new();
        let pad = ControllerState::with_buttons(&[ControllerButton::B]);
        assert_eq!(collector.set_controller(1, pad.clone()), Ok(()));
        assert_eq!(collector.state().controllers[1], pad);

        assert_eq!(
            collector.set_controller(MAX_CONTROLLERS, pad),
            Err(InputError::ControllerSlot {
                slot: MAX_CONTROLLERS,
                max: MAX_CONTROLLERS
            })
        );

        collector.disconnect_controller(1).unwrap();
        assert!(!collector.state().controllers[1].connected);
    }
}
