//! Event receivers
//!
//! The widget tree lives outside this crate. Whatever is currently the active UI root
//! implements [`UiRoot`] and receives every routed event for the frame.

use super::events::{AbstractButton, Direction, InputEvent, KeyCode, PointerButton, Transition};
use super::state::ControllerState;

/// Receiver of routed input events
///
/// All calls are fire-and-forget. Every method defaults to a no-op so roots only implement
/// the events they care about.
pub trait UiRoot {
    /// A key from the fixed key set changed or stayed down
    fn on_key(&mut self, _transition: Transition, _key: KeyCode) {}

    /// A pointer button changed or stayed down at `pos`
    fn on_pointer_button(
        &mut self,
        _transition: Transition,
        _button: PointerButton,
        _pos: [f32; 2],
    ) {
    }

    /// The cumulative scroll value changed by `delta`
    fn on_scroll(&mut self, _delta: f32, _pos: [f32; 2]) {}

    /// Absolute pointer position, sent every frame
    fn on_pointer_position(&mut self, _pos: [f32; 2]) {}

    /// Full state of a connected controller, sent every frame
    fn on_controller_state(&mut self, _slot: usize, _state: &ControllerState) {}

    /// A device-independent direction changed, stayed down or repeated
    fn on_direction(&mut self, _transition: Transition, _direction: Direction) {}

    /// A device-independent button changed, stayed down or repeated
    fn on_abstract_button(&mut self, _transition: Transition, _button: AbstractButton) {}
}

/// Resolves the active UI root for a frame
pub trait UiHost {
    /// The root that receives this frame's events, if any
    fn active_root(&mut self) -> Option<&mut dyn UiRoot>;
}

impl<R: UiRoot> UiHost for Option<R> {
    fn active_root(&mut self) -> Option<&mut dyn UiRoot> {
        self.as_mut().map(|root| root as &mut dyn UiRoot)
    }
}

/// Root that records every event it receives
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<InputEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Takes the recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Counts recorded events matching `predicate`
    pub fn count(&self, predicate: impl Fn(&InputEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl UiRoot for EventLog {
    fn on_key(&mut self, transition: Transition, key: KeyCode) {
        self.events.push(InputEvent::Key { transition, key });
    }

    fn on_pointer_button(&mut self, transition: Transition, button: PointerButton, pos: [f32; 2]) {
        self.events.push(InputEvent::PointerButton {
            transition,
            button,
            pos,
        });
    }

    fn on_scroll(&mut self, delta: f32, pos: [f32; 2]) {
        self.events.push(InputEvent::Scroll { delta, pos });
    }

    fn on_pointer_position(&mut self, pos: [f32; 2]) {
        self.events.push(InputEvent::PointerPosition { pos });
    }

    fn on_controller_state(&mut self, slot: usize, state: &ControllerState) {
        self.events.push(InputEvent::ControllerState {
            slot,
            state: state.clone(),
        });
    }

    fn on_direction(&mut self, transition: Transition, direction: Direction) {
        self.events.push(InputEvent::Direction {
            transition,
            direction,
        });
    }

    fn on_abstract_button(&mut self, transition: Transition, button: AbstractButton) {
        self.events.push(InputEvent::AbstractButton { transition, button });
    }
}
