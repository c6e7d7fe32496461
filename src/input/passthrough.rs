//! Raw per-frame snapshots that bypass edge detection

use std::rc::Rc;

use super::forwarder::{FrameContext, Forwarder};
use super::pointer::{PointerSource, SystemPointer};
use super::root::UiRoot;

/// Sends the pointer position and every connected controller's state each frame
///
/// The position is read through the same capability as the pointer forwarder, so a
/// platform without a pointer only sends controller snapshots.
#[derive(Debug)]
pub struct PassthroughForwarder {
    pointer: Rc<dyn PointerSource>,
}

impl PassthroughForwarder {
    pub fn new(pointer: Rc<dyn PointerSource>) -> Self {
        Self { pointer }
    }
}

impl Default for PassthroughForwarder {
    fn default() -> Self {
        Self::new(Rc::new(SystemPointer))
    }
}

impl Forwarder for PassthroughForwarder {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn forward(&mut self, frame: &FrameContext<'_>, root: Option<&mut (dyn UiRoot + '_)>) {
        let Some(root) = root else {
            return;
        };

        if let Some(pointer) = self.pointer.read(frame.snapshot) {
            root.on_pointer_position(pointer.position);
        }
        for (slot, controller) in frame.snapshot.connected_controllers() {
            root.on_controller_state(slot, controller);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::{ControllerButton, InputEvent};
    use crate::input::pointer::NoPointer;
    use crate::input::repeat::RepeatPolicy;
    use crate::input::root::EventLog;
    use crate::input::state::{ControllerState, InputSnapshot};

    #[test]
    fn test_sends_every_frame_without_edges() {
        let mut forwarder = PassthroughForwarder::default();
        let mut log = EventLog::new();
        let policy = RepeatPolicy::default();
        let mut snapshot = InputSnapshot::new(0.016);
        snapshot.pointer.position = [5.0, 6.0];

        for _ in 0..3 {
            forwarder.forward(&FrameContext::new(&snapshot, &policy), Some(&mut log));
        }
        assert_eq!(
            log.count(|e| *e == InputEvent::PointerPosition { pos: [5.0, 6.0] }),
            3
        );
    }

    #[test]
    fn test_only_connected_slots() {
        let mut forwarder = PassthroughForwarder::default();
        let mut log = EventLog::new();
        let policy = RepeatPolicy::default();
        let mut snapshot = InputSnapshot::new(0.016);
        snapshot.controllers[1] = ControllerState::with_buttons(&[ControllerButton::Start]);
        snapshot.controllers[2].buttons[ControllerButton::A] = true;

        forwarder.forward(&FrameContext::new(&snapshot, &policy), Some(&mut log));

        let slots: Vec<usize> = log
            .events()
            .iter()
            .filter_map(|e| match e {
                InputEvent::ControllerState { slot, .. } => Some(*slot),
                _ => None,
            })
            .collect();
        assert_eq!(slots, vec![1]);
    }

    #[test]
    fn test_pointerless_platform_sends_only_controllers() {
        let mut forwarder = PassthroughForwarder::new(Rc::new(NoPointer));
        let mut log = EventLog::new();
        let policy = RepeatPolicy::default();
        let mut snapshot = InputSnapshot::new(0.016);
        snapshot.pointer.position = [5.0, 6.0];
        snapshot.controllers[0] = ControllerState::connected();

        forwarder.forward(&FrameContext::new(&snapshot, &policy), Some(&mut log));
        assert_eq!(
            log.events(),
            &[InputEvent::ControllerState {
                slot: 0,
                state: ControllerState::connected(),
            }]
        );
    }
}
