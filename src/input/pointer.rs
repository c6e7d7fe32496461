//! Pointer forwarding: button edges and scroll deltas

use std::fmt::Debug;
use std::rc::Rc;

use super::events::PointerButton;
use super::forwarder::{FrameContext, Forwarder};
use super::root::UiRoot;
use super::state::{InputSnapshot, PointerState};
use super::tracker::EdgeTracker;

/// Capability: where pointer state comes from on this platform
pub trait PointerSource: Debug {
    /// Pointer state for this frame, or `None` when the platform has no pointer
    fn read<'a>(&self, snapshot: &'a InputSnapshot) -> Option<&'a PointerState>;
}

/// Pointer read from the host's sampled snapshot (desktop platforms)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPointer;

impl PointerSource for SystemPointer {
    fn read<'a>(&self, snapshot: &'a InputSnapshot) -> Option<&'a PointerState> {
        Some(&snapshot.pointer)
    }
}

/// Platforms without pointer input
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPointer;

impl PointerSource for NoPointer {
    fn read<'a>(&self, _snapshot: &'a InputSnapshot) -> Option<&'a PointerState> {
        None
    }
}

/// Emits pointer button Pressed / Held / Released events and scroll deltas
///
/// Pointer buttons never auto-repeat.
#[derive(Debug)]
pub struct PointerForwarder {
    source: Rc<dyn PointerSource>,
    buttons: EdgeTracker<PointerButton>,
    /// Cumulative scroll value last reported
    last_scroll: f32,
}

impl PointerForwarder {
    pub fn new(source: Box<dyn PointerSource>) -> Self {
        Self {
            source: Rc::from(source),
            buttons: EdgeTracker::new(),
            last_scroll: 0.0,
        }
    }

    /// Picks [`SystemPointer`] or [`NoPointer`]
    pub fn with_pointer(enabled: bool) -> Self {
        if enabled {
            Self::new(Box::new(SystemPointer))
        } else {
            Self::new(Box::new(NoPointer))
        }
    }

    pub fn is_pressed(&self, button: PointerButton) -> bool {
        self.buttons.is_pressed(button)
    }

    /// Shared handle to this forwarder's pointer capability
    pub fn source(&self) -> Rc<dyn PointerSource> {
        Rc::clone(&self.source)
    }
}

impl Default for PointerForwarder {
    fn default() -> Self {
        Self::with_pointer(true)
    }
}

impl Forwarder for PointerForwarder {
    fn name(&self) -> &'static str {
        "pointer"
    }

    fn forward(&mut self, frame: &FrameContext<'_>, root: Option<&mut (dyn UiRoot + '_)>) {
        let Some(pointer) = self.source.read(frame.snapshot) else {
            return;
        };
        let Some(root) = root else {
            return;
        };

        let pos = pointer.position;
        for button in PointerButton::ALL {
            self.buttons
                .update(button, pointer.is_down(button), |transition| {
                    root.on_pointer_button(transition, button, pos)
                });
        }

        let delta = pointer.scroll - self.last_scroll;
        if delta != 0.0 {
            root.on_scroll(delta, pos);
            self.last_scroll = pointer.scroll;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::{InputEvent, Transition};
    use crate::input::repeat::RepeatPolicy;
    use crate::input::root::EventLog;

    fn step(forwarder: &mut PointerForwarder, snapshot: &InputSnapshot, log: &mut EventLog) {
        let policy = RepeatPolicy::default();
        forwarder.forward(&FrameContext::new(snapshot, &policy), Some(log));
    }

    fn with_scroll(scroll: f32) -> InputSnapshot {
        let mut snapshot = InputSnapshot::new(0.016);
        snapshot.pointer.position = [10.0, 20.0];
        snapshot.pointer.scroll = scroll;
        snapshot
    }

    #[test]
    fn test_click_carries_position() {
        let mut forwarder = PointerForwarder::default();
        let mut log = EventLog::new();

        let mut down = InputSnapshot::new(0.016);
        down.pointer.position = [3.0, 4.0];
        down.pointer.buttons[PointerButton::Right] = true;
        step(&mut forwarder, &down, &mut log);

        let mut up = down.clone();
        up.pointer.buttons[PointerButton::Right] = false;
        step(&mut forwarder, &up, &mut log);

        let transitions: Vec<Transition> =
            log.events().iter().filter_map(InputEvent::transition).collect();
        assert_eq!(
            transitions,
            vec![Transition::Pressed, Transition::Held, Transition::Released]
        );
        assert_eq!(
            log.events()[0],
            InputEvent::PointerButton {
                transition: Transition::Pressed,
                button: PointerButton::Right,
                pos: [3.0, 4.0],
            }
        );
    }

    #[test]
    fn test_buttons_never_repeat() {
        let mut forwarder = PointerForwarder::default();
        let mut log = EventLog::new();
        let mut down = InputSnapshot::new(0.25);
        down.pointer.buttons[PointerButton::Left] = true;

        for _ in 0..40 {
            step(&mut forwarder, &down, &mut log);
        }
        assert_eq!(log.count(|e| e.transition() == Some(Transition::Repeated)), 0);
    }

    #[test]
    fn test_scroll_delta() {
        let mut forwarder = PointerForwarder::default();
        let mut log = EventLog::new();

        step(&mut forwarder, &with_scroll(120.0), &mut log);
        step(&mut forwarder, &with_scroll(120.0), &mut log);
        step(&mut forwarder, &with_scroll(80.0), &mut log);

        assert_eq!(
            log.events(),
            &[
                InputEvent::Scroll {
                    delta: 120.0,
                    pos: [10.0, 20.0],
                },
                InputEvent::Scroll {
                    delta: -40.0,
                    pos: [10.0, 20.0],
                },
            ]
        );
    }

    #[test]
    fn test_no_pointer_platform_is_silent() {
        let mut forwarder = PointerForwarder::with_pointer(false);
        let mut log = EventLog::new();
        let mut snapshot = with_scroll(5.0);
        snapshot.pointer.buttons[PointerButton::Left] = true;

        step(&mut forwarder, &snapshot, &mut log);
        assert!(log.is_empty());
        assert!(!forwarder.is_pressed(PointerButton::Left));
    }
}
