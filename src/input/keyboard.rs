//! Keyboard forwarding: edge detection and auto-repeat over the full key set

use super::events::KeyCode;
use super::forwarder::{FrameContext, Forwarder};
use super::root::UiRoot;
use super::tracker::EdgeTracker;

/// Emits key Pressed / Held / Repeated / Released events
#[derive(Debug, Default)]
pub struct KeyboardForwarder {
    keys: EdgeTracker<KeyCode>,
}

impl KeyboardForwarder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` was down as of the last routed frame
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.is_pressed(key)
    }
}

impl Forwarder for KeyboardForwarder {
    fn name(&self) -> &'static str {
        "keyboard"
    }

    fn forward(&mut self, frame: &FrameContext<'_>, root: Option<&mut (dyn UiRoot + '_)>) {
        let Some(root) = root else {
            return;
        };

        let delta_time = frame.delta_time();
        for (key, down) in frame.snapshot.keyboard.iter() {
            self.keys
                .update_repeating(key, down, delta_time, frame.repeat, |transition| {
                    root.on_key(transition, key)
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::{InputEvent, Transition};
    use crate::input::repeat::RepeatPolicy;
    use crate::input::root::EventLog;
    use crate::input::state::InputSnapshot;

    fn frame_with(keys: &[KeyCode]) -> InputSnapshot {
        let mut snapshot = InputSnapshot::new(0.0625);
        for key in keys {
            snapshot.keyboard.set(*key, true);
        }
        snapshot
    }

    fn step(forwarder: &mut KeyboardForwarder, snapshot: &InputSnapshot, log: &mut EventLog) {
        let policy = RepeatPolicy::new(0.5, 0.125);
        forwarder.forward(&FrameContext::new(snapshot, &policy), Some(log));
    }

    fn key_event(transition: Transition, key: KeyCode) -> InputEvent {
        InputEvent::Key { transition, key }
    }

    #[test]
    fn test_tap_emits_press_held_release() {
        let mut forwarder = KeyboardForwarder::new();
        let mut log = EventLog::new();

        step(&mut forwarder, &frame_with(&[KeyCode::Space]), &mut log);
        step(&mut forwarder, &frame_with(&[KeyCode::Space]), &mut log);
        step(&mut forwarder, &frame_with(&[]), &mut log);

        assert_eq!(
            log.events(),
            &[
                key_event(Transition::Pressed, KeyCode::Space),
                key_event(Transition::Held, KeyCode::Space),
                key_event(Transition::Held, KeyCode::Space),
                key_event(Transition::Released, KeyCode::Space),
            ]
        );
    }

    #[test]
    fn test_held_key_repeats() {
        let mut forwarder = KeyboardForwarder::new();
        let mut log = EventLog::new();
        let held = frame_with(&[KeyCode::Down]);

        for _ in 0..20 {
            step(&mut forwarder, &held, &mut log);
        }

        let repeats = log.count(|e| *e == key_event(Transition::Repeated, KeyCode::Down));
        assert_eq!(repeats, 5);
    }

    #[test]
    fn test_multiple_keys_tracked_independently() {
        let mut forwarder = KeyboardForwarder::new();
        let mut log = EventLog::new();

        step(&mut forwarder, &frame_with(&[KeyCode::A]), &mut log);
        step(&mut forwarder, &frame_with(&[KeyCode::A, KeyCode::B]), &mut log);
        log.drain();
        step(&mut forwarder, &frame_with(&[KeyCode::B]), &mut log);

        assert_eq!(
            log.events(),
            &[
                key_event(Transition::Released, KeyCode::A),
                key_event(Transition::Held, KeyCode::B),
            ]
        );
    }

    #[test]
    fn test_no_root_freezes_state() {
        let mut forwarder = KeyboardForwarder::new();
        let policy = RepeatPolicy::default();
        let snapshot = frame_with(&[KeyCode::Enter]);

        forwarder.forward(&FrameContext::new(&snapshot, &policy), None);
        assert!(!forwarder.is_pressed(KeyCode::Enter));

        // The first frame with a root reports the press
        let mut log = EventLog::new();
        forwarder.forward(&FrameContext::new(&snapshot, &policy), Some(&mut log));
        assert_eq!(log.events()[0], key_event(Transition::Pressed, KeyCode::Enter));
    }
}
