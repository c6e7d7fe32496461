//! Per-input edge detection with optional auto-repeat

use enum_map::{EnumArray, EnumMap};

use super::events::Transition;
use super::repeat::{RepeatPolicy, RepeatTimer};

/// Edge and repeat state of a single tracked input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackedInput {
    /// Whether the input was active last frame
    pub pressed: bool,
    pub timer: RepeatTimer,
}

/// Edge state for every member of a closed input family
///
/// Every input starts released. Only the owning forwarder mutates it.
#[derive(Debug)]
pub struct EdgeTracker<K: EnumArray<TrackedInput>> {
    inputs: EnumMap<K, TrackedInput>,
}

impl<K: EnumArray<TrackedInput> + Copy> EdgeTracker<K> {
    pub fn new() -> Self {
        Self {
            inputs: EnumMap::default(),
        }
    }

    pub fn get(&self, input: K) -> &TrackedInput {
        &self.inputs[input]
    }

    pub fn is_pressed(&self, input: K) -> bool {
        self.inputs[input].pressed
    }

    /// Edge detection without repeat: Pressed, Held while down, Released
    pub fn update(&mut self, input: K, is_down: bool, mut emit: impl FnMut(Transition)) {
        let tracked = &mut self.inputs[input];
        if is_down {
            if !tracked.pressed {
                tracked.pressed = true;
                emit(Transition::Pressed);
            }
            emit(Transition::Held);
        } else if tracked.pressed {
            tracked.pressed = false;
            tracked.timer.reset();
            emit(Transition::Released);
        }
    }

    /// Edge detection plus auto-repeat driven by `policy`
    pub fn update_repeating(
        &mut self,
        input: K,
        is_down: bool,
        delta_time: f32,
        policy: &RepeatPolicy,
        mut emit: impl FnMut(Transition),
    ) {
        self.update(input, is_down, &mut emit);
        if is_down && self.inputs[input].timer.tick(delta_time, policy) {
            emit(Transition::Repeated);
        }
    }
}

impl<K: EnumArray<TrackedInput> + Copy> Default for EdgeTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::Direction;

    fn run(
        tracker: &mut EdgeTracker<Direction>,
        down: bool,
        policy: &RepeatPolicy,
    ) -> Vec<Transition> {
        let mut out = Vec::new();
        tracker.update_repeating(Direction::Up, down, 0.0625, policy, |t| out.push(t));
        out
    }

    #[test]
    fn test_press_hold_release() {
        let mut tracker = EdgeTracker::<Direction>::new();
        let policy = RepeatPolicy::default();

        assert_eq!(
            run(&mut tracker, true, &policy),
            vec![Transition::Pressed, Transition::Held]
        );
        assert!(tracker.is_pressed(Direction::Up));
        assert_eq!(run(&mut tracker, true, &policy), vec![Transition::Held]);
        assert_eq!(run(&mut tracker, false, &policy), vec![Transition::Released]);
        assert!(run(&mut tracker, false, &policy).is_empty());
        assert!(!tracker.is_pressed(Direction::Up));
    }

    #[test]
    fn test_key_family_starts_released() {
        use crate::input::events::KeyCode;
        let tracker = EdgeTracker::<KeyCode>::default();
        assert!(!tracker.is_pressed(KeyCode::NumpadEnter));
        assert_eq!(*tracker.get(KeyCode::F24), TrackedInput::default());
        assert!(format!("{tracker:?}").contains("EdgeTracker"));
    }

    #[test]
    fn test_release_resets_timer() {
        let mut tracker = EdgeTracker::<Direction>::new();
        let policy = RepeatPolicy::new(0.5, 0.125);
        for _ in 0..12 {
            run(&mut tracker, true, &policy);
        }
        assert!(tracker.get(Direction::Up).timer.since_press() > 0.5);

        run(&mut tracker, false, &policy);
        assert_eq!(tracker.get(Direction::Up).timer, RepeatTimer::default());
    }

    #[test]
    fn test_repeat_follows_held() {
        let mut tracker = EdgeTracker::<Direction>::new();
        let policy = RepeatPolicy::new(0.0, 0.0);
        assert_eq!(
            run(&mut tracker, true, &policy),
            vec![Transition::Pressed, Transition::Held, Transition::Repeated]
        );
    }

    #[test]
    fn test_plain_update_never_repeats() {
        let mut tracker = EdgeTracker::<Direction>::new();
        let mut out = Vec::new();
        for _ in 0..100 {
            tracker.update(Direction::Left, true, |t| out.push(t));
        }
        assert!(!out.contains(&Transition::Repeated));
        assert_eq!(out.iter().filter(|t| **t == Transition::Pressed).count(), 1);
    }

    #[test]
    fn test_inputs_are_independent() {
        let mut tracker = EdgeTracker::<Direction>::new();
        tracker.update(Direction::Left, true, |_| {});
        assert!(tracker.is_pressed(Direction::Left));
        assert!(!tracker.is_pressed(Direction::Right));
    }
}
