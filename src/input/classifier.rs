//! Device-independent classification of raw device state
//!
//! Answers "is this semantic input active right now?" by OR-ing every device that can
//! produce it. Holds nothing but the analog threshold, so any forwarder can query it.

use super::events::{AbstractButton, ControllerButton, Direction, KeyCode, PointerButton};
use super::state::InputSnapshot;

/// A semantic input the classifier can answer for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticInput {
    Pointer(PointerButton),
    Direction(Direction),
    Abstract(AbstractButton),
}

impl From<PointerButton> for SemanticInput {
    fn from(button: PointerButton) -> Self {
        Self::Pointer(button)
    }
}

impl From<Direction> for SemanticInput {
    fn from(direction: Direction) -> Self {
        Self::Direction(direction)
    }
}

impl From<AbstractButton> for SemanticInput {
    fn from(button: AbstractButton) -> Self {
        Self::Abstract(button)
    }
}

/// Stateless classifier over one frame's raw device state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceClassifier {
    analog_threshold: f32,
}

impl DeviceClassifier {
    pub const DEFAULT_ANALOG_THRESHOLD: f32 = 0.5;

    /// Creates a classifier; the threshold is clamped into `[0, 1]`
    pub fn new(analog_threshold: f32) -> Self {
        let mut classifier = Self::default();
        classifier.set_analog_threshold(analog_threshold);
        classifier
    }

    /// Minimum stick deflection treated as a digital direction
    pub fn analog_threshold(&self) -> f32 {
        self.analog_threshold
    }

    pub fn set_analog_threshold(&mut self, threshold: f32) {
        self.analog_threshold = if threshold.is_nan() {
            Self::DEFAULT_ANALOG_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
    }

    /// Returns true if `input` is active on any device in `snapshot`
    pub fn is_active(&self, input: impl Into<SemanticInput>, snapshot: &InputSnapshot) -> bool {
        match input.into() {
            SemanticInput::Pointer(button) => snapshot.pointer.is_down(button),
            SemanticInput::Direction(direction) => self.is_direction_active(direction, snapshot),
            SemanticInput::Abstract(button) => is_abstract_active(button, snapshot),
        }
    }

    fn is_direction_active(&self, direction: Direction, snapshot: &InputSnapshot) -> bool {
        let (dpad, key) = match direction {
            Direction::Up => (ControllerButton::DPadUp, KeyCode::Up),
            Direction::Down => (ControllerButton::DPadDown, KeyCode::Down),
            Direction::Left => (ControllerButton::DPadLeft, KeyCode::Left),
            Direction::Right => (ControllerButton::DPadRight, KeyCode::Right),
        };

        snapshot.keyboard.is_down(key)
            || snapshot.connected_controllers().any(|(_, controller)| {
                controller.is_down(dpad)
                    || self.stick_points(controller.left_stick, direction)
                    || self.stick_points(controller.right_stick, direction)
            })
    }

    /// Tests one stick against the threshold, inclusive at the boundary
    fn stick_points(&self, stick: [f32; 2], direction: Direction) -> bool {
        let [x, y] = stick;
        let threshold = self.analog_threshold;
        match direction {
            Direction::Up => y >= threshold,
            Direction::Down => y <= -threshold,
            Direction::Right => x >= threshold,
            Direction::Left => x <= -threshold,
        }
    }
}

impl Default for DeviceClassifier {
    fn default() -> Self {
        Self {
            analog_threshold: Self::DEFAULT_ANALOG_THRESHOLD,
        }
    }
}

fn is_abstract_active(button: AbstractButton, snapshot: &InputSnapshot) -> bool {
    let keyboard = &snapshot.keyboard;
    let any_controller =
        |b: ControllerButton| snapshot.connected_controllers().any(|(_, c)| c.is_down(b));

    match button {
        AbstractButton::Tab => keyboard.is_down(KeyCode::Tab) && !keyboard.shift_held(),
        AbstractButton::ShiftTab => keyboard.is_down(KeyCode::Tab) && keyboard.shift_held(),
        AbstractButton::Affirm => {
            any_controller(ControllerButton::A)
                || keyboard.is_down(KeyCode::Enter)
                || keyboard.is_down(KeyCode::NumpadEnter)
        }
        AbstractButton::Cancel => {
            any_controller(ControllerButton::B) || keyboard.is_down(KeyCode::Escape)
        }
        AbstractButton::NextPage => {
            any_controller(ControllerButton::RightShoulder) || keyboard.is_down(KeyCode::PageDown)
        }
        AbstractButton::PreviousPage => {
            any_controller(ControllerButton::LeftShoulder) || keyboard.is_down(KeyCode::PageUp)
        }
    }
}
