//! Device-independent direction and button events
//!
//! Two state machines run through the [`DeviceClassifier`]: one over the four directions and
//! one over the six abstract buttons. Both follow the keyboard's Pressed / Held / Repeated /
//! Released shape with their own repeat timers.

use super::classifier::DeviceClassifier;
use super::events::{AbstractButton, Direction};
use super::forwarder::{FrameContext, Forwarder};
use super::root::UiRoot;
use super::tracker::EdgeTracker;

/// Buttons classified every frame regardless of Shift
const UNSHIFTED_BUTTONS: [AbstractButton; 4] = [
    AbstractButton::Affirm,
    AbstractButton::Cancel,
    AbstractButton::NextPage,
    AbstractButton::PreviousPage,
];

/// Emits direction and abstract button events
#[derive(Debug, Default)]
pub struct AbstractForwarder {
    classifier: DeviceClassifier,
    directions: EdgeTracker<Direction>,
    buttons: EdgeTracker<AbstractButton>,
}

impl AbstractForwarder {
    pub fn new(classifier: DeviceClassifier) -> Self {
        Self {
            classifier,
            directions: EdgeTracker::new(),
            buttons: EdgeTracker::new(),
        }
    }

    pub fn classifier(&self) -> &DeviceClassifier {
        &self.classifier
    }

    pub fn classifier_mut(&mut self) -> &mut DeviceClassifier {
        &mut self.classifier
    }

    pub fn is_direction_pressed(&self, direction: Direction) -> bool {
        self.directions.is_pressed(direction)
    }

    pub fn is_button_pressed(&self, button: AbstractButton) -> bool {
        self.buttons.is_pressed(button)
    }

    fn forward_directions(&mut self, frame: &FrameContext<'_>, root: &mut dyn UiRoot) {
        for direction in Direction::ALL {
            let active = self.classifier.is_active(direction, frame.snapshot);
            self.directions.update_repeating(
                direction,
                active,
                frame.delta_time(),
                frame.repeat,
                |transition| root.on_direction(transition, direction),
            );
        }
    }

    fn forward_buttons(&mut self, frame: &FrameContext<'_>, root: &mut dyn UiRoot) {
        // Tab and ShiftTab share the Tab key; only one of them is looked at per frame
        let tab = if frame.snapshot.keyboard.shift_held() {
            AbstractButton::ShiftTab
        } else {
            AbstractButton::Tab
        };

        for button in std::iter::once(tab).chain(UNSHIFTED_BUTTONS) {
            let active = self.classifier.is_active(button, frame.snapshot);
            self.buttons.update_repeating(
                button,
                active,
                frame.delta_time(),
                frame.repeat,
                |transition| root.on_abstract_button(transition, button),
            );
        }
    }
}

impl Forwarder for AbstractForwarder {
    fn name(&self) -> &'static str {
        "abstract"
    }

    fn forward(&mut self, frame: &FrameContext<'_>, root: Option<&mut (dyn UiRoot + '_)>) {
        let Some(root) = root else {
            return;
        };

        self.forward_directions(frame, root);
        self.forward_buttons(frame, root);
    }
}
