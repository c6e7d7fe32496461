//! Per-frame orchestration of the forwarders

use tracing::{debug, info};

use super::abstract_input::AbstractForwarder;
use super::classifier::DeviceClassifier;
use super::forwarder::{FrameContext, Forwarder};
use super::keyboard::KeyboardForwarder;
use super::passthrough::PassthroughForwarder;
use super::pointer::{PointerForwarder, PointerSource};
use super::repeat::RepeatPolicy;
use super::root::UiHost;
use super::state::InputSnapshot;
use crate::config::RouterConfig;

/// Central input routing system
///
/// Runs Passthrough, Keyboard, Pointer and Abstract forwarders in that order once per
/// frame, delivering everything to the host's active root.
#[derive(Debug)]
pub struct InputRouter {
    repeat: RepeatPolicy,
    passthrough: PassthroughForwarder,
    keyboard: KeyboardForwarder,
    pointer: PointerForwarder,
    abstract_input: AbstractForwarder,
    /// Focus state seen on the previous update, for logging transitions
    was_focused: bool,
}

impl InputRouter {
    /// Creates a router with default timing, threshold and a system pointer
    pub fn new() -> Self {
        Self::with_parts(
            RepeatPolicy::default(),
            DeviceClassifier::default(),
            PointerForwarder::default(),
        )
    }

    /// Creates a router from loaded configuration
    pub fn from_config(config: &RouterConfig) -> Self {
        let router = Self::with_parts(
            config.repeat_policy(),
            config.classifier(),
            PointerForwarder::with_pointer(config.pointer_enabled),
        );
        info!(
            profile = %config.profile,
            initial_delay = router.repeat.initial_delay(),
            repeat_interval = router.repeat.repeat_interval(),
            analog_threshold = router.abstract_input.classifier().analog_threshold(),
            pointer_enabled = config.pointer_enabled,
            "Input router configured"
        );
        router
    }

    /// Creates a router with a custom pointer capability
    pub fn with_pointer_source(source: Box<dyn PointerSource>) -> Self {
        Self::with_parts(
            RepeatPolicy::default(),
            DeviceClassifier::default(),
            PointerForwarder::new(source),
        )
    }

    fn with_parts(
        repeat: RepeatPolicy,
        classifier: DeviceClassifier,
        pointer: PointerForwarder,
    ) -> Self {
        Self {
            repeat,
            passthrough: PassthroughForwarder::new(pointer.source()),
            keyboard: KeyboardForwarder::new(),
            pointer,
            abstract_input: AbstractForwarder::new(classifier),
            was_focused: true,
        }
    }

    /// Routes one frame of input
    ///
    /// Call once per update tick. Nothing runs while the window is unfocused; otherwise the
    /// active root is resolved once and handed to each forwarder in order.
    pub fn update(&mut self, snapshot: &InputSnapshot, host: &mut dyn UiHost) {
        if snapshot.focused != self.was_focused {
            debug!(focused = snapshot.focused, "Window focus changed");
            self.was_focused = snapshot.focused;
        }
        if !snapshot.focused {
            return;
        }

        let frame = FrameContext::new(snapshot, &self.repeat);
        let mut root = host.active_root();

        let forwarders: [&mut dyn Forwarder; 4] = [
            &mut self.passthrough,
            &mut self.keyboard,
            &mut self.pointer,
            &mut self.abstract_input,
        ];
        for forwarder in forwarders {
            forwarder.forward(&frame, root.as_deref_mut());
        }
    }

    pub fn repeat_policy(&self) -> &RepeatPolicy {
        &self.repeat
    }

    /// Mutable access to timing; setters clamp negative durations
    pub fn repeat_policy_mut(&mut self) -> &mut RepeatPolicy {
        &mut self.repeat
    }

    pub fn classifier(&self) -> &DeviceClassifier {
        self.abstract_input.classifier()
    }

    /// Mutable access to the analog threshold; the setter clamps into `[0, 1]`
    pub fn classifier_mut(&mut self) -> &mut DeviceClassifier {
        self.abstract_input.classifier_mut()
    }

    pub fn keyboard(&self) -> &KeyboardForwarder {
        &self.keyboard
    }

    pub fn pointer(&self) -> &PointerForwarder {
        &self.pointer
    }

    pub fn abstract_input(&self) -> &AbstractForwarder {
        &self.abstract_input
    }

    /// Names of the forwarders in the order they run
    pub fn forwarder_names(&self) -> [&'static str; 4] {
        [
            self.passthrough.name(),
            self.keyboard.name(),
            self.pointer.name(),
            self.abstract_input.name(),
        ]
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}
