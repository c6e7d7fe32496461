//! Forwarder trait shared by the per-device routing stages

use super::repeat::RepeatPolicy;
use super::root::UiRoot;
use super::state::InputSnapshot;

/// Everything a forwarder reads for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub snapshot: &'a InputSnapshot,
    pub repeat: &'a RepeatPolicy,
}

impl<'a> FrameContext<'a> {
    pub fn new(snapshot: &'a InputSnapshot, repeat: &'a RepeatPolicy) -> Self {
        Self { snapshot, repeat }
    }

    pub fn delta_time(&self) -> f32 {
        self.snapshot.delta_time
    }
}

/// One routing stage: turns raw device state into events for the active root
///
/// Each forwarder owns its edge and timer state exclusively. When `root` is `None` a
/// forwarder skips its whole pass, so nothing is emitted and nothing is mutated.
pub trait Forwarder {
    /// Name of this forwarder for debugging
    fn name(&self) -> &'static str;

    /// Runs one frame
    fn forward(&mut self, frame: &FrameContext<'_>, root: Option<&mut (dyn UiRoot + '_)>);
}
