//! Input routing system
//!
//! Turns per-frame device state into events for the active UI root:
//! - Concrete, device-specific transitions (keys, pointer buttons, scroll)
//! - Raw snapshots passed straight through (pointer position, controller state)
//! - Device-independent abstract events (directions, confirm/cancel, tab, paging)
//!
//! # Architecture
//!
//! ```text
//! Raw Input (winit, gamepad backend) → InputCollector → InputSnapshot
//!                                                           ↓
//!                                                      InputRouter
//!                              (passthrough → keyboard → pointer → abstract)
//!                                                           ↓
//!                                               UiHost::active_root() → UiRoot
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut router = InputRouter::from_config(&RouterConfig::load_from_env()?);
//!
//! // In window_event()
//! collector.handle_window_event(&event);
//!
//! // Once per update tick
//! let snapshot = collector.snapshot(delta_time);
//! router.update(&snapshot, &mut host);
//! ```

mod abstract_input;
mod classifier;
mod collector;
mod events;
mod forwarder;
mod keyboard;
mod passthrough;
mod pointer;
mod repeat;
mod root;
mod router;
mod state;
mod tracker;

// Re-export public API
pub use abstract_input::AbstractForwarder;
pub use classifier::{DeviceClassifier, SemanticInput};
pub use collector::{InputCollector, InputError};
pub use events::{
    AbstractButton, ControllerButton, Direction, InputEvent, KeyCode, PointerButton, Transition,
};
pub use forwarder::{Forwarder, FrameContext};
pub use keyboard::KeyboardForwarder;
pub use passthrough::PassthroughForwarder;
pub use pointer::{NoPointer, PointerForwarder, PointerSource, SystemPointer};
pub use repeat::{RepeatPolicy, RepeatTimer};
pub use root::{EventLog, UiHost, UiRoot};
pub use router::InputRouter;
pub use state::{ControllerState, InputSnapshot, KeyboardState, MAX_CONTROLLERS, PointerState};
pub use tracker::{EdgeTracker, TrackedInput};
