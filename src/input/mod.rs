//! Input handling: event types, action bindings, per-frame snapshots and
//! drag tracking.

/// Bindable rig actions.
pub mod action;
/// Rotate-action drag delta tracking.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;
/// Per-frame input snapshot.
pub mod frame;
/// Folds raw events into frame snapshots.
pub mod processor;

pub use action::{Action, Binding};
pub use drag::DragTracker;
pub use event::{InputEvent, MouseButton};
pub use frame::FrameInput;
pub use processor::InputProcessor;
