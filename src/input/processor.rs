//! Folds raw platform events into per-frame input snapshots.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held actions, press/release edges, accumulated scroll) and the action
//! bindings. It is the only thing that sits between raw window events and
//! the controller's per-frame phases.

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::action::{Action, Binding};
use super::event::InputEvent;
use super::frame::FrameInput;
use crate::options::ActionBindings;

/// Converts raw window events into [`FrameInput`] snapshots.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// processor.handle_event(&event);
///
/// // Once per frame:
/// let input = processor.frame(dt, viewport);
/// rig.early_update(&input);
/// rig.late_update(&input, &scene);
/// processor.end_frame();
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    bindings: ActionBindings,
    pointer: Vec2,
    scroll: f32,
    pressed: FxHashSet<Action>,
    released: FxHashSet<Action>,
    held: FxHashSet<Action>,
}

impl InputProcessor {
    /// Create a new processor with default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bindings(ActionBindings::default())
    }

    /// Create a processor with custom bindings.
    #[must_use]
    pub fn with_bindings(bindings: ActionBindings) -> Self {
        Self {
            bindings,
            pointer: Vec2::ZERO,
            scroll: 0.0,
            pressed: FxHashSet::default(),
            released: FxHashSet::default(),
            held: FxHashSet::default(),
        }
    }

    /// Read-only access to the bindings.
    #[must_use]
    pub fn bindings(&self) -> &ActionBindings {
        &self.bindings
    }

    /// Replace the bindings. Held actions are released so nothing stays
    /// stuck down under a binding that no longer exists.
    pub fn set_bindings(&mut self, bindings: ActionBindings) {
        self.bindings = bindings;
        for action in self.held.drain() {
            let _ = self.released.insert(action);
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Process a raw input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer = Vec2::new(*x, *y);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.apply_binding(&Binding::Mouse(*button), *pressed);
            }
            InputEvent::Key { code, pressed } => {
                self.apply_binding(&Binding::Key(code.clone()), *pressed);
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
        }
    }

    /// Track press/release edges for every action bound to `binding`.
    fn apply_binding(&mut self, binding: &Binding, pressed: bool) {
        let actions: Vec<Action> =
            self.bindings.actions_for(binding).collect();
        for action in actions {
            if pressed {
                // Auto-repeat and duplicate presses are not new edges.
                if self.held.insert(action) {
                    let _ = self.pressed.insert(action);
                }
            } else if self.held.remove(&action) {
                let _ = self.released.insert(action);
            }
        }
    }

    /// Snapshot of this frame's input.
    #[must_use]
    pub fn frame(&self, delta_time: f32, viewport: Vec2) -> FrameInput {
        FrameInput::from_parts(
            self.pointer,
            self.scroll,
            delta_time,
            viewport,
            [&self.pressed, &self.released, &self.held],
        )
    }

    /// Clear per-frame edges and scroll. Call after the frame's phases ran.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.scroll = 0.0;
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
