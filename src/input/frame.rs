use glam::Vec2;
use rustc_hash::FxHashSet;

use super::action::Action;

/// Everything the rig reads from the host in one frame.
///
/// Built by [`InputProcessor::frame`](super::InputProcessor::frame) from
/// window events, or directly by hosts that poll their input devices:
///
/// ```ignore
/// let input = FrameInput::new(Vec2::new(1280.0, 720.0), dt)
///     .with_pointer(cursor)
///     .with_scroll(wheel)
///     .with_pressed(Action::Rotate);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    /// Cursor position in physical pixels, top-left origin.
    pub pointer: Vec2,
    /// Scroll delta accumulated this frame, in lines (positive = zoom in).
    pub scroll: f32,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Viewport size in physical pixels.
    pub viewport: Vec2,
    pressed: FxHashSet<Action>,
    released: FxHashSet<Action>,
    held: FxHashSet<Action>,
}

impl FrameInput {
    /// An idle frame: no buttons, no scroll, pointer at the origin.
    #[must_use]
    pub fn new(viewport: Vec2, delta_time: f32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            scroll: 0.0,
            delta_time,
            viewport,
            pressed: FxHashSet::default(),
            released: FxHashSet::default(),
            held: FxHashSet::default(),
        }
    }

    pub(crate) fn from_parts(
        pointer: Vec2,
        scroll: f32,
        delta_time: f32,
        viewport: Vec2,
        edges: [&FxHashSet<Action>; 3],
    ) -> Self {
        let [pressed, released, held] = edges;
        Self {
            pointer,
            scroll,
            delta_time,
            viewport,
            pressed: pressed.clone(),
            released: released.clone(),
            held: held.clone(),
        }
    }

    /// Set the pointer position.
    #[must_use]
    pub fn with_pointer(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }

    /// Set the scroll delta.
    #[must_use]
    pub fn with_scroll(mut self, scroll: f32) -> Self {
        self.scroll = scroll;
        self
    }

    /// Mark `action` as pressed this frame (and therefore held).
    #[must_use]
    pub fn with_pressed(mut self, action: Action) -> Self {
        let _ = self.pressed.insert(action);
        let _ = self.held.insert(action);
        self
    }

    /// Mark `action` as held without a press edge.
    #[must_use]
    pub fn with_held(mut self, action: Action) -> Self {
        let _ = self.held.insert(action);
        self
    }

    /// Mark `action` as released this frame.
    #[must_use]
    pub fn with_released(mut self, action: Action) -> Self {
        let _ = self.released.insert(action);
        let _ = self.held.remove(&action);
        self
    }

    /// Whether `action` went down this frame.
    #[must_use]
    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Whether `action` went up this frame.
    #[must_use]
    pub fn released(&self, action: Action) -> bool {
        self.released.contains(&action)
    }

    /// Whether `action` is down at the end of this frame.
    #[must_use]
    pub fn held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}
