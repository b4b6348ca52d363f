use glam::Vec2;

use super::action::Action;
use super::frame::FrameInput;

/// Turns rotate-action press/hold/release into a per-frame drag delta.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    dragging: bool,
    previous: Vec2,
    delta: Vec2,
}

impl DragTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The delta produced by the last [`track`](Self::track) call.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Advance one frame and return the drag delta, `previous − current`
    /// in pixels.
    ///
    /// A press only starts a drag below the top `exclusion_band` fraction
    /// of the viewport height.
    pub fn track(&mut self, input: &FrameInput, exclusion_band: f32) -> Vec2 {
        let band_edge = input.viewport.y * exclusion_band;
        if input.pressed(Action::Rotate) && input.pointer.y >= band_edge {
            self.dragging = true;
            self.previous = input.pointer;
        }

        if !self.dragging {
            self.delta = Vec2::ZERO;
        } else if input.released(Action::Rotate) && !input.held(Action::Rotate)
        {
            self.delta = Vec2::ZERO;
            self.dragging = false;
        } else {
            self.delta = self.previous - input.pointer;
            self.previous = input.pointer;
        }
        self.delta
    }

    /// End any drag without producing a delta.
    pub fn cancel(&mut self) {
        self.dragging = false;
        self.delta = Vec2::ZERO;
    }
}
