use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// folds them into a per-frame [`FrameInput`](super::FrameInput) snapshot.
///
/// # Example
///
/// ```ignore
/// processor.handle_event(&InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// processor.handle_event(&InputEvent::Scroll { delta: 1.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position (top-left origin).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key name in `winit::keyboard::KeyCode` debug format
        /// (`"ControlLeft"`, `"KeyQ"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines (positive = zoom in, negative = zoom out).
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any further button, by platform index.
    Other(u16),
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(index) => Self::Other(index),
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Translate a winit window event, if it carries input the rig uses.
    ///
    /// Key repeats are dropped; pixel scroll deltas are scaled to roughly
    /// one line per 100 pixels.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                Some(Self::from_scroll_delta(*delta))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                Self::from_key(event.physical_key, event.state, event.repeat)
            }
            _ => None,
        }
    }

    /// Wheel lines pass through; pixel deltas are scaled by 0.01.
    fn from_scroll_delta(delta: winit::event::MouseScrollDelta) -> Self {
        use winit::event::MouseScrollDelta;

        let delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
        };
        Self::Scroll { delta }
    }

    fn from_key(
        key: winit::keyboard::PhysicalKey,
        state: winit::event::ElementState,
        repeat: bool,
    ) -> Option<Self> {
        if repeat {
            return None;
        }
        let winit::keyboard::PhysicalKey::Code(code) = key else {
            return None;
        };
        Some(Self::Key {
            code: format!("{code:?}"),
            pressed: state == winit::event::ElementState::Pressed,
        })
    }
}
