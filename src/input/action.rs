use serde::{Deserialize, Serialize};

use super::event::MouseButton;

/// Rig actions that can be bound to a mouse button or key.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Hold and drag to orbit.
    Rotate,
    /// Click to move the focus to the object under the cursor.
    Select,
    /// Held with select to return the focus to the target.
    Modifier,
}

impl Action {
    /// Every action, in binding-table order.
    pub const ALL: [Self; 3] = [Self::Rotate, Self::Select, Self::Modifier];
}

/// A physical input an [`Action`] is bound to.
///
/// ```toml
/// [bindings]
/// rotate = { mouse = "left" }
/// modifier = { key = "ControlLeft" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    /// A mouse button.
    Mouse(MouseButton),
    /// A key, in `winit::keyboard::KeyCode` debug format.
    Key(String),
}
