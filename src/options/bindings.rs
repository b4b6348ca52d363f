use serde::{Deserialize, Serialize};

use crate::input::{Action, Binding, MouseButton};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Which button or key drives each rig action.
pub struct ActionBindings {
    /// Drag-to-orbit button.
    pub rotate: Binding,
    /// Pick-to-focus button.
    pub select: Binding,
    /// Modifier that turns a select click into a focus reset.
    pub modifier: Binding,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self {
            rotate: Binding::Mouse(MouseButton::Left),
            select: Binding::Mouse(MouseButton::Right),
            modifier: Binding::Key("ControlLeft".into()),
        }
    }
}

impl ActionBindings {
    /// The binding for `action`.
    #[must_use]
    pub fn binding(&self, action: Action) -> &Binding {
        match action {
            Action::Rotate => &self.rotate,
            Action::Select => &self.select,
            Action::Modifier => &self.modifier,
        }
    }

    /// Every action bound to `binding`. Several actions may share one
    /// input.
    pub fn actions_for<'a>(
        &'a self,
        binding: &'a Binding,
    ) -> impl Iterator<Item = Action> + 'a {
        Action::ALL
            .into_iter()
            .filter(move |action| self.binding(*action) == binding)
    }
}
