//! Single-slot consumer callbacks for pick and post-render events.
//!
//! Each slot holds at most one subscriber; registering again replaces the
//! previous one. Consumers that need fan-out wrap their own dispatcher in
//! the single callback.

use crate::picking::PickEvent;

/// Callback invoked with each pick event.
pub type PickCallback = Box<dyn FnMut(&PickEvent)>;
/// Callback invoked once per rendered frame.
pub type PostRenderCallback = Box<dyn FnMut(RenderTag)>;

/// Tells a post-render subscriber how it was wired up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTag {
    /// The rig registered the subscriber itself at construction.
    AutoRegistered,
    /// The host registered the subscriber manually.
    Manual,
}

impl RenderTag {
    /// Integer code passed to legacy render hooks (1 = auto, 2 = manual).
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::AutoRegistered => 1,
            Self::Manual => 2,
        }
    }
}

/// The two callback slots.
#[derive(Default)]
pub struct CallbackRegistry {
    pick: Option<PickCallback>,
    post_render: Option<PostRenderCallback>,
}

impl CallbackRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the pick callback, replacing any previous one.
    pub fn register_pick(
        &mut self,
        callback: impl FnMut(&PickEvent) + 'static,
    ) {
        if self.pick.replace(Box::new(callback)).is_some() {
            log::debug!("pick callback replaced");
        } else {
            log::debug!("pick callback registered");
        }
    }

    /// Install the post-render callback, replacing any previous one.
    pub fn register_post_render(
        &mut self,
        callback: impl FnMut(RenderTag) + 'static,
    ) {
        if self.post_render.replace(Box::new(callback)).is_some() {
            log::debug!("post-render callback replaced");
        } else {
            log::debug!("post-render callback registered");
        }
    }

    /// Remove the pick callback.
    pub fn clear_pick(&mut self) {
        self.pick = None;
    }

    /// Remove the post-render callback.
    pub fn clear_post_render(&mut self) {
        self.post_render = None;
    }

    /// Whether a pick callback is installed.
    #[must_use]
    pub fn has_pick(&self) -> bool {
        self.pick.is_some()
    }

    /// Whether a post-render callback is installed.
    #[must_use]
    pub fn has_post_render(&self) -> bool {
        self.post_render.is_some()
    }

    /// Invoke the pick callback, if any.
    pub fn emit_pick(&mut self, event: &PickEvent) {
        if let Some(callback) = self.pick.as_mut() {
            callback(event);
        }
    }

    /// Invoke the post-render callback, if any.
    pub fn emit_post_render(&mut self, tag: RenderTag) {
        if let Some(callback) = self.post_render.as_mut() {
            callback(tag);
        }
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("pick", &self.has_pick())
            .field("post_render", &self.has_post_render())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::picking::RaycastHit;

    fn event() -> PickEvent {
        PickEvent {
            hit: RaycastHit {
                point: Vec3::ONE,
                normal: Vec3::Y,
                distance: 3.0,
                object: 9,
            },
            selected: false,
        }
    }

    #[test]
    fn last_registration_wins() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = CallbackRegistry::new();

        let first = Rc::clone(&log);
        registry.register_pick(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        registry.register_pick(move |_| second.borrow_mut().push("second"));

        registry.emit_pick(&event());
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn empty_slots_are_no_ops() {
        let mut registry = CallbackRegistry::new();
        registry.emit_pick(&event());
        registry.emit_post_render(RenderTag::Manual);
        assert!(!registry.has_pick());
        assert!(!registry.has_post_render());
    }

    #[test]
    fn post_render_receives_tag_codes() {
        let codes = Rc::new(RefCell::new(Vec::new()));
        let mut registry = CallbackRegistry::new();
        let sink = Rc::clone(&codes);
        registry.register_post_render(move |tag| sink.borrow_mut().push(tag.code()));

        registry.emit_post_render(RenderTag::AutoRegistered);
        registry.emit_post_render(RenderTag::Manual);
        assert_eq!(*codes.borrow(), vec![1, 2]);

        registry.clear_post_render();
        registry.emit_post_render(RenderTag::Manual);
        assert_eq!(codes.borrow().len(), 2);
    }
}
