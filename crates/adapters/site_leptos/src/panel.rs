//! Panel switching — the injectable callback behind hybrid nav links.
//!
//! Pages containing switchable panels register a callback; nav links that
//! carry a panel target invoke it. When no page has registered (or the
//! registration was cleared on unmount), switching is a no-op, so a panel
//! link clicked on the wrong page leaves the UI state consistent.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

type PanelCallback = Box<dyn Fn(&str)>;

/// Context owning the optional panel-switch callback.
#[derive(Clone, Default)]
pub struct PanelSwitcher {
    callback: Rc<RefCell<Option<PanelCallback>>>,
}

impl PanelSwitcher {
    /// Register the callback invoked with each panel target.
    ///
    /// Replaces any previous registration.
    pub fn register(&self, callback: impl Fn(&str) + 'static) {
        *self.callback.borrow_mut() = Some(Box::new(callback));
    }

    /// Remove the current registration.
    pub fn clear(&self) {
        *self.callback.borrow_mut() = None;
    }

    /// Invoke the registered callback, if any.
    pub fn switch(&self, target: &str) {
        if let Some(callback) = self.callback.borrow().as_ref() {
            callback(target);
        }
    }
}

/// Access the panel switcher from Leptos context.
///
/// Must be called within a component tree that has the context provided
/// (the root `App` provides it).
pub fn use_panels() -> PanelSwitcher {
    use_context::<PanelSwitcher>().expect("PanelSwitcher not found in context")
}
