//! Registry: weak tracking of every live UI for host-wide sweeps.
//!
//! Hosts typically keep one registry and register each UI they create.
//! The registry never keeps a UI alive; dead entries are pruned on
//! enumeration. Unload hooks use [`Registry::close_all`] and disconnect
//! hooks use [`Registry::clear_viewer`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::settings::ViewerId;
use super::Ui;

/// A weak collection of every registered [`Ui`].
#[derive(Default)]
pub struct Registry {
    uis: RefCell<Vec<Weak<Ui>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a UI without keeping it alive.
    pub fn register(&self, ui: &Rc<Ui>) {
        self.uis.borrow_mut().push(Rc::downgrade(ui));
    }

    /// All live UIs, pruning entries whose UI has been dropped.
    pub fn uis(&self) -> Vec<Rc<Ui>> {
        let mut live = Vec::new();
        self.uis.borrow_mut().retain(|entry| match entry.upgrade() {
            Some(ui) => {
                live.push(ui);
                true
            }
            None => false,
        });
        live
    }

    /// Close every UI for every viewer it is materialized for.
    ///
    /// Returns the (viewer, root id) destroy commands the host must
    /// issue to the display surface.
    pub fn close_all(&self) -> Vec<(ViewerId, String)> {
        self.uis().iter().flat_map(|ui| ui.close_all()).collect()
    }

    /// Drop all stored state for `viewer` in every UI (disconnect hook).
    pub fn clear_viewer(&self, viewer: ViewerId) {
        for ui in self.uis() {
            ui.clear(viewer);
        }
    }
}
