//! Element: the shared template of one tree position, plus the rebuild
//! driver that walks a viewer's instance tree.
//!
//! An element is created once when the UI is declared and shared across
//! all viewers; per-viewer state lives in the instances held by the
//! element's [`ViewerCache`]. The driver visits nodes depth-first in
//! pre-order, so a parent's visual state is always enqueued before its
//! children; the display surface requires attach-before-children.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::error;
use uuid::Uuid;

use crate::error::UiError;
use crate::ui::ViewerId;

use super::cache::ViewerCache;
use super::instance::{Binding, Instance, InstanceRef};

/// The kind of visual node an element materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The top-level panel attached to an external anchor.
    Root,
    /// A generic container panel.
    Panel,
    /// A text label.
    Label,
    /// A pressable text button.
    Button,
    /// A URL-addressed image.
    RawImage,
    /// A game-asset image.
    GameImage,
    /// A panel of auto-positioned tab buttons.
    Tabs,
    /// A panel of auto-positioned grid cells.
    Grid,
}

/// Where an element attaches: another element, or a named anchor on the
/// display surface. Exactly one of the two, never both.
pub(crate) enum ParentLink {
    Element(Weak<Element>),
    Anchor(String),
}

/// The immutable template of one tree position, shared across viewers.
pub(crate) struct Element {
    /// Stable identity, for diagnostics; wire records carry instance ids.
    id: Uuid,
    kind: Kind,
    parent: ParentLink,
    cache: RefCell<ViewerCache<RefCell<Instance>>>,
}

impl Element {
    /// Create a top-level element attached to an external anchor.
    pub(crate) fn root(anchor: String) -> Rc<Self> {
        Rc::new(Self {
            id: Uuid::new_v4(),
            kind: Kind::Root,
            parent: ParentLink::Anchor(anchor),
            cache: RefCell::new(ViewerCache::new()),
        })
    }

    /// Create a child element attached to `parent`.
    pub(crate) fn child(kind: Kind, parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self {
            id: Uuid::new_v4(),
            kind,
            parent: ParentLink::Element(Rc::downgrade(parent)),
            cache: RefCell::new(ViewerCache::new()),
        })
    }

    pub(crate) fn kind(&self) -> Kind {
        self.kind
    }

    pub(crate) fn parent_link(&self) -> &ParentLink {
        &self.parent
    }

    /// The live instance for `viewer`, if any; does not change pin
    /// strength. A miss means "not yet open", never an error.
    pub(crate) fn instance(&self, viewer: ViewerId) -> Option<InstanceRef> {
        self.cache.borrow().get(viewer)
    }

    /// Viewers with a live instance of this element.
    pub(crate) fn viewers(&self) -> Vec<ViewerId> {
        self.cache.borrow().viewers()
    }

    /// Get or create the instance for `viewer`, pin it hard, and bind
    /// `binding` as its builder for the coming pass.
    pub(crate) fn bind(
        self: &Rc<Self>,
        viewer: ViewerId,
        parent: Option<Weak<RefCell<Instance>>>,
        binding: Binding,
    ) -> InstanceRef {
        let mut cache = self.cache.borrow_mut();
        if let Some(existing) = cache.pin(viewer) {
            existing.borrow_mut().binding = binding;
            existing
        } else {
            let instance = Instance::create(self, viewer, parent, binding);
            cache.insert(viewer, Rc::clone(&instance));
            instance
        }
    }

    /// Rebuild this element's instance for `viewer`, depth-first.
    ///
    /// Every instance whose visual state must be re-sent is appended to
    /// `updated` in pre-order. A node is re-sent when its own builder
    /// reported a change, when an ancestor is being redrawn, or when it
    /// was not previously open.
    ///
    /// A structural contract violation rejects this node's subtree;
    /// sibling subtrees and other viewers are unaffected (the caller
    /// logs and continues).
    pub(crate) fn build(
        self: &Rc<Self>,
        viewer: ViewerId,
        updated: &mut Vec<InstanceRef>,
        parent_has_updates: bool,
    ) -> Result<(), UiError> {
        let Some(instance) = self.instance(viewer) else {
            return Err(UiError::NotOpen { viewer });
        };

        instance.borrow_mut().node.cursor = 0;
        let own_changed = instance.borrow_mut().render();

        let (has_updates, visible, children) = {
            let guard = instance.borrow();
            let node = &guard.node;

            // Once initialized, a visible node must re-declare exactly
            // the shape recorded by its first build.
            if node.initialized && node.visible && node.cursor != node.children.len() {
                let err = UiError::ChildShapeChanged {
                    recorded: node.children.len(),
                    declared: node.cursor,
                };
                debug_assert!(false, "{err}");
                return Err(err);
            }

            let has_updates = own_changed || parent_has_updates || !node.open;
            (has_updates, node.visible, node.children.clone())
        };

        if has_updates {
            updated.push(Rc::clone(&instance));
        }

        if visible {
            for child in &children {
                if let Err(err) = child.build(viewer, updated, has_updates) {
                    error!(element = %child.id(), kind = ?child.kind(), %err,
                        "rebuild rejected; skipping subtree");
                }
            }
        }

        let mut guard = instance.borrow_mut();
        guard.node.initialized = true;
        guard.node.open = true;
        Ok(())
    }

    /// Mark the subtree closed for `viewer` and release every cache pin,
    /// so the instances become reclaimable.
    pub(crate) fn close_subtree(&self, viewer: ViewerId) {
        if let Some(instance) = self.instance(viewer) {
            let children = {
                let mut guard = instance.borrow_mut();
                guard.node.open = false;
                guard.node.children.clone()
            };
            for child in &children {
                child.close_subtree(viewer);
            }
        }
        self.cache.borrow_mut().release(viewer);
    }

    /// Drop every stored instance for `viewer` in this subtree.
    pub(crate) fn clear_subtree(&self, viewer: ViewerId) {
        if let Some(instance) = self.cache.borrow_mut().remove(viewer) {
            let children = instance.borrow().node.children.clone();
            for child in &children {
                child.clear_subtree(viewer);
            }
        }
    }

    /// Diagnostic identity of this element (not used on the wire).
    pub(crate) fn id(&self) -> Uuid {
        self.id
    }
}
