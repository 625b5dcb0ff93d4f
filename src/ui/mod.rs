//! UI module: the declarative surface wrapping a root element.
//!
//! A [`Ui`] pairs a root element with a builder callback. Opening it for
//! a viewer rebuilds that viewer's instance tree, diffs it against the
//! previously materialized state, and returns the minimal wire payload;
//! the host delivers the payload and issues any destroy commands.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis::{anchor, Ui, Viewer, ViewerId};
//!
//! let ui = Ui::new(anchor::HUD, |node, panel, _viewer| {
//!     node.bounds.set(0.25, 0.25, 0.75, 0.75);
//!     panel.cursor_enabled = true;
//!     node.add_label(|_node, label| {
//!         label.text.text = "Hello".to_owned();
//!         false
//!     });
//!     false
//! });
//!
//! let viewer = Viewer::new(ViewerId(1));
//! if let Some(payload) = ui.open(&viewer)? {
//!     // deliver `payload` to the viewer's display surface
//! }
//! ```

pub mod registry;
pub mod settings;

pub use registry::Registry;
pub use settings::{Screen, ScreenStore, Viewer, ViewerId};

use std::rc::Rc;

use crate::element::{Binding, Element, Node, Panel, RenderRoot};
use crate::error::UiError;
use crate::wire;

/// Named attachment points recognized by the display surface.
///
/// Other values are passed through unchanged; they must correspond to an
/// anchor the surface recognizes.
pub mod anchor {
    /// Above all other layers.
    pub const OVERLAY: &str = "Overlay";
    /// The in-game menu layer.
    pub const HUD_MENU: &str = "Hud.Menu";
    /// The HUD layer.
    pub const HUD: &str = "Hud";
    /// Below the HUD.
    pub const UNDER: &str = "Under";
}

/// A declarative UI: one root element, its builder, and a materialized
/// instance tree per viewer who has opened it.
pub struct Ui {
    root: Rc<Element>,
    builder: RenderRoot,
}

impl Ui {
    /// Create a UI attached to `anchor` (see [`anchor`] for the
    /// well-known names).
    ///
    /// The builder runs once per node per [`Self::open`]; it mutates the
    /// root panel's visual state, declares children, and returns whether
    /// the root's own visible state changed.
    pub fn new(
        anchor: impl Into<String>,
        builder: impl Fn(&mut Node, &mut Panel, &Viewer) -> bool + 'static,
    ) -> Self {
        Self { root: Element::root(anchor.into()), builder: Rc::new(builder) }
    }

    /// Rebuild this UI for `viewer` and serialize the minimal update.
    ///
    /// Returns `Ok(None)` when nothing changed (no transmission needed).
    /// The viewer's screen settings are consumed here, at root
    /// bounding-box resolution, and nowhere else.
    pub fn open(&self, viewer: &Viewer) -> Result<Option<String>, UiError> {
        let root = self.root.bind(viewer.id, None, Binding::Root(Rc::clone(&self.builder)));
        root.borrow_mut().node.screen = Some(viewer.screen);

        let mut updated = Vec::new();
        self.root.build(viewer.id, &mut updated, false)?;
        Ok(wire::render_payload(&updated))
    }

    /// Close this UI for `viewer`.
    ///
    /// Marks the subtree closed and releases its cache pins so the
    /// instances become reclaimable. Returns the root instance id the
    /// host must destroy on the surface (removing the top-level node
    /// removes its children with it), or `None` when the UI was never
    /// open for this viewer.
    pub fn close(&self, viewer: ViewerId) -> Option<String> {
        let root = self.root.instance(viewer)?;
        let id = root.borrow().node.id().to_owned();
        self.root.close_subtree(viewer);
        Some(id)
    }

    /// Close this UI for every viewer it is currently materialized for.
    ///
    /// Returns the (viewer, root id) destroy commands for the host.
    pub fn close_all(&self) -> Vec<(ViewerId, String)> {
        self.root
            .viewers()
            .into_iter()
            .filter_map(|viewer| self.close(viewer).map(|id| (viewer, id)))
            .collect()
    }

    /// Drop every stored instance for `viewer` (e.g. on disconnect).
    pub fn clear(&self, viewer: ViewerId) {
        self.root.clear_subtree(viewer);
    }
}
