//! Instance: the per-viewer materialization of an element.
//!
//! One instance exists per (element, viewer) pair. It splits into three
//! parts: [`Node`] carries everything the build driver needs (identity,
//! bounds, visibility, the declared child list and its cursor), the
//! [`Body`] carries the per-kind visual state builders mutate, and the
//! [`Binding`] is the builder closure re-bound on every declaration.
//!
//! Builders receive `(&mut Node, &mut <body>)` and return whether their
//! own visible state changed in a way that forces a re-send independent
//! of structural change.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::error;
use uuid::Uuid;

use crate::error::UiError;
use crate::layout::{Bounds, GridLayout, TabStrip};
use crate::ui::{Screen, Viewer, ViewerId};
use crate::wire::{ButtonComponent, ImageComponent, RawImageComponent, TextComponent};

use super::element::{Element, Kind, ParentLink};

/// Shared handle to an instance.
pub(crate) type InstanceRef = Rc<RefCell<Instance>>;

/// Builder callback for an element body of type `B`.
pub type Render<B> = Rc<dyn Fn(&mut Node, &mut B) -> bool>;

/// Builder callback for the root panel; additionally receives the viewer.
pub type RenderRoot = Rc<dyn Fn(&mut Node, &mut Panel, &Viewer) -> bool>;

/// The builder bound to an instance for the current rebuild pass.
#[derive(Clone)]
pub(crate) enum Binding {
    Root(RenderRoot),
    Panel(Render<Panel>),
    Label(Render<Label>),
    Button(Render<Button>),
    RawImage(Render<RawImage>),
    GameImage(Render<GameImage>),
    Tabs(Render<Tabs>),
    Grid(Render<Grid>),
}

/// Visual state of a panel (the root is a panel too).
#[derive(Debug, Clone, Default)]
pub struct Panel {
    /// Background image.
    pub image: ImageComponent,
    /// Capture the viewer's cursor while this panel is shown.
    pub cursor_enabled: bool,
    /// Capture the viewer's keyboard while this panel is shown.
    pub keyboard_enabled: bool,
}

/// Visual state of a label.
#[derive(Debug, Clone, Default)]
pub struct Label {
    /// The label's text.
    pub text: TextComponent,
}

/// Visual state of a text button.
#[derive(Debug, Clone, Default)]
pub struct Button {
    /// The button body.
    pub button: ButtonComponent,
    /// Caption rendered over the button; empty text renders none.
    pub text: TextComponent,
}

/// Visual state of a raw (URL-addressed) image.
#[derive(Debug, Clone, Default)]
pub struct RawImage {
    /// The image body.
    pub image: RawImageComponent,
}

/// Visual state of a game-asset image.
#[derive(Debug, Clone, Default)]
pub struct GameImage {
    /// The image body.
    pub image: ImageComponent,
}

/// A panel that auto-positions equally sized tab buttons along one axis.
///
/// The tab count is fixed by the first build; declaring a different
/// number of tabs on a later rebuild is a structural contract violation.
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    /// The underlying panel visuals.
    pub panel: Panel,
    /// Lay tabs top-to-bottom instead of left-to-right.
    pub vertical: bool,
    /// Gap between tabs, as a fraction of the strip.
    pub gap: f64,
    /// Cap on each tab's size; `0` means uncapped.
    pub max_button_size: f64,
    /// Tabs recorded by the first build.
    pub(crate) count: usize,
    /// Auto-position index, reset at the start of every pass.
    pub(crate) index: usize,
}

/// A panel that auto-positions `rows x columns` cells.
#[derive(Debug, Clone)]
pub struct Grid {
    /// The underlying panel visuals.
    pub panel: Panel,
    /// Horizontal gap between cells, as a fraction of the grid.
    pub gap_x: f64,
    /// Vertical gap between cells, as a fraction of the grid.
    pub gap_y: f64,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Auto-position index, reset at the start of every pass.
    pub(crate) index: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self { panel: Panel::default(), gap_x: 0.0, gap_y: 0.0, rows: 2, columns: 2, index: 0 }
    }
}

/// Per-kind visual state of an instance.
pub(crate) enum Body {
    Panel(Panel),
    Label(Label),
    Button(Button),
    RawImage(RawImage),
    GameImage(GameImage),
    Tabs(Tabs),
    Grid(Grid),
}

impl Body {
    fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::Root | Kind::Panel => Self::Panel(Panel::default()),
            Kind::Label => Self::Label(Label::default()),
            Kind::Button => Self::Button(Button::default()),
            Kind::RawImage => Self::RawImage(RawImage::default()),
            Kind::GameImage => Self::GameImage(GameImage::default()),
            Kind::Tabs => Self::Tabs(Tabs::default()),
            Kind::Grid => Self::Grid(Grid::default()),
        }
    }
}

/// Tree-side state of an instance: identity, geometry, visibility and
/// the child list declared by the builder.
///
/// Builders mutate `bounds` and `visible` directly and declare children
/// through the `add_*` methods; everything else is driven by the rebuild
/// pass.
pub struct Node {
    pub(crate) id: String,
    pub(crate) viewer: ViewerId,
    pub(crate) element: Weak<Element>,
    pub(crate) parent: Option<Weak<RefCell<Instance>>>,
    pub(crate) me: Weak<RefCell<Instance>>,
    /// Bounding box, relative to the parent's box.
    pub bounds: Bounds,
    /// Hidden nodes are not recursed into and are destroyed on the
    /// surface; their subtree stays cached but logically stale.
    pub visible: bool,
    pub(crate) open: bool,
    pub(crate) initialized: bool,
    pub(crate) children: Vec<Rc<Element>>,
    pub(crate) cursor: usize,
    pub(crate) screen: Option<Screen>,
}

impl Node {
    /// The instance id used on the wire. Stable for the instance's
    /// lifetime; a new id is minted only when the instance is reclaimed
    /// and later re-materialized.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The viewer this instance belongs to.
    pub fn viewer(&self) -> ViewerId {
        self.viewer
    }

    /// Whether this instance is currently part of the materialized tree.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Width as a fraction of the viewer's screen width, composed
    /// through the full parent chain.
    pub fn relative_width(&self) -> f64 {
        self.parent_instance().map_or_else(
            || self.bounds.width() * self.screen.unwrap_or_default().render_scale,
            |parent| self.bounds.width() * parent.borrow().node.relative_width(),
        )
    }

    /// Height in the same screen-width units as [`Self::relative_width`].
    ///
    /// The root divides by the viewer's aspect ratio, converting its
    /// height fraction into the width unit system; everything below then
    /// composes by plain multiplication.
    pub fn relative_height(&self) -> f64 {
        self.parent_instance().map_or_else(
            || {
                let screen = self.screen.unwrap_or_default();
                self.bounds.height() / screen.aspect_ratio * screen.render_scale
            },
            |parent| self.bounds.height() * parent.borrow().node.relative_height(),
        )
    }

    /// On-screen aspect ratio: relative width over relative height.
    pub fn aspect_ratio(&self) -> f64 {
        self.relative_width() / self.relative_height()
    }

    /// The viewer's screen settings, read from the root of this tree.
    pub fn screen(&self) -> Screen {
        self.parent_instance().map_or_else(
            || self.screen.unwrap_or_default(),
            |parent| parent.borrow().node.screen(),
        )
    }

    /// Declare (or re-declare) a child panel for this pass.
    pub fn add_panel(&mut self, builder: impl Fn(&mut Node, &mut Panel) -> bool + 'static) {
        self.declare(Kind::Panel, Binding::Panel(Rc::new(builder)));
    }

    /// Declare (or re-declare) a child label for this pass.
    pub fn add_label(&mut self, builder: impl Fn(&mut Node, &mut Label) -> bool + 'static) {
        self.declare(Kind::Label, Binding::Label(Rc::new(builder)));
    }

    /// Declare (or re-declare) a child button for this pass.
    pub fn add_button(&mut self, builder: impl Fn(&mut Node, &mut Button) -> bool + 'static) {
        self.declare(Kind::Button, Binding::Button(Rc::new(builder)));
    }

    /// Declare (or re-declare) a child raw image for this pass.
    pub fn add_raw_image(&mut self, builder: impl Fn(&mut Node, &mut RawImage) -> bool + 'static) {
        self.declare(Kind::RawImage, Binding::RawImage(Rc::new(builder)));
    }

    /// Declare (or re-declare) a child game image for this pass.
    pub fn add_game_image(&mut self, builder: impl Fn(&mut Node, &mut GameImage) -> bool + 'static) {
        self.declare(Kind::GameImage, Binding::GameImage(Rc::new(builder)));
    }

    /// Declare (or re-declare) a child tab strip for this pass.
    pub fn add_tabs(&mut self, builder: impl Fn(&mut Node, &mut Tabs) -> bool + 'static) {
        self.declare(Kind::Tabs, Binding::Tabs(Rc::new(builder)));
    }

    /// Declare (or re-declare) a child grid for this pass.
    pub fn add_grid(&mut self, builder: impl Fn(&mut Node, &mut Grid) -> bool + 'static) {
        self.declare(Kind::Grid, Binding::Grid(Rc::new(builder)));
    }

    /// Declare a tab button inside a tabs panel.
    ///
    /// The button's bounds are overwritten from the strip's layout before
    /// the given builder runs, so the builder only fills in visuals.
    pub fn add_tab(&mut self, tabs: &mut Tabs, builder: impl Fn(&mut Node, &mut Button) -> bool + 'static) {
        if !self.initialized {
            tabs.count += 1;
        }

        let strip = self.me.clone();
        self.add_button(move |node, button| {
            if let Some(owner) = strip.upgrade() {
                if let Body::Tabs(tabs) = &mut owner.borrow_mut().body {
                    let layout = TabStrip {
                        vertical: tabs.vertical,
                        gap: tabs.gap,
                        max_button_size: tabs.max_button_size,
                        count: tabs.count,
                    };
                    node.bounds = layout.bounds(tabs.index);
                    tabs.index += 1;
                }
            }
            builder(node, button)
        });
    }

    /// Declare a cell panel inside a grid.
    ///
    /// The cell's bounds are overwritten from the grid's layout before
    /// the given builder runs.
    pub fn add_cell(&mut self, _grid: &mut Grid, builder: impl Fn(&mut Node, &mut Panel) -> bool + 'static) {
        let owner = self.me.clone();
        self.add_panel(move |node, panel| {
            if let Some(owner) = owner.upgrade() {
                if let Body::Grid(grid) = &mut owner.borrow_mut().body {
                    let layout = GridLayout {
                        rows: grid.rows,
                        columns: grid.columns,
                        gap_x: grid.gap_x,
                        gap_y: grid.gap_y,
                    };
                    node.bounds = layout.cell(grid.index);
                    grid.index += 1;
                }
            }
            builder(node, panel)
        });
    }

    /// The id this node attaches to on the wire: the parent instance's
    /// id, or the external anchor for top-level nodes.
    pub(crate) fn parent_id(&self) -> Result<String, UiError> {
        if let Some(parent) = self.parent_instance() {
            return Ok(parent.borrow().node.id.clone());
        }
        if let Some(element) = self.element.upgrade() {
            if let ParentLink::Anchor(anchor) = element.parent_link() {
                return Ok(anchor.clone());
            }
        }
        Err(UiError::MissingParent { id: self.id.clone() })
    }

    /// Core declare/rebind mechanism behind all `add_*` helpers.
    ///
    /// Before initialization each call creates a child element and
    /// instance; afterwards it fetches the child at the cursor, verifies
    /// its kind, advances the cursor and re-binds the builder.
    fn declare(&mut self, kind: Kind, binding: Binding) {
        let element = if self.initialized {
            let Some(child) = self.children.get(self.cursor) else {
                debug_assert!(false, "child declared past the shape recorded by the first build");
                error!(id = %self.id, declared = self.cursor + 1, recorded = self.children.len(),
                    "child declared past the recorded shape; ignoring");
                return;
            };
            if child.kind() != kind {
                let err = UiError::ChildKindChanged { expected: child.kind(), declared: kind };
                debug_assert!(false, "{err}");
                error!(id = %self.id, %err, "ignoring re-declared child");
                return;
            }
            self.cursor += 1;
            Rc::clone(child)
        } else {
            let Some(owner) = self.element.upgrade() else {
                error!(id = %self.id, "owning element dropped during build");
                return;
            };
            let child = Element::child(kind, &owner);
            self.children.push(Rc::clone(&child));
            child
        };

        element.bind(self.viewer, Some(self.me.clone()), binding);
    }

    fn parent_instance(&self) -> Option<InstanceRef> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }
}

/// The per-viewer materialization of an element.
pub(crate) struct Instance {
    pub(crate) node: Node,
    pub(crate) body: Body,
    pub(crate) binding: Binding,
}

impl Instance {
    /// Materialize a fresh instance of `element` for `viewer`.
    pub(crate) fn create(
        element: &Rc<Element>,
        viewer: ViewerId,
        parent: Option<Weak<RefCell<Instance>>>,
        binding: Binding,
    ) -> InstanceRef {
        Rc::new_cyclic(|me| {
            RefCell::new(Self {
                node: Node {
                    id: Uuid::new_v4().to_string(),
                    viewer,
                    element: Rc::downgrade(element),
                    parent,
                    me: me.clone(),
                    bounds: Bounds::FULL,
                    visible: true,
                    open: false,
                    initialized: false,
                    children: Vec::new(),
                    cursor: 0,
                    screen: None,
                },
                body: Body::for_kind(element.kind()),
                binding,
            })
        })
    }

    /// Run the bound builder against this instance's node and body.
    /// Returns whether the node's own visible state changed.
    pub(crate) fn render(&mut self) -> bool {
        let binding = self.binding.clone();
        let Self { node, body, .. } = self;
        match (&binding, body) {
            (Binding::Root(builder), Body::Panel(panel)) => {
                let viewer = Viewer::with_screen(node.viewer, node.screen.unwrap_or_default());
                builder(node, panel, &viewer)
            }
            (Binding::Panel(builder), Body::Panel(panel)) => builder(node, panel),
            (Binding::Label(builder), Body::Label(label)) => builder(node, label),
            (Binding::Button(builder), Body::Button(button)) => builder(node, button),
            (Binding::RawImage(builder), Body::RawImage(image)) => builder(node, image),
            (Binding::GameImage(builder), Body::GameImage(image)) => builder(node, image),
            (Binding::Tabs(builder), Body::Tabs(tabs)) => {
                tabs.index = 0;
                builder(node, tabs)
            }
            (Binding::Grid(builder), Body::Grid(grid)) => {
                grid.index = 0;
                builder(node, grid)
            }
            _ => {
                debug_assert!(false, "builder bound to a body of the wrong kind");
                error!(id = %node.id, "builder bound to a body of the wrong kind");
                false
            }
        }
    }
}
