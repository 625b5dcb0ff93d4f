//! Trellis: a retained, declarative UI composition engine for remote
//! display surfaces.
//!
//! A [`Ui`] is declared once as a tree of builder closures. Opening it
//! for a viewer materializes a per-viewer instance tree, re-running the
//! builders against retained state; only the nodes whose state actually
//! changed are serialized, as explicit destroy/create records the remote
//! surface understands.
//!
//! # Architecture
//!
//! - [`ui`]: the [`Ui`] entry point, viewer identity and screen
//!   settings, and the host-wide [`Registry`]
//! - [`element`]: shared element templates, per-viewer instances, and
//!   the rebuild driver
//! - [`layout`]: relative bounding boxes and the tab/grid auto-layouts
//! - [`wire`]: typed visual components and payload assembly
//!
//! # Quick start
//!
//! ```rust,ignore
//! use trellis::{anchor, Ui, Viewer, ViewerId};
//!
//! let ui = Ui::new(anchor::HUD, |node, panel, _viewer| {
//!     node.bounds.set(0.3, 0.3, 0.7, 0.7);
//!     panel.image.color = Some(trellis::Color::BLACK);
//!     node.add_label(|_node, label| {
//!         label.text.text = "Hello, viewer".to_owned();
//!         false
//!     });
//!     false
//! });
//!
//! let payload = ui.open(&Viewer::new(ViewerId(1)))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod element;
pub mod error;
pub mod layout;
pub mod ui;
pub mod wire;

pub use element::{
    Button, GameImage, Grid, Kind, Label, Node, Panel, RawImage, Render, RenderRoot, Tabs,
    ViewerCache,
};
pub use error::UiError;
pub use layout::{Bounds, GridLayout, TabStrip};
pub use ui::{anchor, Registry, Screen, ScreenStore, Ui, Viewer, ViewerId};
pub use wire::{
    ButtonComponent, Color, Component, ImageComponent, RawImageComponent, RectTransform,
    TextAlign, TextComponent, WireRecord,
};
