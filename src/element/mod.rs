//! Element tree: shared templates, per-viewer instances, and the
//! rebuild driver.
//!
//! This module contains:
//! - [`Kind`]: the node kinds a tree can declare
//! - [`Node`]: the tree-side state builders mutate, with the `add_*`
//!   child declaration helpers
//! - Body types ([`Panel`], [`Label`], [`Button`], [`RawImage`],
//!   [`GameImage`], [`Tabs`], [`Grid`]): the per-kind visual state
//! - [`ViewerCache`]: the viewer-keyed hard/weak instance store

mod cache;
#[allow(clippy::module_inception)]
mod element;
mod instance;

pub use cache::ViewerCache;
pub use element::Kind;
pub use instance::{Button, GameImage, Grid, Label, Node, Panel, RawImage, Render, RenderRoot, Tabs};

pub(crate) use element::Element;
pub(crate) use instance::{Binding, Body, Instance, InstanceRef};
