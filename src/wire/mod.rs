//! Wire module: serialization of updated instances into the payload the
//! display surface consumes.
//!
//! The surface has no notion of incremental updates: every change ships
//! as explicit destroy/create records. [`component`] defines the typed
//! visual bodies; [`payload`] applies the two destroy idioms: a
//! destroy-only record for nodes that went invisible, and a `destroyUi`
//! key spliced into the front of a node being replaced in place.

pub mod component;
pub mod payload;

pub use component::{
    ButtonComponent, Color, Component, ImageComponent, RawImageComponent, RectTransform,
    TextAlign, TextComponent,
};
pub use payload::WireRecord;

pub(crate) use payload::render_payload;
