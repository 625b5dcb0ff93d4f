//! Layout module: Parent-relative bounding boxes and container layouts.
//!
//! All geometry is fractional: a box is expressed as fractions of its
//! parent's box, and screen-unit values are obtained by composing those
//! fractions up the instance tree (see [`crate::element::Node`]).
//! [`TabStrip`] and [`GridLayout`] are the pure per-index formulas used by
//! the tabs and grid container kinds.

mod bounds;
mod grid;
mod tabs;

pub use bounds::Bounds;
pub use grid::GridLayout;
pub use tabs::TabStrip;
