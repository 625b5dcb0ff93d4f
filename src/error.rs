//! Error types for rebuild and serialization failures.
//!
//! Structural contract violations abort the offending subtree's rebuild.
//! In debug builds they are additionally fatal (`debug_assert!`) so a
//! malformed UI definition surfaces at its first build; in release builds
//! they are logged and rejected without touching other viewers or
//! sibling subtrees.

use thiserror::Error;

use crate::element::Kind;
use crate::ui::ViewerId;

/// Errors raised while rebuilding or serializing an element tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The number of declared children changed after the first build.
    #[error("child count changed after initialization ({recorded} => {declared})")]
    ChildShapeChanged {
        /// Child count recorded by the first build.
        recorded: usize,
        /// Child count declared by the offending rebuild.
        declared: usize,
    },

    /// A child at an existing position was re-declared with another kind.
    #[error("child kind changed after initialization ({expected:?} => {declared:?})")]
    ChildKindChanged {
        /// Kind recorded by the first build.
        expected: Kind,
        /// Kind declared by the offending rebuild.
        declared: Kind,
    },

    /// A node has neither a live parent instance nor an external anchor.
    #[error("element instance {id} has no parent and no anchor")]
    MissingParent {
        /// Id of the malformed instance.
        id: String,
    },

    /// No live instance exists for the viewer; the UI was never opened
    /// (or has already been reclaimed) for them.
    #[error("no live instance for viewer {viewer:?}")]
    NotOpen {
        /// The viewer whose lookup missed.
        viewer: ViewerId,
    },
}
