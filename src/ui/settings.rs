//! Per-viewer display settings.
//!
//! The engine consumes exactly two scalars per viewer: the screen aspect
//! ratio and a render scale. Both feed into root bounding-box resolution
//! and nothing else. [`ScreenStore`] holds them with configurable
//! defaults and serde support so the host can persist them; actual file
//! IO stays with the host.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one viewer (a connected player or session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewerId(pub u64);

/// A viewer's physical display settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    /// Screen width divided by height.
    pub aspect_ratio: f64,
    /// Uniform scale applied to root boxes.
    pub render_scale: f64,
}

impl Default for Screen {
    fn default() -> Self {
        Self { aspect_ratio: 16.0 / 9.0, render_scale: 1.0 }
    }
}

/// A viewer identity together with its display settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewer {
    /// The viewer's identifier.
    pub id: ViewerId,
    /// The viewer's display settings.
    pub screen: Screen,
}

impl Viewer {
    /// Create a viewer with default screen settings.
    pub fn new(id: ViewerId) -> Self {
        Self { id, screen: Screen::default() }
    }

    /// Create a viewer with explicit screen settings.
    pub const fn with_screen(id: ViewerId, screen: Screen) -> Self {
        Self { id, screen }
    }
}

/// Store of per-viewer screen settings with configurable defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenStore {
    /// Settings used for viewers without an override.
    #[serde(default)]
    pub defaults: Screen,
    #[serde(default)]
    viewers: HashMap<ViewerId, Screen>,
}

impl ScreenStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings for `viewer`, falling back to the defaults.
    pub fn screen(&self, viewer: ViewerId) -> Screen {
        self.viewers.get(&viewer).copied().unwrap_or(self.defaults)
    }

    /// The [`Viewer`] handle used to open UIs for `id`.
    pub fn viewer(&self, id: ViewerId) -> Viewer {
        Viewer::with_screen(id, self.screen(id))
    }

    /// Override the aspect ratio for one viewer.
    pub fn set_aspect_ratio(&mut self, viewer: ViewerId, value: f64) {
        self.entry(viewer).aspect_ratio = value;
    }

    /// Override the render scale for one viewer.
    pub fn set_render_scale(&mut self, viewer: ViewerId, value: f64) {
        self.entry(viewer).render_scale = value;
    }

    /// Drop a viewer's override, reverting them to the defaults.
    pub fn remove(&mut self, viewer: ViewerId) {
        self.viewers.remove(&viewer);
    }

    fn entry(&mut self, viewer: ViewerId) -> &mut Screen {
        self.viewers.entry(viewer).or_insert(self.defaults)
    }
}
