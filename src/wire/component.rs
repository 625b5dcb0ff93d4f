//! Visual components: the typed bodies of a wire element record.
//!
//! Component shapes and `type` tags follow the display surface's schema.
//! Unset fields are omitted from serialization entirely, keeping each
//! record minimal on the wire.

use std::fmt;

use serde::{Serialize, Serializer};

/// An RGBA color with components in `0..=1`.
///
/// Serialized in the surface's `"r g b a"` string form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from all four components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Text alignment within a label or button, using the surface's anchor names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlign {
    /// Top-left.
    UpperLeft,
    /// Top-center.
    UpperCenter,
    /// Top-right.
    UpperRight,
    /// Middle-left.
    MiddleLeft,
    /// Centered both ways.
    MiddleCenter,
    /// Middle-right.
    MiddleRight,
    /// Bottom-left.
    LowerLeft,
    /// Bottom-center.
    LowerCenter,
    /// Bottom-right.
    LowerRight,
}

/// Image body of a panel or game image.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageComponent {
    /// Sprite asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    /// Material asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Tint color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Inline PNG payload reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    /// Fade-in duration in seconds.
    #[serde(rename = "fadeIn", skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<f64>,
    /// Game item id to render as an icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itemid: Option<i32>,
    /// Skin variant of `itemid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skinid: Option<u64>,
}

/// Raw (URL-addressed) image body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawImageComponent {
    /// Sprite asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    /// Tint color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Material asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Remote image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Inline PNG payload reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    /// Fade-in duration in seconds.
    #[serde(rename = "fadeIn", skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<f64>,
}

/// Text body of a label or button caption.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextComponent {
    /// The text content. Empty text suppresses the whole component.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Font size in points.
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Font asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Alignment within the box.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Fade-in duration in seconds.
    #[serde(rename = "fadeIn", skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<f64>,
}

/// Button body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ButtonComponent {
    /// Command sent to the host when the button is pressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Name of a UI to close when the button is pressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    /// Sprite asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    /// Material asset name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Fade-in duration in seconds.
    #[serde(rename = "fadeIn", skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<f64>,
}

/// Anchor rectangle of a record, produced from [`crate::layout::Bounds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RectTransform {
    /// Bottom-left anchor as a space-separated pair.
    #[serde(rename = "anchorMin")]
    pub anchor_min: String,
    /// Top-right anchor as a space-separated pair.
    #[serde(rename = "anchorMax")]
    pub anchor_max: String,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self { anchor_min: "0 0".to_owned(), anchor_max: "1 1".to_owned() }
    }
}

/// One entry of a record's `components` array, tagged with the surface's
/// component type names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Component {
    /// Panel background / game image.
    #[serde(rename = "UnityEngine.UI.Image")]
    Image(ImageComponent),
    /// URL-addressed image.
    #[serde(rename = "UnityEngine.UI.RawImage")]
    RawImage(RawImageComponent),
    /// Text content.
    #[serde(rename = "UnityEngine.UI.Text")]
    Text(TextComponent),
    /// Pressable button.
    #[serde(rename = "UnityEngine.UI.Button")]
    Button(ButtonComponent),
    /// Anchor rectangle.
    #[serde(rename = "RectTransform")]
    RectTransform(RectTransform),
    /// Capture the viewer's cursor while shown.
    #[serde(rename = "NeedsCursor")]
    NeedsCursor,
    /// Capture the viewer's keyboard while shown.
    #[serde(rename = "NeedsKeyboard")]
    NeedsKeyboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_string_form() {
        let color = Color::rgba(1.0, 0.5, 0.0, 0.25);
        assert_eq!(color.to_string(), "1 0.5 0 0.25");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"1 0.5 0 0.25\"");
    }

    #[test]
    fn test_default_fields_omitted() {
        let json = serde_json::to_string(&Component::Image(ImageComponent::default())).unwrap();
        assert_eq!(json, r#"{"type":"UnityEngine.UI.Image"}"#);

        let json = serde_json::to_string(&Component::Text(TextComponent::default())).unwrap();
        assert_eq!(json, r#"{"type":"UnityEngine.UI.Text"}"#);
    }

    #[test]
    fn test_text_component_fields() {
        let text = TextComponent {
            text: "hello".to_owned(),
            font_size: Some(14),
            align: Some(TextAlign::MiddleCenter),
            ..TextComponent::default()
        };
        let json = serde_json::to_string(&Component::Text(text)).unwrap();
        assert_eq!(
            json,
            r#"{"type":"UnityEngine.UI.Text","text":"hello","fontSize":14,"align":"MiddleCenter"}"#
        );
    }

    #[test]
    fn test_marker_components() {
        assert_eq!(
            serde_json::to_string(&Component::NeedsCursor).unwrap(),
            r#"{"type":"NeedsCursor"}"#
        );
        assert_eq!(
            serde_json::to_string(&Component::NeedsKeyboard).unwrap(),
            r#"{"type":"NeedsKeyboard"}"#
        );
    }

    #[test]
    fn test_rect_transform_anchor_names() {
        let json = serde_json::to_string(&Component::RectTransform(RectTransform::default())).unwrap();
        assert_eq!(json, r#"{"type":"RectTransform","anchorMin":"0 0","anchorMax":"1 1"}"#);
    }
}
