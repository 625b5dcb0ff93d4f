//! Payload assembly: minimal destroy/create records for one update pass.
//!
//! Records are emitted in the driver's pre-order, which the surface
//! relies on for attach-before-children. Per instance:
//!
//! - visible and a *root of the update set* (its parent is not itself
//!   being re-sent): full body, prefixed with a `destroyUi` of its own
//!   id so the stale subtree is cleared before the new one attaches;
//! - visible, parent also re-sent: full body only (the parent's destroy
//!   already cleared it);
//! - not visible: a destroy-only record and nothing for its descendants;
//!   the surface removes them together with the node.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, error};

use crate::element::{Body, Instance, InstanceRef, Panel};

use super::component::{Component, RectTransform};

/// One element record of the wire payload.
#[derive(Debug, Clone, Serialize)]
pub struct WireRecord {
    /// Id to destroy before this record attaches. Serialized first: the
    /// surface processes keys in order.
    #[serde(rename = "destroyUi", skip_serializing_if = "Option::is_none")]
    pub destroy_ui: Option<String>,
    /// Instance id on the surface.
    pub name: String,
    /// Parent instance id, or an external anchor for top-level nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Visual body; empty for destroy-only records.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

/// Serialize `updated` into the wire payload.
///
/// Returns `None` when there is nothing to display or remove. Literal
/// `\n` escape sequences are converted to raw newlines, which is what
/// the surface's text renderer expects.
pub(crate) fn render_payload(updated: &[InstanceRef]) -> Option<String> {
    let records = collect_records(updated);
    if records.is_empty() {
        debug!("nothing to display/remove");
        return None;
    }

    match serde_json::to_string(&records) {
        Ok(json) => Some(json.replace("\\n", "\n")),
        Err(err) => {
            error!(%err, "payload serialization failed");
            None
        }
    }
}

/// Build the record list for one update pass.
pub(crate) fn collect_records(updated: &[InstanceRef]) -> Vec<WireRecord> {
    // Ids being re-sent in this pass; a node whose parent is absent from
    // this set is a root of the update.
    let ids: HashSet<String> =
        updated.iter().map(|instance| instance.borrow().node.id().to_owned()).collect();

    let mut records = Vec::new();
    for instance in updated {
        let guard = instance.borrow();
        let id = guard.node.id().to_owned();

        if !guard.node.visible {
            records.push(WireRecord {
                destroy_ui: Some(id.clone()),
                name: id,
                parent: None,
                components: Vec::new(),
            });
            continue;
        }

        let parent = match guard.node.parent_id() {
            Ok(parent) => parent,
            Err(err) => {
                error!(%err, "refusing to serialize malformed node");
                continue;
            }
        };

        let destroy_first = !ids.contains(&parent);
        instance_records(&guard, parent, destroy_first, &mut records);
    }
    records
}

/// Append the records for one visible instance.
fn instance_records(instance: &Instance, parent: String, destroy_first: bool, out: &mut Vec<WireRecord>) {
    let node = &instance.node;
    let rect = Component::RectTransform(node.bounds.rect_transform());

    let mut caption = None;
    let components = match &instance.body {
        Body::Panel(panel) => panel_components(panel, rect),
        Body::Tabs(tabs) => panel_components(&tabs.panel, rect),
        Body::Grid(grid) => panel_components(&grid.panel, rect),
        Body::Label(label) => {
            let mut components = Vec::with_capacity(2);
            if !label.text.text.is_empty() {
                components.push(Component::Text(label.text.clone()));
            }
            components.push(rect);
            components
        }
        Body::Button(button) => {
            if !button.text.text.is_empty() {
                // The caption is a child element filling the button.
                caption = Some(WireRecord {
                    destroy_ui: None,
                    name: format!("{}.text", node.id()),
                    parent: Some(node.id().to_owned()),
                    components: vec![
                        Component::Text(button.text.clone()),
                        Component::RectTransform(RectTransform::default()),
                    ],
                });
            }
            vec![Component::Button(button.button.clone()), rect]
        }
        Body::RawImage(image) => vec![Component::RawImage(image.image.clone()), rect],
        Body::GameImage(image) => vec![Component::Image(image.image.clone()), rect],
    };

    out.push(WireRecord {
        destroy_ui: destroy_first.then(|| node.id().to_owned()),
        name: node.id().to_owned(),
        parent: Some(parent),
        components,
    });
    out.extend(caption);
}

fn panel_components(panel: &Panel, rect: Component) -> Vec<Component> {
    let mut components = vec![Component::Image(panel.image.clone()), rect];
    if panel.cursor_enabled {
        components.push(Component::NeedsCursor);
    }
    if panel.keyboard_enabled {
        components.push(Component::NeedsKeyboard);
    }
    components
}
