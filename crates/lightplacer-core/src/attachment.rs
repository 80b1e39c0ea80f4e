//! What an entry's lights are attached to.
//!
//! An entry targets exactly one kind of object: model paths, addon node IDs,
//! or visual effect names. [`Attachment`] holds the list for that kind;
//! [`AttachmentItem`] is one element of it, used as the identity of a
//! canonical (single-target) entry.

use serde::Serialize;
use std::fmt;

use crate::error::ModelError;
use crate::id::AddonNodeId;

/// The attachment discriminator. Declared in expansion priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttachmentKind {
    AddonNodes,
    Models,
    VisualEffects,
}

impl AttachmentKind {
    /// The config key this kind is read from and written to.
    pub fn key(self) -> &'static str {
        match self {
            AttachmentKind::AddonNodes => "addonNodes",
            AttachmentKind::Models => "models",
            AttachmentKind::VisualEffects => "visualEffects",
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A non-empty list of attachment targets of a single kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Attachment {
    #[serde(rename = "addonNodes")]
    AddonNodes(Vec<AddonNodeId>),
    #[serde(rename = "models")]
    Models(Vec<String>),
    #[serde(rename = "visualEffects")]
    VisualEffects(Vec<String>),
}

impl Attachment {
    /// Pick the single populated list out of the three optional ones.
    ///
    /// Empty lists count as absent. The chosen list is sorted.
    pub fn from_lists(
        addon_nodes: Option<Vec<AddonNodeId>>,
        models: Option<Vec<String>>,
        visual_effects: Option<Vec<String>>,
    ) -> Result<Self, ModelError> {
        let mut populated = Vec::new();
        if let Some(mut ids) = addon_nodes.filter(|v| !v.is_empty()) {
            ids.sort();
            populated.push(Attachment::AddonNodes(ids));
        }
        if let Some(mut paths) = models.filter(|v| !v.is_empty()) {
            paths.sort();
            populated.push(Attachment::Models(paths));
        }
        if let Some(mut names) = visual_effects.filter(|v| !v.is_empty()) {
            names.sort();
            populated.push(Attachment::VisualEffects(names));
        }

        match populated.len() {
            0 => Err(ModelError::NoAttachment),
            1 => Ok(populated.remove(0)),
            _ => Err(ModelError::AmbiguousAttachment {
                kinds: populated.iter().map(Attachment::kind).collect(),
            }),
        }
    }

    pub fn kind(&self) -> AttachmentKind {
        match self {
            Attachment::AddonNodes(_) => AttachmentKind::AddonNodes,
            Attachment::Models(_) => AttachmentKind::Models,
            Attachment::VisualEffects(_) => AttachmentKind::VisualEffects,
        }
    }

    /// The individual targets, in list order.
    pub fn items(&self) -> Vec<AttachmentItem> {
        match self {
            Attachment::AddonNodes(ids) => ids.iter().copied().map(AttachmentItem::AddonNode).collect(),
            Attachment::Models(paths) => paths.iter().cloned().map(AttachmentItem::Model).collect(),
            Attachment::VisualEffects(names) => {
                names.iter().cloned().map(AttachmentItem::VisualEffect).collect()
            }
        }
    }

    /// The first target, which for a canonical entry is its only one.
    pub fn first(&self) -> Option<AttachmentItem> {
        match self {
            Attachment::AddonNodes(ids) => ids.first().copied().map(AttachmentItem::AddonNode),
            Attachment::Models(paths) => paths.first().cloned().map(AttachmentItem::Model),
            Attachment::VisualEffects(names) => {
                names.first().cloned().map(AttachmentItem::VisualEffect)
            }
        }
    }

    /// Append another attachment's targets. Both must be the same kind.
    pub(crate) fn absorb(&mut self, other: Attachment) {
        match (self, other) {
            (Attachment::AddonNodes(ids), Attachment::AddonNodes(more)) => ids.extend(more),
            (Attachment::Models(paths), Attachment::Models(more)) => paths.extend(more),
            (Attachment::VisualEffects(names), Attachment::VisualEffects(more)) => {
                names.extend(more)
            }
            _ => {
                debug_assert!(false, "cannot merge attachments of different kinds");
            }
        }
    }
}

impl From<AttachmentItem> for Attachment {
    fn from(item: AttachmentItem) -> Self {
        match item {
            AttachmentItem::AddonNode(id) => Attachment::AddonNodes(vec![id]),
            AttachmentItem::Model(path) => Attachment::Models(vec![path]),
            AttachmentItem::VisualEffect(name) => Attachment::VisualEffects(vec![name]),
        }
    }
}

/// A single attachment target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttachmentItem {
    AddonNode(AddonNodeId),
    Model(String),
    VisualEffect(String),
}

impl AttachmentItem {
    /// Key for output ordering: addon node ID, then model path ignoring
    /// case, then visual effect name. Missing components sort as `0` or the
    /// empty string. Model paths equal ignoring case fall back to exact
    /// comparison so the order is total.
    pub fn sort_key(&self) -> (AddonNodeId, String, String, String) {
        (
            self.addon_node(),
            self.model().to_lowercase(),
            self.model().to_string(),
            self.visual_effect().to_string(),
        )
    }

    fn addon_node(&self) -> AddonNodeId {
        match self {
            AttachmentItem::AddonNode(id) => *id,
            _ => AddonNodeId::default(),
        }
    }

    fn model(&self) -> &str {
        match self {
            AttachmentItem::Model(path) => path,
            _ => "",
        }
    }

    fn visual_effect(&self) -> &str {
        match self {
            AttachmentItem::VisualEffect(name) => name,
            _ => "",
        }
    }
}

impl fmt::Display for AttachmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentItem::AddonNode(id) => write!(f, "addon node {id}"),
            AttachmentItem::Model(path) => write!(f, "model '{path}'"),
            AttachmentItem::VisualEffect(name) => write!(f, "visual effect '{name}'"),
        }
    }
}
