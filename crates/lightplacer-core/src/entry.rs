//! The unit of attachment: a set of lights bound to targets of one kind.

use serde::Serialize;

use crate::attachment::{Attachment, AttachmentItem, AttachmentKind};
use crate::error::ModelError;
use crate::light::Light;

/// One placement entry.
///
/// Construct with [`Entry::new`], which validates every light and checks
/// that model-attached lights say where on the model they go.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    lights: Vec<Light>,
    #[serde(flatten)]
    attachment: Attachment,
}

impl Entry {
    pub fn new(lights: Vec<Light>, attachment: Attachment) -> Result<Self, ModelError> {
        if lights.is_empty() {
            return Err(ModelError::EmptyLights);
        }
        let lights = lights
            .into_iter()
            .map(Light::validated)
            .collect::<Result<Vec<_>, _>>()?;

        if attachment.kind() == AttachmentKind::Models {
            if let Some(index) = lights.iter().position(|l| !l.has_placement()) {
                return Err(ModelError::MissingPlacement { light: index });
            }
        }

        Ok(Self { lights, attachment })
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    pub fn kind(&self) -> AttachmentKind {
        self.attachment.kind()
    }

    /// True when both entries carry identical lights, whatever they attach to.
    pub fn merges_with(&self, other: &Entry) -> bool {
        self.lights == other.lights
    }

    /// Split into one entry per attachment target, each with a copy of the
    /// lights.
    pub fn expand(&self) -> Vec<Entry> {
        self.attachment
            .items()
            .into_iter()
            .map(|item| self.with_target(item))
            .collect()
    }

    /// The identity of a canonical entry: its first (only) target.
    pub fn target(&self) -> Option<AttachmentItem> {
        self.attachment.first()
    }

    pub(crate) fn with_target(&self, item: AttachmentItem) -> Entry {
        Entry {
            lights: self.lights.clone(),
            attachment: item.into(),
        }
    }

    pub(crate) fn absorb(&mut self, other: Entry) {
        debug_assert!(self.merges_with(&other), "absorbed entry has different lights");
        self.attachment.absorb(other.attachment);
    }
}
