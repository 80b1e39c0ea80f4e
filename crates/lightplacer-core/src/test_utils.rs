//! Shared test helpers for unit tests, integration tests and property tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::attachment::Attachment;
use crate::data::Data;
use crate::entry::Entry;
use crate::flag::{Flag, Flags};
use crate::id::AddonNodeId;
use crate::light::Light;
use crate::scalar::Scalar;

// ===========================================================================
// Lights
// ===========================================================================

/// A light with only its resource set.
pub fn light(name: &str) -> Light {
    Light::new(Data::with_light(name))
}

/// A light placed on a model node, usable in `models` entries.
pub fn placed_light(name: &str) -> Light {
    Light {
        nodes: Some(vec!["AttachLight".to_string()]),
        ..light(name)
    }
}

/// A shadow-casting light with the required depth bias.
pub fn shadow_light(name: &str, bias: f64) -> Light {
    let mut data = Data::with_light(name);
    data.flags = Some([Flag::Shadow].into_iter().collect::<Flags>());
    data.shadow_depth_bias = Some(Scalar(bias));
    Light::new(data)
}

// ===========================================================================
// Entries
// ===========================================================================

pub fn addon_entry(ids: &[u64], lights: Vec<Light>) -> Entry {
    let ids = ids.iter().copied().map(AddonNodeId).collect();
    build(lights, Attachment::from_lists(Some(ids), None, None))
}

pub fn model_entry(paths: &[&str], lights: Vec<Light>) -> Entry {
    let paths = paths.iter().map(|p| p.to_string()).collect();
    build(lights, Attachment::from_lists(None, Some(paths), None))
}

pub fn effect_entry(names: &[&str], lights: Vec<Light>) -> Entry {
    let names = names.iter().map(|n| n.to_string()).collect();
    build(lights, Attachment::from_lists(None, None, Some(names)))
}

fn build(lights: Vec<Light>, attachment: Result<Attachment, crate::ModelError>) -> Entry {
    let attachment = attachment.expect("test attachment should be valid");
    Entry::new(lights, attachment).expect("test entry should be valid")
}
