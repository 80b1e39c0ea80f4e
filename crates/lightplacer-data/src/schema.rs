//! Serde structs for the on-disk light placer format.
//!
//! These mirror the raw records exactly as authored: every optional key is an
//! `Option`, flags and interpolation modes are plain strings, and points are
//! unchecked coordinate lists. The loader turns them into validated
//! `lightplacer_core` types.

use lightplacer_core::controller::{ColorKey, PositionKey, RotationKey, ScalarKey};
use lightplacer_core::scalar::Scalar;
use serde::Deserialize;

// ===========================================================================
// Entries
// ===========================================================================

/// One entry as written in a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub lights: Vec<LightRecord>,
    #[serde(default)]
    pub models: Option<Vec<String>>,
    #[serde(default)]
    pub addon_nodes: Option<Vec<AddonNodeRecord>>,
    #[serde(default)]
    pub visual_effects: Option<Vec<String>>,
}

/// An addon node ID, written either as a number or as a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AddonNodeRecord {
    Number(u64),
    Text(String),
}

// ===========================================================================
// Lights
// ===========================================================================

/// One light as written in a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightRecord {
    pub data: DataRecord,
    #[serde(default)]
    pub black_list: Option<Vec<String>>,
    #[serde(default)]
    pub nodes: Option<Vec<String>>,
    #[serde(default)]
    pub points: Option<Vec<Vec<Scalar>>>,
    #[serde(default)]
    pub white_list: Option<Vec<String>>,
}

/// Light parameters as written in a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRecord {
    pub light: String,
    #[serde(default)]
    pub color: Option<Vec<Scalar>>,
    #[serde(default)]
    pub color_controller: Option<ControllerRecord<ColorKey>>,
    #[serde(default)]
    pub conditional_nodes: Option<Vec<String>>,
    #[serde(default)]
    pub conditions: Option<Vec<String>>,
    #[serde(default)]
    pub external_emittance: Option<String>,
    #[serde(default)]
    pub fade: Option<Scalar>,
    #[serde(default)]
    pub fade_controller: Option<ControllerRecord<ScalarKey>>,
    #[serde(default)]
    pub flags: Option<String>,
    #[serde(default)]
    pub fov: Option<Scalar>,
    #[serde(default)]
    pub offset: Option<Vec<Scalar>>,
    #[serde(default)]
    pub position_controller: Option<ControllerRecord<PositionKey>>,
    #[serde(default)]
    pub radius: Option<Scalar>,
    #[serde(default)]
    pub radius_controller: Option<ControllerRecord<ScalarKey>>,
    #[serde(default)]
    pub rotation: Option<Vec<Scalar>>,
    #[serde(default)]
    pub rotation_controller: Option<ControllerRecord<RotationKey>>,
    #[serde(default)]
    pub shadow_depth_bias: Option<Scalar>,
}

/// An animation controller with its interpolation still unparsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "K: Deserialize<'de>"))]
pub struct ControllerRecord<K> {
    #[serde(default)]
    pub interpolation: Option<String>,
    #[serde(default)]
    pub keys: Option<Vec<K>>,
}

// ===========================================================================
// TOML wrapper (TOML does not support top-level arrays)
// ===========================================================================

/// Wrapper for a list of entries in TOML format.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlEntries {
    pub entries: Vec<EntryRecord>,
}

// ===========================================================================
// Tests
// ===========================================================================
