//! Conversion of raw records into validated model types.
//!
//! Flags and interpolation names are parsed, addon node IDs are read from
//! numbers or strings, points are checked for three components, and the
//! attachment lists are reduced to a single [`Attachment`].

use lightplacer_core::attachment::Attachment;
use lightplacer_core::controller::{Controller, Interpolation};
use lightplacer_core::data::Data;
use lightplacer_core::entry::Entry;
use lightplacer_core::error::ModelError;
use lightplacer_core::flag::Flags;
use lightplacer_core::id::AddonNodeId;
use lightplacer_core::light::{Light, point};

use crate::schema::{AddonNodeRecord, ControllerRecord, DataRecord, EntryRecord, LightRecord};

/// Build a validated entry from its raw record.
pub fn resolve_entry(record: EntryRecord) -> Result<Entry, ModelError> {
    let lights = record
        .lights
        .into_iter()
        .map(resolve_light)
        .collect::<Result<Vec<_>, _>>()?;

    let addon_nodes = record
        .addon_nodes
        .map(|nodes| {
            nodes
                .into_iter()
                .map(resolve_addon_node)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    let attachment = Attachment::from_lists(addon_nodes, record.models, record.visual_effects)?;

    Entry::new(lights, attachment)
}

fn resolve_addon_node(record: AddonNodeRecord) -> Result<AddonNodeId, ModelError> {
    match record {
        AddonNodeRecord::Number(id) => Ok(AddonNodeId(id)),
        AddonNodeRecord::Text(text) => text
            .trim()
            .parse()
            .map(AddonNodeId)
            .map_err(|_| ModelError::InvalidAddonNode { value: text }),
    }
}

fn resolve_light(record: LightRecord) -> Result<Light, ModelError> {
    let points = record
        .points
        .map(|points| {
            points
                .iter()
                .enumerate()
                .map(|(index, raw)| point(index, raw))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    Ok(Light {
        data: resolve_data(record.data)?,
        black_list: record.black_list,
        nodes: record.nodes,
        points,
        white_list: record.white_list,
    })
}

fn resolve_data(record: DataRecord) -> Result<Data, ModelError> {
    let flags = match record.flags {
        Some(raw) => Flags::parse(&raw)?,
        None => None,
    };

    Ok(Data {
        light: record.light,
        color: record.color,
        color_controller: resolve_controller(record.color_controller)?,
        conditional_nodes: record.conditional_nodes,
        conditions: record.conditions,
        external_emittance: record.external_emittance,
        fade: record.fade,
        fade_controller: resolve_controller(record.fade_controller)?,
        flags,
        fov: record.fov,
        offset: record.offset,
        position_controller: resolve_controller(record.position_controller)?,
        radius: record.radius,
        radius_controller: resolve_controller(record.radius_controller)?,
        rotation: record.rotation,
        rotation_controller: resolve_controller(record.rotation_controller)?,
        shadow_depth_bias: record.shadow_depth_bias,
    })
}

fn resolve_controller<K>(
    record: Option<ControllerRecord<K>>,
) -> Result<Option<Controller<K>>, ModelError> {
    let Some(record) = record else {
        return Ok(None);
    };
    let interpolation = record
        .interpolation
        .as_deref()
        .map(Interpolation::parse)
        .transpose()?;
    Ok(Some(Controller::new(interpolation, record.keys)))
}
