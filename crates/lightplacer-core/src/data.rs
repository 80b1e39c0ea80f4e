//! The parameter set of a single light.

use serde::Serialize;

use crate::controller::{ColorKey, Controller, PositionKey, RotationKey, ScalarKey};
use crate::error::ModelError;
use crate::flag::{Flag, Flags};
use crate::scalar::{Scalar, require_finite};

const FULL_TURN: f64 = 360.0;

/// Visual and behavioral parameters of a light.
///
/// Build the struct with its fields, then call [`Data::validated`] to
/// normalize it and check its invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    /// Identifier of the base light resource.
    pub light: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<Scalar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_controller: Option<Controller<ColorKey>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_nodes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_emittance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_controller: Option<Controller<ScalarKey>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<Flags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fov: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vec<Scalar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_controller: Option<Controller<PositionKey>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_controller: Option<Controller<ScalarKey>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec<Scalar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_controller: Option<Controller<RotationKey>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_depth_bias: Option<Scalar>,
}

impl Data {
    /// Shorthand for data with only the light resource set.
    pub fn with_light(light: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            ..Default::default()
        }
    }

    /// Normalize rotation and enforce the shadow invariant.
    ///
    /// `shadowDepthBias` must be present exactly when the `Shadow` flag is set.
    /// Every number, including controller keys, must be finite.
    pub fn validated(mut self) -> Result<Self, ModelError> {
        self.check_finite()?;

        if let Some(rotation) = self.rotation.as_mut() {
            for angle in rotation.iter_mut() {
                *angle = Scalar(normalize_angle(angle.get()));
            }
        }

        if self.flags.as_ref().is_some_and(Flags::is_empty) {
            self.flags = None;
        }

        let shadow = self
            .flags
            .as_ref()
            .is_some_and(|flags| flags.contains(Flag::Shadow));
        match (shadow, self.shadow_depth_bias.is_some()) {
            (true, false) => Err(ModelError::ShadowWithoutDepthBias),
            (false, true) => Err(ModelError::DepthBiasWithoutShadow),
            _ => Ok(self),
        }
    }
}

impl Data {
    fn check_finite(&self) -> Result<(), ModelError> {
        let values = [
            ("fade", self.fade),
            ("fov", self.fov),
            ("radius", self.radius),
            ("shadowDepthBias", self.shadow_depth_bias),
        ];
        for (field, value) in values {
            require_finite(field, value)?;
        }

        let lists = [
            ("color", &self.color),
            ("offset", &self.offset),
            ("rotation", &self.rotation),
        ];
        for (field, list) in lists {
            require_finite(field, list.iter().flatten().copied())?;
        }

        require_finite(
            "colorController",
            self.color_controller.iter().flat_map(|c| c.numbers()),
        )?;
        require_finite(
            "fadeController",
            self.fade_controller.iter().flat_map(|c| c.numbers()),
        )?;
        require_finite(
            "positionController",
            self.position_controller.iter().flat_map(|c| c.numbers()),
        )?;
        require_finite(
            "radiusController",
            self.radius_controller.iter().flat_map(|c| c.numbers()),
        )?;
        require_finite(
            "rotationController",
            self.rotation_controller.iter().flat_map(|c| c.numbers()),
        )
    }
}

/// Step an angle by whole turns until its magnitude is below 360 degrees.
///
/// The sign is kept: `450` becomes `90`, `-450` becomes `-90`, and `-720`
/// becomes `0`.
pub fn normalize_angle(mut degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    if degrees.abs() >= FULL_TURN {
        degrees %= FULL_TURN;
    }
    // `%` keeps the sign of the dividend, so only -0.0 needs folding.
    if degrees == 0.0 { 0.0 } else { degrees }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shadow_flags() -> Option<Flags> {
        Flags::parse("Shadow").unwrap()
    }

    // -----------------------------------------------------------------------
    // Rotation normalization
    // -----------------------------------------------------------------------

    #[test]
    fn rotation_normalizes_to_smallest_equivalent() {
        let data = Data {
            rotation: Some(vec![450.0.into(), (-720.0).into(), 0.0.into()]),
            ..Data::with_light("torch")
        }
        .validated()
        .unwrap();
        assert_eq!(
            data.rotation.unwrap(),
            vec![Scalar(90.0), Scalar(0.0), Scalar(0.0)]
        );
    }

    #[test]
    fn normalize_angle_keeps_sign() {
        assert_eq!(normalize_angle(-450.0), -90.0);
        assert_eq!(normalize_angle(1080.5), 0.5);
        assert_eq!(normalize_angle(359.0), 359.0);
        assert_eq!(normalize_angle(-359.0), -359.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn normalized_zero_is_positive() {
        assert!(normalize_angle(-720.0).is_sign_positive());
    }

    // -----------------------------------------------------------------------
    // Shadow invariant
    // -----------------------------------------------------------------------

    #[test]
    fn shadow_flag_requires_depth_bias() {
        let result = Data {
            flags: shadow_flags(),
            ..Data::with_light("torch")
        }
        .validated();
        assert_eq!(result, Err(ModelError::ShadowWithoutDepthBias));
    }

    #[test]
    fn depth_bias_requires_shadow_flag() {
        let result = Data {
            shadow_depth_bias: Some(Scalar(0.5)),
            flags: Flags::parse("PortalStrict").unwrap(),
            ..Data::with_light("torch")
        }
        .validated();
        assert_eq!(result, Err(ModelError::DepthBiasWithoutShadow));
    }

    #[test]
    fn depth_bias_without_any_flags_fails() {
        let result = Data {
            shadow_depth_bias: Some(Scalar(0.5)),
            ..Data::with_light("torch")
        }
        .validated();
        assert_eq!(result, Err(ModelError::DepthBiasWithoutShadow));
    }

    #[test]
    fn shadow_with_depth_bias_is_valid() {
        let data = Data {
            flags: shadow_flags(),
            shadow_depth_bias: Some(Scalar(0.25)),
            ..Data::with_light("torch")
        }
        .validated()
        .unwrap();
        assert!(data.flags.unwrap().contains(Flag::Shadow));
    }

    #[test]
    fn empty_flag_set_becomes_absent() {
        let data = Data {
            flags: Some(Flags::default()),
            ..Data::with_light("torch")
        }
        .validated()
        .unwrap();
        assert_eq!(data.flags, None);
    }

    // -----------------------------------------------------------------------
    // Finite numbers
    // -----------------------------------------------------------------------

    #[test]
    fn infinite_radius_fails() {
        let result = Data {
            radius: Some(Scalar(f64::INFINITY)),
            ..Data::with_light("torch")
        }
        .validated();
        assert_eq!(result, Err(ModelError::NonFiniteNumber { field: "radius" }));
    }

    #[test]
    fn nan_in_controller_key_fails() {
        let result = Data {
            fade_controller: Some(Controller::new(
                None,
                Some(vec![ScalarKey {
                    time: Scalar(0.0),
                    value: Scalar(f64::NAN),
                    forward: None,
                    backward: None,
                }]),
            )),
            ..Data::with_light("torch")
        }
        .validated();
        assert_eq!(
            result,
            Err(ModelError::NonFiniteNumber { field: "fadeController" })
        );
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    #[test]
    fn absent_fields_are_not_serialized() {
        let data = Data {
            radius: Some(Scalar(128.0)),
            ..Data::with_light("torch")
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"light": "torch", "radius": 128}));
    }

    #[test]
    fn field_names_are_camel_case() {
        let data = Data {
            flags: shadow_flags(),
            shadow_depth_bias: Some(Scalar(0.5)),
            external_emittance: Some("SkyrimSky".to_string()),
            ..Data::with_light("torch")
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["shadowDepthBias"], 0.5);
        assert_eq!(json["externalEmittance"], "SkyrimSky");
        assert_eq!(json["flags"], "Shadow");
    }
}
