//! Keyframed animation controllers attached to light data.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::ModelError;
use crate::scalar::Scalar;

/// How a controller blends between its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interpolation {
    Cubic,
    Linear,
    Step,
}

impl Interpolation {
    pub fn name(self) -> &'static str {
        match self {
            Interpolation::Cubic => "Cubic",
            Interpolation::Linear => "Linear",
            Interpolation::Step => "Step",
        }
    }

    /// Look up an interpolation mode by name, ignoring ASCII case.
    pub fn parse(token: &str) -> Result<Self, ModelError> {
        [
            Interpolation::Cubic,
            Interpolation::Linear,
            Interpolation::Step,
        ]
        .into_iter()
        .find(|mode| mode.name().eq_ignore_ascii_case(token))
        .ok_or_else(|| ModelError::UnrecognizedInterpolation {
            token: token.to_string(),
        })
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Interpolation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// An animation track: an optional blend mode and an optional key list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Controller<K> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<Interpolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<K>>,
}

impl<K> Controller<K> {
    pub fn new(interpolation: Option<Interpolation>, keys: Option<Vec<K>>) -> Self {
        Self {
            interpolation,
            keys,
        }
    }
}

impl<K: Keyframe> Controller<K> {
    /// Every number held by the controller's keys.
    pub fn numbers(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.keys.iter().flatten().flat_map(K::numbers)
    }
}

// ---------------------------------------------------------------------------
// Key types
// ---------------------------------------------------------------------------

/// Common access to the numbers stored in a keyframe.
pub trait Keyframe {
    fn numbers(&self) -> Vec<Scalar>;
}

/// A blend time or tangent on a keyframe: a single number or a vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tangent {
    Scalar(Scalar),
    Vector(Vec<Scalar>),
}

impl Tangent {
    pub fn values(&self) -> &[Scalar] {
        match self {
            Tangent::Scalar(value) => std::slice::from_ref(value),
            Tangent::Vector(values) => values,
        }
    }
}

fn tangent_numbers<'a>(
    forward: &'a Option<Tangent>,
    backward: &'a Option<Tangent>,
) -> impl Iterator<Item = Scalar> + 'a {
    forward
        .iter()
        .chain(backward)
        .flat_map(|tangent| tangent.values().iter().copied())
}

/// A color keyframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorKey {
    pub time: Scalar,
    pub color: Vec<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<Tangent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward: Option<Tangent>,
}

impl Keyframe for ColorKey {
    fn numbers(&self) -> Vec<Scalar> {
        std::iter::once(self.time)
            .chain(self.color.iter().copied())
            .chain(tangent_numbers(&self.forward, &self.backward))
            .collect()
    }
}

/// A translation keyframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionKey {
    pub time: Scalar,
    pub translation: Vec<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<Tangent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward: Option<Tangent>,
}

impl Keyframe for PositionKey {
    fn numbers(&self) -> Vec<Scalar> {
        std::iter::once(self.time)
            .chain(self.translation.iter().copied())
            .chain(tangent_numbers(&self.forward, &self.backward))
            .collect()
    }
}

/// A rotation keyframe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationKey {
    pub time: Scalar,
    pub rotation: Vec<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<Tangent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward: Option<Tangent>,
}

impl Keyframe for RotationKey {
    fn numbers(&self) -> Vec<Scalar> {
        std::iter::once(self.time)
            .chain(self.rotation.iter().copied())
            .chain(tangent_numbers(&self.forward, &self.backward))
            .collect()
    }
}

/// A keyframe for a single value such as radius or fade.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarKey {
    pub time: Scalar,
    pub value: Scalar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward: Option<Scalar>,
}

impl Keyframe for ScalarKey {
    fn numbers(&self) -> Vec<Scalar> {
        [Some(self.time), Some(self.value), self.forward, self.backward]
            .into_iter()
            .flatten()
            .collect()
    }
}
