//! A single light instance within an entry.

use serde::Serialize;

use crate::data::Data;
use crate::error::ModelError;
use crate::scalar::{Scalar, require_finite};

/// A model-space coordinate `[x, y, z]`.
pub type Point = [Scalar; 3];

/// One light with its data and optional placement filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Light {
    pub data: Data,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_list: Option<Vec<String>>,
}

impl Light {
    pub fn new(data: Data) -> Self {
        Self {
            data,
            black_list: None,
            nodes: None,
            points: None,
            white_list: None,
        }
    }

    /// Canonicalize filters and points, and validate the nested data.
    ///
    /// Black/white list names are lowercased and sorted; points are sorted by
    /// `(x, y, z)`.
    pub fn validated(mut self) -> Result<Self, ModelError> {
        self.data = self.data.validated()?;

        for list in [self.black_list.as_mut(), self.white_list.as_mut()]
            .into_iter()
            .flatten()
        {
            for name in list.iter_mut() {
                *name = name.to_lowercase();
            }
            list.sort();
        }

        if let Some(points) = self.points.as_mut() {
            points.sort();
        }

        Ok(self)
    }

    /// True when the light says where on a model it goes.
    pub fn has_placement(&self) -> bool {
        self.points.as_ref().is_some_and(|p| !p.is_empty())
            || self.nodes.as_ref().is_some_and(|n| !n.is_empty())
    }
}

/// Convert raw coordinates into a [`Point`], requiring exactly three finite
/// components.
pub fn point(index: usize, raw: &[Scalar]) -> Result<Point, ModelError> {
    require_finite("points", raw.iter().copied())?;
    match raw {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(ModelError::MalformedPoint {
            index,
            len: raw.len(),
        }),
    }
}
