//! Numeric values carried by light data.
//!
//! Config files mix integers and floats freely (`"radius": 100` next to
//! `"fade": 0.75`). Everything is held as `f64`, but equality, hashing and
//! ordering go through a canonical bit pattern so scalars can live inside
//! hashed keys, and integral values render without a fractional part.

use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ModelError;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A number from a light config file.
#[derive(Clone, Copy, Default, Deserialize)]
#[serde(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// True when the value has no fractional part and fits an `i64` exactly.
    pub fn is_integral(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INT
    }

    /// Bit pattern used for equality and hashing. Folds `-0.0` into `0.0`.
    fn canonical_bits(self) -> u64 {
        if self.0 == 0.0 {
            0.0f64.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

/// Reject `inf` and `NaN`, which have no representation in the output.
pub fn require_finite(
    field: &'static str,
    values: impl IntoIterator<Item = Scalar>,
) -> Result<(), ModelError> {
    if values.into_iter().all(Scalar::is_finite) {
        Ok(())
    } else {
        Err(ModelError::NonFiniteNumber { field })
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar(f64::from(v))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else {
            self.0.total_cmp(&other.0)
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}
