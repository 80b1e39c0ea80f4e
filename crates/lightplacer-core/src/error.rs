use crate::attachment::AttachmentKind;

/// Errors raised while constructing entries, lights and light data.
///
/// Construction is fail-fast: the first violated rule is reported and no
/// partially built value is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A `flags` token did not name a known flag.
    #[error("unrecognized flag '{token}'")]
    UnrecognizedFlag { token: String },

    /// A controller `interpolation` did not name a known mode.
    #[error("unrecognized interpolation '{token}'")]
    UnrecognizedInterpolation { token: String },

    /// The `Shadow` flag is set but `shadowDepthBias` is missing.
    #[error("'Shadow' flag present but no 'shadowDepthBias' set")]
    ShadowWithoutDepthBias,

    /// `shadowDepthBias` is set but the `Shadow` flag is missing.
    #[error("'shadowDepthBias' set without 'Shadow' flag")]
    DepthBiasWithoutShadow,

    /// A number was `inf` or `NaN`.
    #[error("'{field}' contains a non-finite number")]
    NonFiniteNumber { field: &'static str },

    /// A point did not have exactly three components.
    #[error("expected point {index} to have 3 components, found {len}")]
    MalformedPoint { index: usize, len: usize },

    /// None of `models`, `addonNodes` or `visualEffects` is populated.
    #[error("entry didn't define models, addonNodes, or visualEffects; one is required")]
    NoAttachment,

    /// More than one attachment list is populated.
    #[error("entry defines more than one attachment kind: {}", join_kinds(.kinds))]
    AmbiguousAttachment { kinds: Vec<AttachmentKind> },

    /// A model-attached light has neither `points` nor `nodes`.
    #[error("light {light} of a models entry defines neither 'points' nor 'nodes'")]
    MissingPlacement { light: usize },

    /// The entry has no lights.
    #[error("entry defines no lights")]
    EmptyLights,

    /// An `addonNodes` item is not a non-negative integer.
    #[error("invalid addon node id '{value}'")]
    InvalidAddonNode { value: String },
}

fn join_kinds(kinds: &[AttachmentKind]) -> String {
    kinds
        .iter()
        .map(|k| k.key())
        .collect::<Vec<_>>()
        .join(", ")
}
