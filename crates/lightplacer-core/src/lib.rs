//! Light Placer merge core -- canonicalizes and merges light placement entries.
//!
//! Config entries attach one or more lights to game objects identified by a
//! model path, an addon node ID, or a visual effect name. Entries from many
//! files are merged into one deduplicated, deterministically ordered list.
//!
//! # Pipeline
//!
//! [`pipeline::merge`] runs four stages over entries loaded in priority order
//! (earlier files first):
//!
//! 1. **Expand** -- Split each entry into one canonical entry per target.
//! 2. **Deduplicate** -- Keep the first definition of every target.
//! 3. **Sort** -- Order by addon node ID, model path (ignoring case), then
//!    visual effect name.
//! 4. **Collapse** -- Merge entries of the same kind with identical lights
//!    back into multi-target entries.
//!
//! [`render::render`] turns the result into the output document.
//!
//! # Key Types
//!
//! - [`entry::Entry`] -- Lights plus the [`attachment::Attachment`] they bind to.
//! - [`light::Light`] -- One light with its placement filters.
//! - [`data::Data`] -- Light parameters, [`flag::Flags`] and animation
//!   [`controller::Controller`]s.
//! - [`scalar::Scalar`] -- Hashable, totally ordered config number.
//! - [`error::ModelError`] -- Validation failures raised at construction.

pub mod attachment;
pub mod controller;
pub mod data;
pub mod entry;
pub mod error;
pub mod flag;
pub mod id;
pub mod light;
pub mod pipeline;
pub mod render;
pub mod scalar;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use attachment::{Attachment, AttachmentItem, AttachmentKind};
pub use entry::Entry;
pub use error::ModelError;
pub use pipeline::merge;
pub use render::render;
