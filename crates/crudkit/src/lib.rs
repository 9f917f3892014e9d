//! ## Crate layout
//! - `core`: property descriptors, values, option bags, assets, observability.
//! - `config`: TOML-backed field defaults and template maps.
//! - `error`: umbrella error for callers touching both.
//!
//! The `prelude` module mirrors the surface a field builder or renderer uses.

pub use crudkit_config as config;
pub use crudkit_core as core;

pub mod error;

#[cfg(test)]
mod tests;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::{CrudConfig, FieldDefaults, TemplateConfig},
        core::{
            prelude::*,
            render::{TemplateResolver, default_text_align, display_label, resolved_sortable},
        },
    };
    pub use serde::Serialize;
}
