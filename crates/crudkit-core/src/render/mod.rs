//! Call-site helpers for renderers and field builders.
//!
//! Nothing here mutates a constructed descriptor: defaults are read from
//! config, and templates are resolved into a `PropertyInit` before
//! construction.

mod label;
mod template;


use crate::{
    descriptor::{PropertyDescriptor, TextAlign},
    error::DescriptorError,
};
use crudkit_config::FieldDefaults;

// re-exports
pub use label::{display_label, humanize};
pub use template::TemplateResolver;

/// Tri-state sortable collapsed against the column default.
#[must_use]
pub fn resolved_sortable(descriptor: &PropertyDescriptor, defaults: &FieldDefaults) -> bool {
    descriptor.is_sortable().unwrap_or(defaults.sortable)
}

/// Parse the configured default alignment.
pub fn default_text_align(defaults: &FieldDefaults) -> Result<TextAlign, DescriptorError> {
    defaults.text_align.parse()
}
