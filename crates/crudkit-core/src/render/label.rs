use crate::descriptor::PropertyDescriptor;
use convert_case::{Case, Casing};
use std::borrow::Cow;

/// Caption for a field: the configured label, else the humanized name.
#[must_use]
pub fn display_label(descriptor: &PropertyDescriptor) -> Cow<'_, str> {
    match descriptor.label() {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(humanize(descriptor.name())),
    }
}

// createdAt, created_at -> "Created at"
#[must_use]
pub fn humanize(name: &str) -> String {
    name.to_case(Case::Sentence)
}
