use crate::value::ValueKind;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BagError(#[from] BagError),

    #[error(transparent)]
    DescriptorError(#[from] DescriptorError),
}

///
/// DescriptorError
///
/// Boundary conditions for descriptor construction inputs and template lookup.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DescriptorError {
    #[error("template path for field '{name}' has not been resolved")]
    TemplateNotResolved { name: String },

    #[error("field '{name}' references unknown template '{template}'")]
    UnknownTemplate { name: String, template: String },

    #[error("invalid text alignment '{0}', expected left, center or right")]
    InvalidTextAlign(String),
}

///
/// BagError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum BagError {
    #[error("option '{key}' expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },
}
