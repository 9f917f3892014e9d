use crate::{
    config::ConfigError,
    core::error::{BagError, DescriptorError, Error as CoreError},
};
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Bag(#[from] BagError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BagError(e) => Self::Bag(e),
            CoreError::DescriptorError(e) => Self::Descriptor(e),
        }
    }
}
