//! Core runtime for crudkit: property descriptors, dynamic field values,
//! option bags, asset requirements, and the render-side helpers that read them.
#![warn(unreachable_pub)]

pub mod asset;
pub mod bag;
pub mod descriptor;
pub mod error;
pub mod obs;
pub mod render;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

// re-exports
pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or resolvers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        asset::Assets,
        bag::ParameterBag,
        descriptor::{PropertyDescriptor, PropertyInit, TextAlign, UniqueId},
        value::{EntityRef, Value, ValueKind},
    };
}
