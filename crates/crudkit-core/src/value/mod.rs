mod convert;
mod wire;

#[cfg(test)]
mod tests;

use derive_more::Display;
use serde::Serialize;
use time::{Date, OffsetDateTime};
use ulid::Ulid;

// re-exports
pub use convert::FromValue;

///
/// ValueKind
///
/// Discriminant of a `Value`, used in diagnostics and typed extraction.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ValueKind {
    #[display("bool")]
    Bool,
    #[display("date")]
    Date,
    #[display("float")]
    Float64,
    #[display("int")]
    Int,
    #[display("list")]
    List,
    #[display("map")]
    Map,
    #[display("null")]
    Null,
    #[display("ref")]
    Ref,
    #[display("text")]
    Text,
    #[display("timestamp")]
    Timestamp,
    #[display("uint")]
    Uint,
    #[display("ulid")]
    Ulid,
}

///
/// EntityRef
///
/// Pointer to a related entity instance, as held by association fields.
///

#[derive(Clone, Debug, PartialEq)]
pub struct EntityRef {
    pub entity: String,
    pub key: Box<Value>,
}

impl EntityRef {
    #[must_use]
    pub fn new(entity: impl Into<String>, key: impl Into<Value>) -> Self {
        Self {
            entity: entity.into(),
            key: Box::new(key.into()),
        }
    }
}

///
/// Value
///
/// Heterogeneous field value read from an entity instance or prepared for display.
///
/// Null → the property holds no value.
/// Map  → entries keep the order they were produced in.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    Bool(bool),
    Date(Date),
    /// Non-finite floats (NaN, ±inf) render as `null`.
    Float64(f64),
    Int(i64),
    /// Ordered list of values (to-many associations, array fields).
    List(Vec<Self>),
    Map(Vec<(String, Self)>),
    #[default]
    Null,
    Ref(EntityRef),
    Text(String),
    Timestamp(OffsetDateTime),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Date(_) => ValueKind::Date,
            Self::Float64(_) => ValueKind::Float64,
            Self::Int(_) => ValueKind::Int,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
            Self::Null => ValueKind::Null,
            Self::Ref(_) => ValueKind::Ref,
            Self::Text(_) => ValueKind::Text,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Uint(_) => ValueKind::Uint,
            Self::Ulid(_) => ValueKind::Ulid,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Float64(_) | Self::Int(_) | Self::Uint(_))
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed view; `Uint` values are accepted when they fit.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Uint(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Unsigned view; non-negative `Int` values are accepted.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint(u) => Some(*u),
            Self::Int(i) => u64::try_from(*i).ok(),
            _ => None,
        }
    }

    // lossy for integers beyond 2^53
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            Self::Uint(u) => Some(*u as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_entity_ref(&self) -> Option<&EntityRef> {
        match self {
            Self::Ref(r) => Some(r),
            _ => None,
        }
    }

    /// Look up an entry of a `Map` value by key.
    #[must_use]
    pub fn map_get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}
