//! Render-context encoding for `Value`.
//!
//! Values serialize untagged so template engines see plain scalars;
//! temporal values become ISO strings.

use crate::value::{EntityRef, Value};
use serde::{
    Serialize, Serializer,
    ser::{Error as _, SerializeMap, SerializeStruct},
};
use time::format_description::well_known::Rfc3339;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Date(d) => serializer.collect_str(d),
            Self::Float64(f) => serializer.serialize_f64(*f),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::List(items) => serializer.collect_seq(items),
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Self::Null => serializer.serialize_none(),
            Self::Ref(r) => r.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Timestamp(ts) => {
                let text = ts.format(&Rfc3339).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            Self::Uint(u) => serializer.serialize_u64(*u),
            Self::Ulid(id) => serializer.collect_str(id),
        }
    }
}

impl Serialize for EntityRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("EntityRef", 2)?;
        s.serialize_field("entity", &self.entity)?;
        s.serialize_field("key", &self.key)?;
        s.end()
    }
}
