use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

thread_local! {
    static EVENT_STATE: RefCell<EventReport> = RefCell::new(EventReport::default());
}

pub(crate) fn with_state<R>(f: impl FnOnce(&EventReport) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventReport) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

pub(crate) fn reset() {
    with_state_mut(|m| *m = EventReport::default());
}

///
/// EventReport
/// Ephemeral, in-memory counters for descriptor construction and template lookup.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub constructed: u64,
    pub templates: TemplateCounters,

    /// Descriptors constructed per field type.
    pub field_types: BTreeMap<String, u64>,
}

///
/// TemplateCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TemplateCounters {
    // resolution outcomes by source
    pub configured_path: u64,
    pub named: u64,
    pub by_type: u64,
    pub fallback: u64,
}
