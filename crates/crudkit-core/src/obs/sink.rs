//! Event sink boundary.
//!
//! Descriptor and render logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through DescriptorEvent and EventSink.
use crate::obs::metrics::{self, EventReport};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn EventSink>> = RefCell::new(None);
}

///
/// TemplateSource
///
/// Which rule produced a resolved template path.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TemplateSource {
    ConfiguredPath,
    Named,
    ByType,
    Fallback,
}

///
/// DescriptorEvent
///

#[derive(Clone, Copy, Debug)]
pub enum DescriptorEvent<'a> {
    Constructed { field_type: &'a str },
    TemplateResolved { source: TemplateSource },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: DescriptorEvent<'_>);
}

/// GlobalEventSink
/// Default sink writing into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalEventSink;

impl EventSink for GlobalEventSink {
    fn record(&self, event: DescriptorEvent<'_>) {
        metrics::with_state_mut(|m| match event {
            DescriptorEvent::Constructed { field_type } => {
                m.constructed = m.constructed.saturating_add(1);

                let entry = m.field_types.entry(field_type.to_string()).or_default();
                *entry = entry.saturating_add(1);
            }
            DescriptorEvent::TemplateResolved { source } => {
                let t = &mut m.templates;
                let counter = match source {
                    TemplateSource::ConfiguredPath => &mut t.configured_path,
                    TemplateSource::Named => &mut t.named,
                    TemplateSource::ByType => &mut t.by_type,
                    TemplateSource::Fallback => &mut t.fallback,
                };
                *counter = counter.saturating_add(1);
            }
        });
    }
}

pub(crate) const GLOBAL_EVENT_SINK: GlobalEventSink = GlobalEventSink;

pub(crate) fn record(event: DescriptorEvent<'_>) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn EventSink` in `with_event_sink`.
        // - `with_event_sink` restores the previous slot on every exit,
        //   including unwinding, so `ptr` never outlives the borrow.
        // - `record` is synchronous and never stores `ptr`.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_EVENT_SINK.record(event);
    }
}

/// Snapshot the counters of the current thread.
#[must_use]
pub fn events_report() -> EventReport {
    metrics::with_state(Clone::clone)
}

/// Zero the counters of the current thread.
pub fn events_reset() {
    metrics::reset();
}

/// Route every event recorded on this thread during `f` to `sink`.
pub fn with_event_sink<T>(sink: &dyn EventSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn EventSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - Only shared access is ever materialized from the pointer.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn EventSink, *const dyn EventSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}
