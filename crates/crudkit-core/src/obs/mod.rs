//! Observability: descriptor lifecycle telemetry and sink abstractions.
//!
//! Descriptor and render code report through `DescriptorEvent`; counters
//! are process-local and thread-scoped.

pub(crate) mod metrics;
pub(crate) mod sink;


// re-exports
pub use metrics::{EventReport, TemplateCounters};
pub use sink::{
    DescriptorEvent, EventSink, TemplateSource, events_report, events_reset, with_event_sink,
};
