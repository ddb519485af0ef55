//! Metrics sink boundary.
//!
//! Engine logic MUST NOT depend on any concrete metrics backend.
//! All instrumentation flows through MetricsEvent and MetricsSink; the
//! default sink drops events. Tests install a capturing sink via
//! `with_sink`.

use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = const { RefCell::new(None) };
}

///
/// ExecKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecKind {
    FetchPage,
    Count,
}

///
/// PlanPhase
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlanPhase {
    IdPage,
    Hydrate,
    Count,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    ExecStart {
        kind: ExecKind,
        entity_path: &'static str,
    },
    ExecFinish {
        kind: ExecKind,
        entity_path: &'static str,
        rows_returned: u64,
    },
    RowsScanned {
        entity_path: &'static str,
        rows_scanned: u64,
    },
    Phase {
        phase: PlanPhase,
        entity_path: &'static str,
    },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// Record an event against the installed sink, if any.
pub(crate) fn emit(event: MetricsEvent) {
    SINK_OVERRIDE.with(|cell| {
        if let Some(sink) = *cell.borrow() {
            // Pointer is valid for the duration of `with_sink`.
            unsafe { (*sink).record(event) };
        }
    });
}

/// Run `f` with `sink` installed as this thread's metrics sink, restoring
/// the previous sink afterwards.
pub fn with_sink<R>(sink: &dyn MetricsSink, f: impl FnOnce() -> R) -> R {
    // Erase the borrow's lifetime: the pointer is installed only for the
    // duration of this call and restored before returning, so it never
    // outlives `sink`.
    let ptr: *const dyn MetricsSink = unsafe { std::mem::transmute(std::ptr::from_ref(sink)) };
    let previous = SINK_OVERRIDE.with(|cell| cell.replace(Some(ptr)));
    let result = f();
    SINK_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = previous;
    });

    result
}
