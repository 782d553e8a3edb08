use super::QueryEvent;
use tokio::sync::mpsc;

/// Injected per-query diagnostics.
///
/// Disabled: `emit()` is a no-op and callers guard event construction with
/// `is_enabled()`. Enabled: every event is written as a `debug!` record and,
/// for a recording tracer, also sent down an unbounded channel.
///
/// `Clone` is cheap; the engine, the exchanger and the server handler each
/// hold their own copy.
#[derive(Clone)]
pub struct QueryTracer {
    enabled: bool,
    sink: Option<mpsc::UnboundedSender<QueryEvent>>,
}

impl QueryTracer {
    pub fn new_disabled() -> Self {
        Self {
            enabled: false,
            sink: None,
        }
    }

    pub fn new_enabled() -> Self {
        Self {
            enabled: true,
            sink: None,
        }
    }

    /// Enabled tracer that also hands every event to the returned receiver.
    pub fn new_recording() -> (Self, mpsc::UnboundedReceiver<QueryEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let tracer = Self {
            enabled: true,
            sink: Some(tx),
        };
        (tracer, rx)
    }

    pub fn from_debug_flag(debug: bool) -> Self {
        if debug {
            Self::new_enabled()
        } else {
            Self::new_disabled()
        }
    }

    /// Never blocks. Events sent to a closed channel are dropped.
    pub fn emit(&self, event: QueryEvent) {
        if !self.enabled {
            return;
        }
        event.log();
        if let Some(ref tx) = self.sink {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for QueryTracer {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for QueryTracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryTracer")
            .field("enabled", &self.enabled)
            .field("recording", &self.sink.is_some())
            .finish()
    }
}
