//! Trace Port
//!
//! Instrumentation hooks passed to components by reference instead of being
//! called as free functions. Components that accept a `&dyn TraceSink` stay
//! silent under `NoopTraceSink` and can be observed in tests with a recording sink.
//!
//! Implementations:
//! - `NoopTraceSink`: silent operation
//! - `TracingTraceSink`: forwards hooks to `tracing` at TRACE level

/// Receiver for trace hooks
pub trait TraceSink: Send + Sync {
    /// Free-form trace message
    fn message(&self, label: &str);

    fn before(&self, _label: &str) {}

    fn after(&self, _label: &str) {}

    fn scope_entry(&self, _label: &str) {}

    fn scope_exit(&self, _label: &str) {}

    fn function_entry(&self, _label: &str) {}

    fn function_exit(&self, _label: &str) {}

    /// Named value attached to the current trace context
    fn item(&self, _name: &str, _value: &str) {}

    /// Screen position associated with a label
    fn position(&self, _label: &str, _x: i32, _y: i32) {}
}

/// No-op sink for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn message(&self, _label: &str) {
        // Do nothing
    }
}

/// Sink that emits every hook as a `tracing` event under `errpage::trace`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTraceSink;

impl TraceSink for TracingTraceSink {
    fn message(&self, label: &str) {
        tracing::trace!(target: "errpage::trace", label, "message");
    }

    fn before(&self, label: &str) {
        tracing::trace!(target: "errpage::trace", label, "before");
    }

    fn after(&self, label: &str) {
        tracing::trace!(target: "errpage::trace", label, "after");
    }

    fn scope_entry(&self, label: &str) {
        tracing::trace!(target: "errpage::trace", label, "scope entry");
    }

    fn scope_exit(&self, label: &str) {
        tracing::trace!(target: "errpage::trace", label, "scope exit");
    }

    fn function_entry(&self, label: &str) {
        tracing::trace!(target: "errpage::trace", label, "function entry");
    }

    fn function_exit(&self, label: &str) {
        tracing::trace!(target: "errpage::trace", label, "function exit");
    }

    fn item(&self, name: &str, value: &str) {
        tracing::trace!(target: "errpage::trace", name, value, "item");
    }

    fn position(&self, label: &str, x: i32, y: i32) {
        tracing::trace!(target: "errpage::trace", label, x, y, "position");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Function,
    Scope,
}

/// Guard that reports entry on creation and the matching exit on drop
pub struct ScopeTrace<'a> {
    sink: &'a dyn TraceSink,
    label: &'a str,
    kind: ScopeKind,
}

impl<'a> ScopeTrace<'a> {
    /// Report `function_entry` now and `function_exit` when dropped
    pub fn function(sink: &'a dyn TraceSink, label: &'a str) -> Self {
        sink.function_entry(label);
        Self {
            sink,
            label,
            kind: ScopeKind::Function,
        }
    }

    /// Report `scope_entry` now and `scope_exit` when dropped
    pub fn scope(sink: &'a dyn TraceSink, label: &'a str) -> Self {
        sink.scope_entry(label);
        Self {
            sink,
            label,
            kind: ScopeKind::Scope,
        }
    }
}

impl Drop for ScopeTrace<'_> {
    fn drop(&mut self) {
        match self.kind {
            ScopeKind::Function => self.sink.function_exit(self.label),
            ScopeKind::Scope => self.sink.scope_exit(self.label),
        }
    }
}

/// Test sink that records hooks as `kind:label` strings
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingTraceSink {
    pub events: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
impl TraceSink for RecordingTraceSink {
    fn message(&self, label: &str) {
        self.push(format!("message:{}", label));
    }

    fn scope_entry(&self, label: &str) {
        self.push(format!("scope_entry:{}", label));
    }

    fn scope_exit(&self, label: &str) {
        self.push(format!("scope_exit:{}", label));
    }

    fn function_entry(&self, label: &str) {
        self.push(format!("function_entry:{}", label));
    }

    fn function_exit(&self, label: &str) {
        self.push(format!("function_exit:{}", label));
    }

    fn item(&self, name: &str, value: &str) {
        self.push(format!("item:{}={}", name, value));
    }
}
