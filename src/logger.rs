use std::cell::RefCell;
use std::rc::Rc;

/// Logging capability consumed by the registry.
///
/// Injected at construction rather than reached for globally so that two
/// registries (one per event, one per test) never share log state. `debug`
/// is optional for implementors and defaults to a no-op.
pub trait Logger {
    fn log(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, _message: &str) {}
}

/// Forwards every call to the `tracing` macros. This is what the binary uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

/// Records every emission so tests can assert on log behavior. Clone the
/// handle before moving it into a registry; both see the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    records: Rc<RefCell<Vec<(LogLevel, String)>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.borrow().clone()
    }

    pub fn count_at(&self, level: LogLevel) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }

    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }
}
