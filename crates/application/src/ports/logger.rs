/// Which of the two logger channels a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Log,
    Error,
}

/// Minimal logging capability injected into the client.
///
/// The default wiring is silent; callers opt in to output by supplying one
/// of the implementations below (or their own).
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn error(&self, message: &str);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Forwards to the `tracing` stack at debug/error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Forwards both channels to an arbitrary callback.
pub struct FnLogger {
    callback: Box<dyn Fn(LogKind, &str) + Send + Sync>,
}

impl FnLogger {
    pub fn new(callback: impl Fn(LogKind, &str) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl Logger for FnLogger {
    fn log(&self, message: &str) {
        (self.callback)(LogKind::Log, message);
    }

    fn error(&self, message: &str) {
        (self.callback)(LogKind::Error, message);
    }
}
