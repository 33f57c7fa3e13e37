pub mod http;
pub mod logger;
pub mod resolver;

pub use http::{HttpTransport, TransportResponse};
pub use logger::{FnLogger, LogKind, Logger, NoopLogger, TracingLogger};
pub use resolver::DohResolver;
