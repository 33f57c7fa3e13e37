pub mod endpoint;
pub mod errors;
pub mod logging;
pub mod root;

pub use endpoint::EndpointConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{ClientConfig, CliOverrides};
