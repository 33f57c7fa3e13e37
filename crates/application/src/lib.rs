//! Ferrous DoH Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::{DohResolver, HttpTransport, Logger, TransportResponse};
pub use use_cases::QueryFacade;
