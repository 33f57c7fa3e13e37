//! Ferrous DoH Infrastructure Layer
pub mod doh;
pub mod transport;

pub use doh::DohClient;
pub use transport::ReqwestTransport;
