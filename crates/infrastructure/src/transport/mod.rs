pub mod https;

pub use https::ReqwestTransport;
