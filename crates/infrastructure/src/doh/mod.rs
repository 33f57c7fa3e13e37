pub mod client;
pub mod wire;

pub use client::{DohClient, DEFAULT_ENDPOINT};
