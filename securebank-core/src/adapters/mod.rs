//! Adapter implementations
//!
//! Concrete implementations of the port traits.

pub mod http;

pub use http::HttpBankApi;
