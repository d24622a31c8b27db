//! Device client adapters

pub mod http;

pub use http::HttpDeviceClient;
