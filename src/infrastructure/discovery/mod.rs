//! Device discovery adapters

pub mod dns_sd;

pub use dns_sd::DnsSdDiscovery;
