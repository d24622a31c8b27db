//! irkit-remote - command-line remote for IRKit infrared transmitters
//!
//! Discovers an IRKit on the local network over DNS-SD, resolves short
//! command names against a hierarchy of recorded signal files, and sends
//! the matching signals to the device over HTTP. It can also capture new
//! signals from the device and store them by name.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (command tokens, scope, settings) and errors
//! - **Application**: The command session use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (device HTTP, DNS-SD, disk)
//! - **CLI**: Command-line interface, argument parsing, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
