//! Application layer - Use cases and port interfaces
//!
//! Contains the command resolution engine and trait definitions
//! for external system interactions.

pub mod discover;
pub mod ports;
pub mod session;

// Re-export use cases
pub use discover::{collect_devices, first_device};
pub use session::{CommandOutcome, CommandSession, ExecuteError, SaveError, SentSignal};
