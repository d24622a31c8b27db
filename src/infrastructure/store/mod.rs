//! Signal store adapters

pub mod fs;

pub use fs::{FsSignalStore, SIGNAL_EXTENSION};
