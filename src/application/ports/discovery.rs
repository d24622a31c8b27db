//! Device discovery port interface

use async_trait::async_trait;
use thiserror::Error;

/// Discovery errors
#[derive(Debug, Clone, Error)]
pub enum DiscoveryError {
    #[error("Failed to start discovery: {0}")]
    StartFailed(String),

    #[error("Discovery read failed: {0}")]
    ReadFailed(String),
}

/// A running browse yielding device names in discovery order.
///
/// The stream owns the underlying browsing resource; dropping it stops the
/// browse, so a consumer that only wants the first N names releases the
/// resource by letting the stream go out of scope.
#[async_trait]
pub trait DeviceStream: Send {
    /// The next discovered device name, or `None` once the browse ends.
    async fn next_device(&mut self) -> Result<Option<String>, DiscoveryError>;
}

/// Port for discovering devices on the local network
#[async_trait]
pub trait DeviceDiscovery: Send + Sync {
    /// Start browsing for devices.
    async fn browse(&self) -> Result<Box<dyn DeviceStream>, DiscoveryError>;
}
