//! Device client port interface

use async_trait::async_trait;
use thiserror::Error;

/// Device transport errors
#[derive(Debug, Clone, Error)]
pub enum DeviceError {
    #[error("Request to device failed: {0}")]
    RequestFailed(String),

    #[error("Device returned HTTP {0}")]
    BadStatus(u16),
}

/// Port for talking to the infrared transmitter.
///
/// Signal payloads are opaque byte blobs; no structure is imposed on them.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    /// Submit a signal to the device for transmission.
    ///
    /// Fire-and-forget: the response body is ignored.
    async fn send(&self, signal: &[u8]) -> Result<(), DeviceError>;

    /// Retrieve the most recently captured signal from the device.
    ///
    /// An empty payload means the device has captured nothing; callers
    /// decide how to treat it.
    async fn fetch_latest(&self) -> Result<Vec<u8>, DeviceError>;
}
