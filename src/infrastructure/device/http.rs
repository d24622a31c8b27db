//! HTTP device client adapter

use async_trait::async_trait;

use crate::application::ports::{DeviceClient, DeviceError};

/// The device's single message resource: POST transmits the body as an
/// infrared signal, GET returns the most recently captured one.
const MESSAGES_PATH: &str = "messages";

/// HTTP client for an IRKit device.
///
/// Signals travel as opaque request/response bodies; nothing here inspects
/// them.
pub struct HttpDeviceClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDeviceClient {
    /// Create a client for a discovered device name
    pub fn new(device: impl AsRef<str>) -> Self {
        Self::with_base_url(format!("http://{}", device.as_ref()))
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the messages endpoint URL
    fn messages_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), MESSAGES_PATH)
    }
}

#[async_trait]
impl DeviceClient for HttpDeviceClient {
    async fn send(&self, signal: &[u8]) -> Result<(), DeviceError> {
        let response = self
            .client
            .post(self.messages_url())
            .body(signal.to_vec())
            .send()
            .await
            .map_err(|e| DeviceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeviceError::BadStatus(status.as_u16()));
        }

        // Fire-and-forget: the response body is irrelevant
        Ok(())
    }

    async fn fetch_latest(&self) -> Result<Vec<u8>, DeviceError> {
        let response = self
            .client
            .get(self.messages_url())
            .send()
            .await
            .map_err(|e| DeviceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeviceError::BadStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DeviceError::RequestFailed(e.to_string()))?;

        // An empty body means "nothing captured yet"; the caller decides
        // what to do with it.
        Ok(body.to_vec())
    }
}
