//! DNS-SD discovery adapter
//!
//! Drives the system `dns-sd` browser as a child process and parses its
//! "Add" records. The child never exits on its own; it is killed when the
//! stream is dropped, so consumers bound the browse simply by letting the
//! stream go out of scope.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};

use crate::application::ports::{DeviceDiscovery, DeviceStream, DiscoveryError};

/// Service type IRKit devices advertise
const SERVICE_TYPE: &str = "_irkit._tcp";

/// Device discovery via `dns-sd -B`
pub struct DnsSdDiscovery {
    service_type: String,
}

impl DnsSdDiscovery {
    /// Create a browser for the IRKit service type
    pub fn new() -> Self {
        Self {
            service_type: SERVICE_TYPE.to_string(),
        }
    }

    /// Create a browser for a custom service type
    pub fn with_service_type(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
        }
    }
}

impl Default for DnsSdDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceDiscovery for DnsSdDiscovery {
    async fn browse(&self) -> Result<Box<dyn DeviceStream>, DiscoveryError> {
        let mut child = Command::new("dns-sd")
            .args(["-B", &self.service_type])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DiscoveryError::StartFailed("dns-sd not found".to_string())
                } else {
                    DiscoveryError::StartFailed(e.to_string())
                }
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| DiscoveryError::StartFailed("no stdout from dns-sd".to_string()))?;

        Ok(Box::new(DnsSdStream {
            lines: BufReader::new(stdout).lines(),
            _child: child,
        }))
    }
}

/// A running browse; dropping it kills the child process.
struct DnsSdStream {
    lines: Lines<BufReader<ChildStdout>>,
    _child: Child,
}

#[async_trait]
impl DeviceStream for DnsSdStream {
    async fn next_device(&mut self) -> Result<Option<String>, DiscoveryError> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .map_err(|e| DiscoveryError::ReadFailed(e.to_string()))?
        {
            if let Some(name) = parse_browse_line(&line) {
                return Ok(Some(name));
            }
        }

        Ok(None)
    }
}

/// Extract the instance name from a `dns-sd -B` "Add" record.
///
/// Browse output columns are: timestamp, A/R, flags, interface, domain,
/// service type, instance name. Removals, headers, and status lines all
/// fail the "Add" check and are skipped.
fn parse_browse_line(line: &str) -> Option<String> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < 7 || columns[1] != "Add" {
        return None;
    }
    Some(columns[6].to_string())
}
