//! Bounded device discovery
//!
//! Browsing for devices is open-ended; these helpers consume a browse
//! stream up to a bound and drop it, which releases the underlying
//! browser no matter how many names were actually seen.

use super::ports::{DeviceDiscovery, DiscoveryError};

/// Collect up to `max_results` device names in discovery order, then stop
/// browsing.
pub async fn collect_devices<D>(
    discovery: &D,
    max_results: usize,
) -> Result<Vec<String>, DiscoveryError>
where
    D: DeviceDiscovery + ?Sized,
{
    let mut stream = discovery.browse().await?;
    let mut names = Vec::new();

    while names.len() < max_results {
        match stream.next_device().await? {
            Some(name) => names.push(name),
            None => break,
        }
    }

    Ok(names)
}

/// The first device to answer, if any
pub async fn first_device<D>(discovery: &D) -> Result<Option<String>, DiscoveryError>
where
    D: DeviceDiscovery + ?Sized,
{
    Ok(collect_devices(discovery, 1).await?.into_iter().next())
}
