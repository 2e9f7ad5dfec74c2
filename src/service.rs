//! High-level API tying session, discovery, and property reads together.

use std::time::Duration;

use tracing::{instrument, warn};
use zbus::zvariant::OwnedObjectPath;

use crate::{
    discovery::{DeviceDiscovery, DeviceScope},
    error::Result,
    proxy::{NM_ROOT_PATH, NetworkManagerProxy},
    reader::PropertyReader,
    record::DeviceRecord,
    session::BusSession,
};

/// Outcome of reading one enumerated device.
///
/// Per-device failures are carried here instead of propagated, so one
/// misbehaving device never aborts enumeration of the others.
#[derive(Debug)]
pub struct DeviceReport {
    /// Object path of the device on the service.
    pub path: OwnedObjectPath,
    /// The snapshot, or the error that skipped this device.
    pub outcome: Result<DeviceRecord>,
}

/// Client for the NetworkManager device listing.
///
/// Owns one [`BusSession`] for its whole lifetime; every enumeration and
/// property read goes through that single connection.
#[derive(Debug)]
pub struct DeviceService {
    session: BusSession,
}

impl DeviceService {
    /// Connects to the system bus and verifies NetworkManager is present.
    ///
    /// # Errors
    /// Returns [`crate::NmError::Connection`] or
    /// [`crate::NmError::ServiceNotFound`]; both are fatal for the run.
    pub async fn connect(call_timeout: Duration) -> Result<Self> {
        let session = BusSession::connect(call_timeout).await?;

        Ok(Self { session })
    }

    /// The version reported by the running NetworkManager daemon.
    ///
    /// # Errors
    /// Returns [`crate::NmError::RemoteCall`] if the property read fails.
    pub async fn version(&self) -> Result<String> {
        let nm_proxy = NetworkManagerProxy::new(self.session.connection())
            .await
            .map_err(|err| crate::NmError::remote_call("Version", NM_ROOT_PATH, err))?;

        self.session
            .bounded_call("Version", NM_ROOT_PATH, nm_proxy.version())
            .await
    }

    /// Enumerates devices and snapshots each one's properties in turn.
    ///
    /// Zero devices yields an empty vector, not an error. A failure reading
    /// one device is recorded in that device's [`DeviceReport`] and the
    /// remaining devices are still processed.
    ///
    /// # Errors
    /// Returns an error only when the enumeration call on the root object
    /// itself fails.
    #[instrument(skip(self))]
    pub async fn enumerate(&self, scope: DeviceScope) -> Result<Vec<DeviceReport>> {
        let paths = DeviceDiscovery::device_paths(&self.session, scope).await?;

        let mut reports = Vec::with_capacity(paths.len());
        for path in paths {
            let outcome = PropertyReader::snapshot(&self.session, &path).await;
            if let Err(err) = &outcome {
                warn!("failed to read device {path}: {err}");
            }
            reports.push(DeviceReport { path, outcome });
        }

        Ok(reports)
    }
}
