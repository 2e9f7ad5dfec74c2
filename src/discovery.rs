//! Enumeration of device objects on the NetworkManager root object.

use tracing::debug;
use zbus::zvariant::OwnedObjectPath;

use crate::{
    error::Result,
    proxy::{NM_ROOT_PATH, NetworkManagerProxy},
    session::BusSession,
};

/// Which device population to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceScope {
    /// Realized devices only (`GetDevices`).
    Realized,
    /// Realized devices plus unrealized placeholders (`GetAllDevices`).
    All,
}

pub(crate) struct DeviceDiscovery;

impl DeviceDiscovery {
    /// Lists the object paths of the devices NetworkManager knows about.
    ///
    /// An empty reply is a valid outcome and returns an empty vector. The
    /// returned paths are only meaningful against the session's connection.
    pub(crate) async fn device_paths(
        session: &BusSession,
        scope: DeviceScope,
    ) -> Result<Vec<OwnedObjectPath>> {
        let nm_proxy = NetworkManagerProxy::new(session.connection())
            .await
            .map_err(|err| crate::error::NmError::remote_call("GetDevices", NM_ROOT_PATH, err))?;

        let paths = match scope {
            DeviceScope::Realized => {
                session
                    .bounded_call("GetDevices", NM_ROOT_PATH, nm_proxy.get_devices())
                    .await?
            }
            DeviceScope::All => {
                session
                    .bounded_call("GetAllDevices", NM_ROOT_PATH, nm_proxy.get_all_devices())
                    .await?
            }
        };

        debug!("enumerated {} device path(s)", paths.len());

        Ok(paths)
    }
}
