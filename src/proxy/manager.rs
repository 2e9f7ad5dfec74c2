//! NetworkManager main D-Bus interface.

use zbus::{proxy, zvariant::OwnedObjectPath};

/// Connection Manager.
///
/// The main NetworkManager D-Bus interface, bound to the well-known root
/// object. Only the surface this crate consumes is declared here.
#[proxy(
    default_service = "org.freedesktop.NetworkManager",
    interface = "org.freedesktop.NetworkManager",
    default_path = "/org/freedesktop/NetworkManager"
)]
pub trait NetworkManager {
    /// Get the list of realized network devices.
    ///
    /// # Returns
    /// List of object paths of network devices known to the system. This list does not include device placeholders.
    fn get_devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// Get the list of all network devices.
    ///
    /// # Returns
    /// List of object paths of network devices and device placeholders (eg, devices that do not yet exist but which can be automatically created by NetworkManager if one of their AvailableConnections was activated).
    fn get_all_devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    /// NetworkManager version.
    #[zbus(property)]
    fn version(&self) -> zbus::Result<String>;
}
