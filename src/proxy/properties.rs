//! Generic property access for NetworkManager objects.

use std::collections::HashMap;

use zbus::{proxy, zvariant::OwnedValue};

/// The standard `org.freedesktop.DBus.Properties` interface, bound to the
/// NetworkManager service.
///
/// Declared here rather than taken from [`zbus::fdo`] so the destination is
/// fixed and only the one member this crate calls is exposed.
#[proxy(
    default_service = "org.freedesktop.NetworkManager",
    interface = "org.freedesktop.DBus.Properties"
)]
pub trait Properties {
    /// Get the values of all properties of the given interface.
    ///
    /// # Arguments
    /// * `interface_name` - Name of the interface whose properties to read
    ///
    /// # Returns
    /// Mapping of property name to value.
    fn get_all(&self, interface_name: &str) -> zbus::Result<HashMap<String, OwnedValue>>;
}
