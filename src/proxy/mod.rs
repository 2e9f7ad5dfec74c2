//! D-Bus proxy implementations for the NetworkManager interfaces consumed
//! by this crate.
//!
//! Object introspection uses the standard
//! `org.freedesktop.DBus.Introspectable` interface, for which zbus ships a
//! proxy in [`zbus::fdo`].

mod manager;
mod properties;

pub use manager::*;
pub use properties::*;

/// Well-known bus name of the NetworkManager service.
pub const NM_SERVICE: &str = "org.freedesktop.NetworkManager";

/// Root object path of the NetworkManager service.
pub const NM_ROOT_PATH: &str = "/org/freedesktop/NetworkManager";

/// Interface whose properties describe a network device.
pub const NM_DEVICE_INTERFACE: &str = "org.freedesktop.NetworkManager.Device";
