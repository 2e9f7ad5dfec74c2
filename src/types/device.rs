//! NetworkManager device types.

use std::fmt;

/// NMDeviceType values indicate the type of hardware represented by a
/// device object.
///
/// Only the types this tool displays by name are enumerated; every other
/// code NetworkManager may report collapses to [`DeviceType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    /// unknown or unrecognized device type
    Unknown = 0,
    /// a wired ethernet device
    Ethernet = 1,
    /// an 802.11 Wi-Fi device
    Wifi = 2,
    /// a Bluetooth device supporting PAN or DUN access protocols
    Bluetooth = 5,
    /// an OLPC XO mesh networking device
    OlpcMesh = 6,
    /// an 802.16e Mobile WiMAX broadband device
    Wimax = 7,
    /// a modem supporting analog telephone, CDMA/EVDO, GSM/UMTS, or LTE
    /// network access protocols
    Modem = 8,
}

impl DeviceType {
    /// Convert from the D-Bus u32 representation.
    ///
    /// Total over all codes; anything outside the table maps to `Unknown`.
    pub fn from_u32(value: u32) -> Self {
        match value {
            1 => Self::Ethernet,
            2 => Self::Wifi,
            5 => Self::Bluetooth,
            6 => Self::OlpcMesh,
            7 => Self::Wimax,
            8 => Self::Modem,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label for this device type.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Ethernet => "Ethernet",
            Self::Wifi => "WiFi",
            Self::Bluetooth => "Bluetooth",
            Self::OlpcMesh => "OLPC",
            Self::Wimax => "WiMAX",
            Self::Modem => "Modem",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
