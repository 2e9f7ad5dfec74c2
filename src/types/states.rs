//! NetworkManager device state types.

use std::fmt;

/// NMDeviceState values describe a device's progress through activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// the device's state is unknown
    Unknown = 0,
    /// the device is recognized, but not managed by NetworkManager
    Unmanaged = 10,
    /// the device is managed but is not available for use
    Unavailable = 20,
    /// the device can be activated, but is currently idle
    Disconnected = 30,
    /// the device is preparing the connection to the network
    Prepare = 40,
    /// the device is connecting to the requested network
    Config = 50,
    /// the device requires more information to continue connecting
    NeedAuth = 60,
    /// the device is requesting IPv4 and/or IPv6 addresses
    IpConfig = 70,
    /// the device is checking whether further action is required
    IpCheck = 80,
    /// the device is waiting for a secondary connection
    Secondaries = 90,
    /// the device has a network connection
    Activated = 100,
    /// the device's network connection is being torn down
    Deactivating = 110,
    /// the device failed to connect and is cleaning up
    Failed = 120,
}

impl DeviceState {
    /// Convert from the D-Bus u32 representation.
    ///
    /// Total over all codes; anything outside the table maps to `Unknown`.
    pub fn from_u32(value: u32) -> Self {
        match value {
            10 => Self::Unmanaged,
            20 => Self::Unavailable,
            30 => Self::Disconnected,
            40 => Self::Prepare,
            50 => Self::Config,
            60 => Self::NeedAuth,
            70 => Self::IpConfig,
            80 => Self::IpCheck,
            90 => Self::Secondaries,
            100 => Self::Activated,
            110 => Self::Deactivating,
            120 => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label for this state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Unmanaged => "Unmanaged",
            Self::Unavailable => "Unavailable",
            Self::Disconnected => "Disconnected",
            Self::Prepare => "Prepare",
            Self::Config => "Config",
            Self::NeedAuth => "Need Auth",
            Self::IpConfig => "IP Config",
            Self::IpCheck => "IP Check",
            Self::Secondaries => "Secondaries",
            Self::Activated => "Activated",
            Self::Deactivating => "Deactivating",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
