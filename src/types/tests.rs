//! Unit tests for the enumeration tables.
//!
//! Checks the exact display labels and that decoding is total over u32.

use crate::types::{DeviceState, DeviceType};

#[test]
fn device_type_known_codes() {
    let expected = [
        (1, "Ethernet"),
        (2, "WiFi"),
        (5, "Bluetooth"),
        (6, "OLPC"),
        (7, "WiMAX"),
        (8, "Modem"),
    ];

    for (code, label) in expected {
        assert_eq!(DeviceType::from_u32(code).label(), label, "code {code}");
    }
}

#[test]
fn device_type_unmapped_codes() {
    for code in [0, 3, 4, 9, 999, u32::MAX, -1_i32 as u32] {
        assert_eq!(DeviceType::from_u32(code), DeviceType::Unknown);
        assert_eq!(DeviceType::from_u32(code).label(), "Unknown");
    }
}

#[test]
fn device_state_known_codes() {
    let expected = [
        (0, "Unknown"),
        (10, "Unmanaged"),
        (20, "Unavailable"),
        (30, "Disconnected"),
        (40, "Prepare"),
        (50, "Config"),
        (60, "Need Auth"),
        (70, "IP Config"),
        (80, "IP Check"),
        (90, "Secondaries"),
        (100, "Activated"),
        (110, "Deactivating"),
        (120, "Failed"),
    ];

    for (code, label) in expected {
        assert_eq!(DeviceState::from_u32(code).label(), label, "code {code}");
    }
}

#[test]
fn device_state_unmapped_codes() {
    for code in [5, 15, 121, 999, u32::MAX] {
        assert_eq!(DeviceState::from_u32(code), DeviceState::Unknown);
        assert_eq!(DeviceState::from_u32(code).label(), "Unknown");
    }
}

#[test]
fn labels_are_never_empty() {
    for code in (0..=130).chain([999, u32::MAX]) {
        assert!(!DeviceType::from_u32(code).label().is_empty());
        assert!(!DeviceState::from_u32(code).label().is_empty());
    }
}

#[test]
fn display_matches_label() {
    assert_eq!(DeviceType::Wifi.to_string(), "WiFi");
    assert_eq!(DeviceState::Activated.to_string(), "Activated");
}
