//! Fixed-format rendering of device snapshots.

use crate::{
    error::NmError,
    record::DeviceRecord,
    types::{DeviceState, DeviceType},
};

/// Separator line opening every device block.
pub const SEPARATOR: &str = "============================";

/// Placeholder for a property the service did not report at all.
///
/// Distinct from the `Unknown` label, which marks a reported code that is
/// outside the enumeration tables.
pub const MISSING: &str = "(unavailable)";

/// Renders one device block, in fixed order.
///
/// Never fails: absent or mistyped fields degrade to [`MISSING`] and the
/// remaining fields still render.
pub fn render(record: &DeviceRecord) -> Vec<String> {
    let device_type = record
        .code("DeviceType")
        .map_or(MISSING, |code| DeviceType::from_u32(code).label());
    let state = record
        .code("State")
        .map_or(MISSING, |code| DeviceState::from_u32(code).label());

    vec![
        SEPARATOR.to_owned(),
        format!("Interface: {}", record.text("Interface").unwrap_or(MISSING)),
        format!("Type: {device_type}"),
        format!("Driver: {}", record.text("Driver").unwrap_or(MISSING)),
        format!("State: {state}"),
    ]
}

/// Renders the one-line diagnostic emitted in place of a failed device's
/// block, so a skipped device is never a silent omission.
pub fn render_failure(path: &str, error: &NmError) -> String {
    format!("{path}: skipped: {error}")
}
