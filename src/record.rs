//! Point-in-time property snapshots for a single device.

use std::collections::HashMap;

use zbus::zvariant::{OwnedValue, Value};

/// Immutable snapshot of one device's properties.
///
/// Built from one `GetAll` reply and consumed by the presenter; it has no
/// lifecycle beyond that. Accessors are total: a key that is absent or
/// holds a value of an unexpected type yields `None` instead of failing,
/// so a malformed device degrades instead of aborting the run.
#[derive(Debug)]
pub struct DeviceRecord {
    properties: HashMap<String, OwnedValue>,
}

impl DeviceRecord {
    /// Wraps one `GetAll` reply.
    pub fn new(properties: HashMap<String, OwnedValue>) -> Self {
        Self { properties }
    }

    /// String-valued property, if present and actually a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.properties.get(key).map(|value| &**value) {
            Some(Value::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric property, if present and actually a u32.
    pub fn code(&self, key: &str) -> Option<u32> {
        match self.properties.get(key).map(|value| &**value) {
            Some(Value::U32(n)) => Some(*n),
            _ => None,
        }
    }

    /// Number of properties in the snapshot.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the reply carried no properties at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
