//! End-to-end rendering tests for the device listing.
//!
//! Exercises the public API with pre-built reports, the way the binary
//! consumes it. No live bus involved.

use std::{collections::HashMap, time::Duration};

use nmls::{DeviceRecord, DeviceReport, NmError, presenter};
use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

fn device_path(index: u32) -> OwnedObjectPath {
    OwnedObjectPath::try_from(format!("/org/freedesktop/NetworkManager/Devices/{index}")).unwrap()
}

fn record(entries: Vec<(&str, Value<'static>)>) -> DeviceRecord {
    let properties: HashMap<String, OwnedValue> = entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), OwnedValue::try_from(value).unwrap()))
        .collect();
    DeviceRecord::new(properties)
}

fn render_all(reports: Vec<DeviceReport>) -> (Vec<String>, usize) {
    let mut lines = Vec::new();
    let mut skipped = 0;

    for report in reports {
        match report.outcome {
            Ok(record) => lines.extend(presenter::render(&record)),
            Err(err) => {
                skipped += 1;
                lines.push(presenter::render_failure(report.path.as_str(), &err));
            }
        }
    }

    (lines, skipped)
}

#[test]
fn zero_devices_produce_zero_output() {
    let (lines, skipped) = render_all(Vec::new());

    assert!(lines.is_empty());
    assert_eq!(skipped, 0);
}

#[test]
fn one_failed_device_does_not_suppress_the_others() {
    let reports = vec![
        DeviceReport {
            path: device_path(0),
            outcome: Ok(record(vec![
                ("Interface", Value::from("wlan0")),
                ("DeviceType", Value::from(2_u32)),
                ("Driver", Value::from("iwlwifi")),
                ("State", Value::from(100_u32)),
            ])),
        },
        DeviceReport {
            path: device_path(1),
            outcome: Err(NmError::CallTimeout {
                call: "GetAll",
                path: device_path(1).to_string(),
                timeout: Duration::from_secs(25),
            }),
        },
    ];

    let (lines, skipped) = render_all(reports);

    assert_eq!(skipped, 1);
    assert!(lines.contains(&"Type: WiFi".to_owned()));
    assert!(lines.contains(&"State: Activated".to_owned()));

    let diagnostic = lines.last().unwrap();
    assert!(diagnostic.contains("/org/freedesktop/NetworkManager/Devices/1"));
    assert!(diagnostic.contains("skipped"));
    assert!(diagnostic.contains("timed out"));
}

#[test]
fn blocks_keep_their_fixed_shape_across_devices() {
    let reports = vec![
        DeviceReport {
            path: device_path(0),
            outcome: Ok(record(vec![
                ("Interface", Value::from("eth0")),
                ("DeviceType", Value::from(1_u32)),
                ("Driver", Value::from("e1000e")),
                ("State", Value::from(30_u32)),
            ])),
        },
        DeviceReport {
            path: device_path(1),
            outcome: Ok(record(vec![
                ("Interface", Value::from("ttyUSB0")),
                ("DeviceType", Value::from(8_u32)),
                ("State", Value::from(20_u32)),
            ])),
        },
    ];

    let (lines, skipped) = render_all(reports);

    assert_eq!(skipped, 0);
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], presenter::SEPARATOR);
    assert_eq!(lines[5], presenter::SEPARATOR);
    assert_eq!(lines[7], "Type: Modem");
    assert_eq!(lines[8], format!("Driver: {}", presenter::MISSING));
    assert_eq!(lines[9], "State: Unavailable");
}

#[test]
fn fatal_errors_format_with_context() {
    let error = NmError::ServiceNotFound {
        name: "org.freedesktop.NetworkManager".to_owned(),
    };

    assert_eq!(
        error.to_string(),
        "service org.freedesktop.NetworkManager is not running on the system bus"
    );
}
