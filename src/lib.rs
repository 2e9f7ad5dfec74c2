//! nmls - Typed NetworkManager D-Bus client.
//!
//! nmls enumerates the network devices a running NetworkManager daemon
//! knows about and reads a point-in-time property snapshot for each one,
//! over the D-Bus system bus. The main features include:
//!
//! - Typed decoding of the device-type and device-state enumerations
//! - Per-device failure isolation with explicit diagnostics
//! - Bounded waits on every remote call
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use nmls::{DeviceScope, DeviceService, presenter};
//!
//! # async fn run() -> nmls::Result<()> {
//! let service = DeviceService::connect(Duration::from_secs(25)).await?;
//!
//! for report in service.enumerate(DeviceScope::Realized).await? {
//!     match report.outcome {
//!         Ok(record) => {
//!             for line in presenter::render(&record) {
//!                 println!("{line}");
//!             }
//!         }
//!         Err(err) => println!("{}", presenter::render_failure(report.path.as_str(), &err)),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Device enumeration on the service's root object.
mod discovery;

/// Error types and result alias.
mod error;

/// Fixed-format rendering of device snapshots.
pub mod presenter;

/// D-Bus proxy implementations for NetworkManager interfaces.
pub mod proxy;

/// Per-device property reads.
mod reader;

/// Immutable device property snapshots.
mod record;

/// Bus session ownership and call bounding.
mod session;

/// High-level client API.
mod service;

/// Tracing subscriber setup for the binary.
pub mod tracing_config;

/// NetworkManager enumeration decoding.
pub mod types;

pub use discovery::DeviceScope;
pub use error::{NmError, Result};
pub use record::DeviceRecord;
pub use service::{DeviceReport, DeviceService};
