use std::time::Duration;

use thiserror::Error;

/// Errors produced while talking to NetworkManager over the system bus.
///
/// Connection-level failures are fatal for the whole run; failures scoped to
/// a single remote call are recoverable and only skip the affected device.
#[derive(Error, Debug)]
pub enum NmError {
    /// The system bus could not be reached or the handshake failed.
    #[error("failed to connect to the system bus: {0}")]
    Connection(#[source] zbus::Error),

    /// No process currently owns the well-known service name.
    #[error("service {name} is not running on the system bus")]
    ServiceNotFound {
        /// The well-known bus name that has no owner.
        name: String,
    },

    /// A remote method call was rejected or the reply could not be decoded.
    #[error("{call} on {path} failed: {source}")]
    RemoteCall {
        /// The D-Bus member that was invoked.
        call: &'static str,
        /// Object path the call was bound to.
        path: String,
        /// The underlying bus error, including the remote error name.
        #[source]
        source: zbus::Error,
    },

    /// A remote call did not complete within the configured bound.
    #[error("{call} on {path} timed out after {timeout:?}")]
    CallTimeout {
        /// The D-Bus member that was invoked.
        call: &'static str,
        /// Object path the call was bound to.
        path: String,
        /// The bound that expired.
        timeout: Duration,
    },

    /// The optional introspection handshake failed for an object.
    ///
    /// Callers log this and fall through to the direct call; the direct
    /// call's outcome is what classifies the object.
    #[error("introspection of {path} failed: {source}")]
    Introspection {
        /// Object path that was introspected.
        path: String,
        /// The underlying bus error.
        #[source]
        source: zbus::Error,
    },
}

impl NmError {
    pub(crate) fn remote_call(
        call: &'static str,
        path: impl Into<String>,
        source: impl Into<zbus::Error>,
    ) -> Self {
        Self::RemoteCall {
            call,
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NmError>;
