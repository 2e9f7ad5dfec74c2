//! Session with the D-Bus system bus.

use std::{future::Future, time::Duration};

use tokio::time;
use zbus::{Connection, fdo, names::WellKnownName};

use crate::{
    error::{NmError, Result},
    proxy::NM_SERVICE,
};

const DBUS_PATH: &str = "/org/freedesktop/DBus";

/// An established session with the system bus, scoped to one run.
///
/// Owns the single [`Connection`] every remote call goes through, together
/// with the per-call time bound. Dropping the session releases the
/// underlying socket.
#[derive(Debug)]
pub struct BusSession {
    connection: Connection,
    call_timeout: Duration,
}

impl BusSession {
    /// Connects to the system bus and verifies that NetworkManager is
    /// reachable on it.
    ///
    /// # Errors
    /// Returns [`NmError::Connection`] if the bus socket is unavailable or
    /// the handshake fails, and [`NmError::ServiceNotFound`] if no process
    /// currently owns the NetworkManager well-known name.
    pub async fn connect(call_timeout: Duration) -> Result<Self> {
        let connection = Connection::system().await.map_err(NmError::Connection)?;

        let session = Self {
            connection,
            call_timeout,
        };
        session.ensure_service_owner().await?;

        Ok(session)
    }

    /// The underlying bus connection, shared by every proxy in this run.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Runs one remote call under the session's time bound.
    ///
    /// Expiry is classified as [`NmError::CallTimeout`] rather than left to
    /// hang; any other failure becomes [`NmError::RemoteCall`] carrying the
    /// member name and object path.
    pub(crate) async fn bounded_call<T, E>(
        &self,
        call: &'static str,
        path: &str,
        fut: impl Future<Output = std::result::Result<T, E>>,
    ) -> Result<T>
    where
        E: Into<zbus::Error>,
    {
        match time::timeout(self.call_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(NmError::remote_call(call, path, err)),
            Err(_) => Err(NmError::CallTimeout {
                call,
                path: path.to_owned(),
                timeout: self.call_timeout,
            }),
        }
    }

    async fn ensure_service_owner(&self) -> Result<()> {
        let dbus = fdo::DBusProxy::new(&self.connection)
            .await
            .map_err(NmError::Connection)?;

        let name = WellKnownName::from_static_str_unchecked(NM_SERVICE);
        let owned = self
            .bounded_call("NameHasOwner", DBUS_PATH, dbus.name_has_owner(name.into()))
            .await?;

        if owned {
            Ok(())
        } else {
            Err(NmError::ServiceNotFound {
                name: NM_SERVICE.to_owned(),
            })
        }
    }
}
