//! Per-device property reads over the generic Properties interface.

use tracing::{debug, warn};
use zbus::{fdo, zvariant::OwnedObjectPath};

use crate::{
    error::{NmError, Result},
    proxy::{NM_DEVICE_INTERFACE, NM_SERVICE, PropertiesProxy},
    record::DeviceRecord,
    session::BusSession,
};

pub(crate) struct PropertyReader;

impl PropertyReader {
    /// Takes one property snapshot of the device at `path`.
    ///
    /// Introspects the object first, because some transports gate generic
    /// property access behind that handshake. An introspection failure is
    /// logged and the direct `GetAll` is attempted regardless; only the
    /// direct call's outcome classifies the device.
    pub(crate) async fn snapshot(
        session: &BusSession,
        path: &OwnedObjectPath,
    ) -> Result<DeviceRecord> {
        if let Err(err) = Self::introspect(session, path).await {
            warn!("{err}; attempting direct property access");
        }

        let properties_proxy = PropertiesProxy::new(session.connection(), path.clone())
            .await
            .map_err(|err| NmError::remote_call("GetAll", path.as_str(), err))?;

        let reply = session
            .bounded_call(
                "GetAll",
                path.as_str(),
                properties_proxy.get_all(NM_DEVICE_INTERFACE),
            )
            .await?;

        debug!("read {} properties from {path}", reply.len());

        Ok(DeviceRecord::new(reply))
    }

    async fn introspect(session: &BusSession, path: &OwnedObjectPath) -> Result<()> {
        let introspectable = fdo::IntrospectableProxy::builder(session.connection())
            .destination(NM_SERVICE)
            .and_then(|builder| builder.path(path.clone()))
            .map_err(|err| NmError::Introspection {
                path: path.to_string(),
                source: err,
            })?
            .build()
            .await
            .map_err(|err| NmError::Introspection {
                path: path.to_string(),
                source: err,
            })?;

        match session
            .bounded_call("Introspect", path.as_str(), introspectable.introspect())
            .await
        {
            Ok(_xml) => Ok(()),
            Err(NmError::RemoteCall { source, .. }) => Err(NmError::Introspection {
                path: path.to_string(),
                source,
            }),
            Err(other) => Err(other),
        }
    }
}
