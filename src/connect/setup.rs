use super::credentials::resolve_credentials;
use super::routing::resolve_routing;
use super::SetupContext;
use crate::error::{Result, SetupError};
use crate::inventory::Inventory;
use crate::prompt::Prompter;
use crate::storage::{ConnectionStore, KnownConnection, ResolvedConnection};
use tracing::{debug, info};

/// Inputs for one connection setup run.
#[derive(Debug, Clone, Default)]
pub struct SetupRequest<'a> {
    pub machine_id: &'a str,

    /// Values supplied by configuration; these win over the stored record
    pub known: KnownConnection,

    /// Operator-chosen VPN reference, e.g. a VPN URL containing its id
    pub preferred_vpn: Option<&'a str>,
}

/// Resolve routing, then credentials, then persist the result once.
///
/// Nothing is written unless both steps succeed. When the stored record
/// combined with configuration is already complete, no lookups happen.
pub fn setup_connection(
    ui: &mut dyn Prompter,
    inventory: &dyn Inventory,
    store: &ConnectionStore,
    request: SetupRequest<'_>,
) -> Result<ResolvedConnection> {
    let mut ctx = SetupContext::new(ui, request.machine_id);
    let span = ctx.span().clone();
    let _entered = span.enter();

    let stored = store.load()?;
    let known = request.known.or(stored.clone());

    let conn = match known.complete() {
        Some(conn) => {
            debug!("connection fully specified, skipping resolution");
            conn
        }
        None => {
            let vm = inventory
                .find_vm(request.machine_id)?
                .ok_or_else(|| SetupError::MachineNotFound(request.machine_id.to_string()))?;

            let (host, port) = resolve_routing(
                &mut ctx,
                inventory,
                &vm,
                known.host.as_deref(),
                known.port,
                request.preferred_vpn,
            )?;

            let (username, password) = resolve_credentials(
                &mut ctx,
                &vm,
                known.username.as_deref(),
                known.password.as_deref(),
            )?;

            ResolvedConnection {
                username,
                password,
                host,
                port,
            }
        }
    };

    if KnownConnection::from(conn.clone()) != stored {
        store.save(&conn)?;
        info!(connection = %conn, "connection settings saved");
    } else {
        debug!("stored connection settings unchanged");
    }

    Ok(conn)
}
