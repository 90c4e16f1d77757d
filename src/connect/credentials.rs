use super::candidate::CredentialCandidate;
use super::SetupContext;
use crate::error::Result;
use crate::inventory::Vm;
use crate::prompt::ask_from_list;
use tracing::{debug, info};

pub const MANUAL_ENTRY_LABEL: &str = "Type credentials manually";

pub const CLEARTEXT_WARNING: &str =
    "The password you choose will be stored in cleartext in this machine's data directory.";

/// Work out the login used for `vm`.
///
/// A known username is never changed. Blank manual answers are accepted as
/// empty strings. The cleartext warning is shown whenever username and
/// password are not both already known, even if no prompt follows.
pub fn resolve_credentials(
    ctx: &mut SetupContext<'_>,
    vm: &Vm,
    known_username: Option<&str>,
    known_password: Option<&str>,
) -> Result<(String, String)> {
    let _entered = ctx.span().clone().entered();

    if let (Some(username), Some(password)) = (known_username, known_password) {
        debug!(username, "credentials already known");
        return Ok((username.to_string(), password.to_string()));
    }

    ctx.ui.warn(CLEARTEXT_WARNING);

    let mut username = known_username.map(str::to_string);
    let mut password = known_password.map(str::to_string);

    let recognized: Vec<CredentialCandidate> = vm
        .credentials
        .iter()
        .map(CredentialCandidate::from_record)
        .filter(CredentialCandidate::recognized)
        .collect();
    debug!(count = recognized.len(), "recognized credential records");

    if let Some(known) = username.as_deref() {
        if password.is_none() {
            if let Some(record) = recognized.iter().find(|c| c.username() == known) {
                info!(username = known, "using password reported for known user");
                password = Some(record.password().to_string());
            }
        }
    } else if !recognized.is_empty() {
        let mut labels: Vec<String> = recognized.iter().map(CredentialCandidate::label).collect();
        labels.push(MANUAL_ENTRY_LABEL.to_string());

        ctx.ui.say("The VM reports these login credentials:");
        let index = ask_from_list(
            &mut *ctx.ui,
            "Which credentials should be used?",
            &labels,
            Some(0),
        )?;

        if let Some(record) = recognized.get(index) {
            info!(username = record.username(), "using reported credentials");
            username = Some(record.username().to_string());
            password = Some(record.password().to_string());
        }
    }

    let username = match username {
        Some(username) => username,
        None => ctx.ui.ask("Username")?.trim().to_string(),
    };
    let password = match password {
        Some(password) => password,
        None => ctx
            .ui
            .ask_secret(&format!("Password for {}", username))?
            .trim()
            .to_string(),
    };

    Ok((username, password))
}
