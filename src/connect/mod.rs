//! Connection resolution: decide how a VM is reached and which login is
//! used, then hand the result to storage.

pub mod candidate;
pub mod credentials;
pub mod routing;
pub mod setup;

pub use candidate::{CredentialCandidate, PathCandidate, SSH_PORT};
pub use credentials::resolve_credentials;
pub use routing::{path_options, resolve_routing};
pub use setup::{setup_connection, SetupRequest};

use crate::prompt::Prompter;
use tracing::Span;

/// Interaction context threaded through every resolution step.
pub struct SetupContext<'a> {
    pub ui: &'a mut dyn Prompter,
    span: Span,
}

impl<'a> SetupContext<'a> {
    pub fn new(ui: &'a mut dyn Prompter, machine_id: &str) -> Self {
        Self {
            ui,
            span: tracing::info_span!("connection_setup", machine = %machine_id),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}
