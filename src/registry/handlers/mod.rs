//! One command table per resource domain.
//!
//! Handlers are thin: they pick the client method for their remote
//! operation, build the body from their parameter struct and hand the
//! outcome back untouched.

pub mod analytics;
pub mod banking;
pub mod companies;
pub mod contacts;
pub mod estimates;
pub mod expenses;
pub mod info;
pub mod invoices;
pub mod projects;
pub mod propositions;
pub mod tracker;

use crate::client::Payload;
use crate::error::ClientError;

use super::CommandDescriptor;

pub(crate) type Outcome = Result<Payload, ClientError>;

/// Every domain's command table, in catalog order.
pub fn groups() -> Vec<Vec<CommandDescriptor>> {
    vec![
        info::commands(),
        companies::commands(),
        contacts::commands(),
        projects::commands(),
        invoices::commands(),
        estimates::commands(),
        propositions::commands(),
        expenses::commands(),
        tracker::commands(),
        banking::commands(),
        analytics::commands(),
    ]
}
