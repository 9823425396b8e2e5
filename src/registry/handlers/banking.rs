#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{IdParams, PaginationParams};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_bank_connections(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_bank_connections(p).await
}

pub async fn get_bank_connection(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_bank_connection(p.id).await
}

pub async fn list_bank_transactions(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_bank_transactions(p).await
}

pub async fn get_bank_transaction(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_bank_transaction(p.id).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Banking;
    vec![
        command(cat, "list_bank_connections", "List all bank connections", list_bank_connections),
        command(cat, "get_bank_connection", "Get details of a bank connection", get_bank_connection),
        command(cat, "list_bank_transactions", "List all bank transactions", list_bank_transactions),
        command(cat, "get_bank_transaction", "Get details of a bank transaction", get_bank_transaction),
    ]
}
