#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, CreatePropositionParams, IdParams, PaginationParams, UpdatePropositionParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_propositions(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_propositions(p).await
}

pub async fn get_proposition(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_proposition(p.id).await
}

pub async fn create_proposition(
    client: Arc<PapierkramClient>,
    p: CreatePropositionParams,
) -> Outcome {
    client.create_proposition(&params::body(&p)?).await
}

pub async fn update_proposition(
    client: Arc<PapierkramClient>,
    p: UpdatePropositionParams,
) -> Outcome {
    client.update_proposition(p.id, &params::body(&p)?).await
}

pub async fn delete_proposition(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_proposition(p.id).await
}

pub async fn list_payment_terms(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_payment_terms(p).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Propositions;
    vec![
        command(cat, "list_propositions", "List all products and services", list_propositions),
        command(cat, "get_proposition", "Get details of a product or service", get_proposition),
        command(cat, "create_proposition", "Create a new product or service", create_proposition),
        command(cat, "update_proposition", "Update a product or service", update_proposition),
        command(cat, "delete_proposition", "Delete a product or service", delete_proposition),
        command(cat, "list_payment_terms", "List all payment terms", list_payment_terms),
    ]
}
