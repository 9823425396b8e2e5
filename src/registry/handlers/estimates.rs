#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, CreateEstimateParams, IdParams, PaginationParams, UpdateEstimateParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_estimates(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_estimates(p).await
}

pub async fn get_estimate(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_estimate(p.id).await
}

pub async fn create_estimate(client: Arc<PapierkramClient>, p: CreateEstimateParams) -> Outcome {
    client.create_estimate(&params::body(&p)?).await
}

pub async fn update_estimate(client: Arc<PapierkramClient>, p: UpdateEstimateParams) -> Outcome {
    client.update_estimate(p.id, &params::body(&p)?).await
}

pub async fn delete_estimate(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_estimate(p.id).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Estimates;
    vec![
        command(cat, "list_estimates", "List all estimates and quotes", list_estimates),
        command(cat, "get_estimate", "Get details of an estimate", get_estimate),
        command(cat, "create_estimate", "Create a new estimate", create_estimate),
        command(cat, "update_estimate", "Update an existing estimate", update_estimate),
        command(cat, "delete_estimate", "Delete an estimate", delete_estimate),
    ]
}
