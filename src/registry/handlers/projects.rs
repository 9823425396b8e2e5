#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, CreateProjectParams, IdParams, PaginationParams, UpdateProjectParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_projects(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_projects(p).await
}

pub async fn get_project(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_project(p.id).await
}

pub async fn create_project(client: Arc<PapierkramClient>, p: CreateProjectParams) -> Outcome {
    client.create_project(&params::body(&p)?).await
}

pub async fn update_project(client: Arc<PapierkramClient>, p: UpdateProjectParams) -> Outcome {
    client.update_project(p.id, &params::body(&p)?).await
}

pub async fn delete_project(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_project(p.id).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Projects;
    vec![
        command(cat, "list_projects", "List all projects", list_projects),
        command(cat, "get_project", "Get details of a project", get_project),
        command(cat, "create_project", "Create a new project", create_project),
        command(cat, "update_project", "Update an existing project", update_project),
        command(cat, "delete_project", "Delete a project", delete_project),
    ]
}
