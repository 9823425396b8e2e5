//! Time tracker commands: tasks and time entries.
#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, CreateTaskParams, CreateTimeEntryParams, IdParams, PaginationParams, UpdateTaskParams,
    UpdateTimeEntryParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

// ── Tasks ──

pub async fn list_tasks(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_tasks(p).await
}

pub async fn get_task(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_task(p.id).await
}

pub async fn create_task(client: Arc<PapierkramClient>, p: CreateTaskParams) -> Outcome {
    client.create_task(&params::body(&p)?).await
}

pub async fn update_task(client: Arc<PapierkramClient>, p: UpdateTaskParams) -> Outcome {
    client.update_task(p.id, &params::body(&p)?).await
}

pub async fn delete_task(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_task(p.id).await
}

// ── Time entries ──

pub async fn list_time_entries(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_time_entries(p).await
}

pub async fn get_time_entry(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_time_entry(p.id).await
}

pub async fn create_time_entry(
    client: Arc<PapierkramClient>,
    p: CreateTimeEntryParams,
) -> Outcome {
    client.create_time_entry(&params::body(&p)?).await
}

pub async fn update_time_entry(
    client: Arc<PapierkramClient>,
    p: UpdateTimeEntryParams,
) -> Outcome {
    client.update_time_entry(p.id, &params::body(&p)?).await
}

pub async fn delete_time_entry(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_time_entry(p.id).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let tasks = CommandCategory::Tasks;
    let entries = CommandCategory::TimeEntries;
    vec![
        command(tasks, "list_tasks", "List all time tracker tasks", list_tasks),
        command(tasks, "get_task", "Get details of a tracker task", get_task),
        command(tasks, "create_task", "Create a new tracker task", create_task),
        command(tasks, "update_task", "Update a tracker task", update_task),
        command(tasks, "delete_task", "Delete a tracker task", delete_task),
        command(entries, "list_time_entries", "List all time entries", list_time_entries),
        command(entries, "get_time_entry", "Get details of a time entry", get_time_entry),
        command(entries, "create_time_entry", "Create a new time entry", create_time_entry),
        command(entries, "update_time_entry", "Update a time entry", update_time_entry),
        command(entries, "delete_time_entry", "Delete a time entry", delete_time_entry),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::EndpointConfig;
    use crate::test_support::FakeApi;

    #[tokio::test]
    async fn test_create_task_keeps_fractional_costs() {
        let api = FakeApi::echo().await;
        let endpoint = EndpointConfig::new(&api.base_url(), "t").unwrap();
        let client = Arc::new(PapierkramClient::new(endpoint).unwrap());

        let p: CreateTaskParams = serde_json::from_value(json!({
            "name": "Jahresabschluss",
            "project_id": 2,
            "relative_costs": 12.5
        }))
        .unwrap();
        let out = create_task(client, p).await.unwrap();

        let req = api.last_request();
        assert_eq!(req.path, "/tracker/tasks");
        assert_eq!(
            req.body_json(),
            json!({ "name": "Jahresabschluss", "project_id": 2, "relative_costs": 12.5 })
        );
        assert_eq!(out.into_value(), req.body_json());
    }
}
