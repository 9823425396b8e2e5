#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, ContactPersonParams, CreateContactPersonParams, ListContactPersonsParams,
    UpdateContactPersonParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_contact_persons(
    client: Arc<PapierkramClient>,
    p: ListContactPersonsParams,
) -> Outcome {
    client.list_contact_persons(p.company_id, p.page).await
}

pub async fn get_contact_person(client: Arc<PapierkramClient>, p: ContactPersonParams) -> Outcome {
    client.get_contact_person(p.company_id, p.person_id).await
}

pub async fn create_contact_person(
    client: Arc<PapierkramClient>,
    p: CreateContactPersonParams,
) -> Outcome {
    client
        .create_contact_person(p.company_id, &params::body(&p)?)
        .await
}

pub async fn update_contact_person(
    client: Arc<PapierkramClient>,
    p: UpdateContactPersonParams,
) -> Outcome {
    client
        .update_contact_person(p.company_id, p.person_id, &params::body(&p)?)
        .await
}

pub async fn delete_contact_person(
    client: Arc<PapierkramClient>,
    p: ContactPersonParams,
) -> Outcome {
    client.delete_contact_person(p.company_id, p.person_id).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Contacts;
    vec![
        command(cat, "list_contact_persons", "List all contact persons of a company", list_contact_persons),
        command(cat, "get_contact_person", "Get details of a contact person", get_contact_person),
        command(cat, "create_contact_person", "Create a new contact person for a company", create_contact_person),
        command(cat, "update_contact_person", "Update a contact person", update_contact_person),
        command(cat, "delete_contact_person", "Delete a contact person", delete_contact_person),
    ]
}
