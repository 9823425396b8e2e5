#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, CreateCompanyParams, IdParams, PaginationParams, UpdateCompanyParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_companies(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_companies(p).await
}

pub async fn get_company(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_company(p.id).await
}

pub async fn create_company(client: Arc<PapierkramClient>, p: CreateCompanyParams) -> Outcome {
    client.create_company(&params::body(&p)?).await
}

pub async fn update_company(client: Arc<PapierkramClient>, p: UpdateCompanyParams) -> Outcome {
    client.update_company(p.id, &params::body(&p)?).await
}

pub async fn delete_company(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_company(p.id).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Companies;
    vec![
        command(cat, "list_companies", "List all companies (customers and suppliers)", list_companies),
        command(cat, "get_company", "Get details of a company", get_company),
        command(cat, "create_company", "Create a new company (customer or supplier)", create_company),
        command(cat, "update_company", "Update an existing company", update_company),
        command(cat, "delete_company", "Delete a company", delete_company),
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
    async fn test_create_company_forwards_optional_fields() {
        let api = FakeApi::echo().await;
        let endpoint = EndpointConfig::new(&api.base_url(), "t").unwrap();
        let client = Arc::new(PapierkramClient::new(endpoint).unwrap());

        let p: CreateCompanyParams = serde_json::from_value(json!({
            "name": "Nordwind KG",
            "contact_type": "customer",
            "city": "Husum",
            "vat_identifier": "DE123456789"
        }))
        .unwrap();
        create_company(client, p).await.unwrap();

        assert_eq!(
            api.last_request().body_json(),
            json!({
                "name": "Nordwind KG",
                "contact_type": "customer",
                "city": "Husum",
                "vat_identifier": "DE123456789"
            })
        );
    }
}
