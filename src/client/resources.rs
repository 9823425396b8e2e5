//! One method per remote operation. Each fixes the verb and path template and
//! forwards body and query unchanged; none of them look inside the payload.

use reqwest::Method;
use serde_json::Value;

use super::{PaginationParams, PapierkramClient, Payload, Query};
use crate::error::ClientError;

type Outcome = Result<Payload, ClientError>;

impl PapierkramClient {
    async fn get(&self, path: &str) -> Outcome {
        self.perform(Method::GET, path, None, None).await
    }

    async fn list(&self, path: &str, page: PaginationParams) -> Outcome {
        self.perform(Method::GET, path, None, Some(&page.to_query())).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> Outcome {
        self.perform(Method::POST, path, body, None).await
    }

    async fn put(&self, path: &str, body: &Value) -> Outcome {
        self.perform(Method::PUT, path, Some(body), None).await
    }

    async fn delete(&self, path: &str) -> Outcome {
        self.perform(Method::DELETE, path, None, None).await
    }

    // ── Info ──

    pub async fn get_info(&self) -> Outcome {
        self.get("/info").await
    }

    // ── Contacts: companies ──

    pub async fn list_companies(&self, page: PaginationParams) -> Outcome {
        self.list("/contact/companies", page).await
    }

    pub async fn get_company(&self, id: u64) -> Outcome {
        self.get(&format!("/contact/companies/{id}")).await
    }

    pub async fn create_company(&self, data: &Value) -> Outcome {
        self.post("/contact/companies", Some(data)).await
    }

    pub async fn update_company(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/contact/companies/{id}"), data).await
    }

    pub async fn delete_company(&self, id: u64) -> Outcome {
        self.delete(&format!("/contact/companies/{id}")).await
    }

    // ── Contacts: persons of a company ──

    pub async fn list_contact_persons(&self, company_id: u64, page: PaginationParams) -> Outcome {
        self.list(&format!("/contact/companies/{company_id}/persons"), page)
            .await
    }

    pub async fn get_contact_person(&self, company_id: u64, person_id: u64) -> Outcome {
        self.get(&format!("/contact/companies/{company_id}/persons/{person_id}"))
            .await
    }

    pub async fn create_contact_person(&self, company_id: u64, data: &Value) -> Outcome {
        self.post(&format!("/contact/companies/{company_id}/persons"), Some(data))
            .await
    }

    pub async fn update_contact_person(
        &self,
        company_id: u64,
        person_id: u64,
        data: &Value,
    ) -> Outcome {
        self.put(
            &format!("/contact/companies/{company_id}/persons/{person_id}"),
            data,
        )
        .await
    }

    pub async fn delete_contact_person(&self, company_id: u64, person_id: u64) -> Outcome {
        self.delete(&format!("/contact/companies/{company_id}/persons/{person_id}"))
            .await
    }

    // ── Projects ──

    pub async fn list_projects(&self, page: PaginationParams) -> Outcome {
        self.list("/projects", page).await
    }

    pub async fn get_project(&self, id: u64) -> Outcome {
        self.get(&format!("/projects/{id}")).await
    }

    pub async fn create_project(&self, data: &Value) -> Outcome {
        self.post("/projects", Some(data)).await
    }

    pub async fn update_project(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/projects/{id}"), data).await
    }

    pub async fn delete_project(&self, id: u64) -> Outcome {
        self.delete(&format!("/projects/{id}")).await
    }

    // ── Income: invoices ──

    pub async fn list_invoices(&self, page: PaginationParams) -> Outcome {
        self.list("/income/invoices", page).await
    }

    pub async fn get_invoice(&self, id: u64) -> Outcome {
        self.get(&format!("/income/invoices/{id}")).await
    }

    pub async fn create_invoice(&self, data: &Value) -> Outcome {
        self.post("/income/invoices", Some(data)).await
    }

    pub async fn update_invoice(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/income/invoices/{id}"), data).await
    }

    pub async fn delete_invoice(&self, id: u64) -> Outcome {
        self.delete(&format!("/income/invoices/{id}")).await
    }

    pub async fn archive_invoice(&self, id: u64) -> Outcome {
        self.post(&format!("/income/invoices/{id}/archive"), None).await
    }

    pub async fn unarchive_invoice(&self, id: u64) -> Outcome {
        self.post(&format!("/income/invoices/{id}/unarchive"), None).await
    }

    pub async fn cancel_invoice(&self, id: u64) -> Outcome {
        self.post(&format!("/income/invoices/{id}/cancel"), None).await
    }

    /// `data` is optional: without it the remote service uses the customer's
    /// stored address.
    pub async fn send_invoice(&self, id: u64, data: Option<&Value>) -> Outcome {
        self.post(&format!("/income/invoices/{id}/deliver"), data).await
    }

    // ── Income: estimates ──

    pub async fn list_estimates(&self, page: PaginationParams) -> Outcome {
        self.list("/income/estimates", page).await
    }

    pub async fn get_estimate(&self, id: u64) -> Outcome {
        self.get(&format!("/income/estimates/{id}")).await
    }

    pub async fn create_estimate(&self, data: &Value) -> Outcome {
        self.post("/income/estimates", Some(data)).await
    }

    pub async fn update_estimate(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/income/estimates/{id}"), data).await
    }

    pub async fn delete_estimate(&self, id: u64) -> Outcome {
        self.delete(&format!("/income/estimates/{id}")).await
    }

    // ── Income: propositions (products & services) ──

    pub async fn list_propositions(&self, page: PaginationParams) -> Outcome {
        self.list("/income/propositions", page).await
    }

    pub async fn get_proposition(&self, id: u64) -> Outcome {
        self.get(&format!("/income/propositions/{id}")).await
    }

    pub async fn create_proposition(&self, data: &Value) -> Outcome {
        self.post("/income/propositions", Some(data)).await
    }

    pub async fn update_proposition(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/income/propositions/{id}"), data).await
    }

    pub async fn delete_proposition(&self, id: u64) -> Outcome {
        self.delete(&format!("/income/propositions/{id}")).await
    }

    // ── Income: payment terms ──

    pub async fn list_payment_terms(&self, page: PaginationParams) -> Outcome {
        self.list("/income/payment_terms", page).await
    }

    // ── Expense vouchers ──

    pub async fn list_expense_vouchers(&self, page: PaginationParams) -> Outcome {
        self.list("/expense/vouchers", page).await
    }

    pub async fn get_expense_voucher(&self, id: u64) -> Outcome {
        self.get(&format!("/expense/vouchers/{id}")).await
    }

    pub async fn create_expense_voucher(&self, data: &Value) -> Outcome {
        self.post("/expense/vouchers", Some(data)).await
    }

    pub async fn update_expense_voucher(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/expense/vouchers/{id}"), data).await
    }

    pub async fn delete_expense_voucher(&self, id: u64) -> Outcome {
        self.delete(&format!("/expense/vouchers/{id}")).await
    }

    // ── Tracker: tasks ──

    pub async fn list_tasks(&self, page: PaginationParams) -> Outcome {
        self.list("/tracker/tasks", page).await
    }

    pub async fn get_task(&self, id: u64) -> Outcome {
        self.get(&format!("/tracker/tasks/{id}")).await
    }

    pub async fn create_task(&self, data: &Value) -> Outcome {
        self.post("/tracker/tasks", Some(data)).await
    }

    pub async fn update_task(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/tracker/tasks/{id}"), data).await
    }

    pub async fn delete_task(&self, id: u64) -> Outcome {
        self.delete(&format!("/tracker/tasks/{id}")).await
    }

    // ── Tracker: time entries ──

    pub async fn list_time_entries(&self, page: PaginationParams) -> Outcome {
        self.list("/tracker/time_entries", page).await
    }

    pub async fn get_time_entry(&self, id: u64) -> Outcome {
        self.get(&format!("/tracker/time_entries/{id}")).await
    }

    pub async fn create_time_entry(&self, data: &Value) -> Outcome {
        self.post("/tracker/time_entries", Some(data)).await
    }

    pub async fn update_time_entry(&self, id: u64, data: &Value) -> Outcome {
        self.put(&format!("/tracker/time_entries/{id}"), data).await
    }

    pub async fn delete_time_entry(&self, id: u64) -> Outcome {
        self.delete(&format!("/tracker/time_entries/{id}")).await
    }

    // ── Banking (read-only) ──

    pub async fn list_bank_connections(&self, page: PaginationParams) -> Outcome {
        self.list("/banking/bank_connections", page).await
    }

    pub async fn get_bank_connection(&self, id: u64) -> Outcome {
        self.get(&format!("/banking/bank_connections/{id}")).await
    }

    pub async fn list_bank_transactions(&self, page: PaginationParams) -> Outcome {
        self.list("/banking/transactions", page).await
    }

    pub async fn get_bank_transaction(&self, id: u64) -> Outcome {
        self.get(&format!("/banking/transactions/{id}")).await
    }

    // ── Business intelligence ──

    pub async fn get_expense_by_category(&self, query: &Query) -> Outcome {
        self.perform(
            Method::GET,
            "/business_intelligence/expense_by_category",
            None,
            Some(query),
        )
        .await
    }
}
