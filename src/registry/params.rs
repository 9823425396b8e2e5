//! Argument types for every command.
//!
//! Each struct is both the validator (via `Deserialize`) and the published
//! JSON schema (via `JsonSchema`) of one command. Path identifiers are
//! `#[serde(skip_serializing)]`, so serializing an update struct yields
//! exactly the sparse body the remote service expects. Unknown argument
//! fields are ignored on input and therefore never forwarded.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

pub use crate::client::PaginationParams;

/// Serialize a parameter struct into a request body, dropping absent fields.
pub fn body<T: Serialize>(params: &T) -> Result<Value, ClientError> {
    serde_json::to_value(params).map_err(|e| ClientError::Encode {
        message: e.to_string(),
    })
}

// ── Shared ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct IdParams {
    /// ID of the record.
    pub id: u64,
}

// ── Companies ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Customer,
    Supplier,
}

/// Fields accepted by both create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompanyFields {
    /// Type: customer or supplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<ContactType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateCompanyParams {
    /// Company name.
    pub name: String,
    #[serde(flatten)]
    pub fields: CompanyFields,
    /// VAT identification number (USt-IdNr.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_identifier: Option<String>,
    /// Tax number (Steuernummer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ust_idnr: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCompanyParams {
    /// ID of the company.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: CompanyFields,
}

// ── Contact persons ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PersonFields {
    /// Academic title, e.g. "Dr.".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListContactPersonsParams {
    /// ID of the company.
    pub company_id: u64,
    #[serde(flatten)]
    pub page: PaginationParams,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct ContactPersonParams {
    /// ID of the company.
    pub company_id: u64,
    /// ID of the contact person.
    pub person_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateContactPersonParams {
    /// ID of the company.
    #[serde(skip_serializing)]
    pub company_id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub fields: PersonFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateContactPersonParams {
    /// ID of the company.
    #[serde(skip_serializing)]
    pub company_id: u64,
    /// ID of the contact person.
    #[serde(skip_serializing)]
    pub person_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub fields: PersonFields,
}

// ── Projects ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    Minutes,
    Cents,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProjectFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_type: Option<BudgetType>,
    /// Budget in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_money: Option<i64>,
    /// Budget in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_time: Option<i64>,
    /// Color as hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    /// Project name.
    pub name: String,
    /// ID of the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    /// ID of the project.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: ProjectFields,
}

// ── Invoices ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateInvoiceParams {
    /// Invoice title.
    pub name: String,
    /// Supply date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_term_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateInvoiceParams {
    /// ID of the invoice.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SendInvoiceParams {
    /// ID of the invoice.
    #[serde(skip_serializing)]
    pub id: u64,
    /// Recipient address. Without it the customer's stored address is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ── Estimates ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EstimateFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateEstimateParams {
    /// Estimate title.
    pub name: String,
    #[serde(flatten)]
    pub fields: EstimateFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateEstimateParams {
    /// ID of the estimate.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: EstimateFields,
}

// ── Propositions ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PropositionType {
    Product,
    Service,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PropositionFields {
    /// Article number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price as decimal string, e.g. "100.00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Unit, e.g. "piece" or "hour".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// VAT rate as decimal string, e.g. "19.0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreatePropositionParams {
    /// Name of the product or service.
    pub name: String,
    /// Type: product or service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposition_type: Option<PropositionType>,
    #[serde(flatten)]
    pub fields: PropositionFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdatePropositionParams {
    /// ID of the product or service.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: PropositionFields,
}

// ── Expense vouchers ────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseFields {
    /// Due date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Supply date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateExpenseParams {
    /// Voucher title.
    pub name: String,
    #[serde(flatten)]
    pub fields: ExpenseFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entertainment_reason: Option<String>,
    /// ID of the supplier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creditor_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateExpenseParams {
    /// ID of the voucher.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: ExpenseFields,
}

// ── Tracker: tasks ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TaskFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    /// Deadline (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_costs: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    /// Task name.
    pub name: String,
    #[serde(flatten)]
    pub fields: TaskFields,
    /// ID of the product or service billed for this task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposition_id: Option<u64>,
    /// Assigned user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    /// ID of the task.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: TaskFields,
}

// ── Tracker: time entries ───────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TimeEntryFields {
    /// Start time (HH:MM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at_time: Option<String>,
    /// End time (HH:MM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at_time: Option<String>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTimeEntryParams {
    /// Date of the entry (YYYY-MM-DD).
    pub entry_date: String,
    #[serde(flatten)]
    pub fields: TimeEntryFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTimeEntryParams {
    /// ID of the time entry.
    #[serde(skip_serializing)]
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(flatten)]
    pub fields: TimeEntryFields,
}

// ── Analytics ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExpenseByCategoryParams {
    /// Year, e.g. 2024. Defaults to the service's current year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_update_body_is_sparse_and_omits_path_ids() {
        let p: UpdateCompanyParams =
            serde_json::from_value(json!({ "id": 5, "city": "Kiel" })).unwrap();
        assert_eq!(body(&p).unwrap(), json!({ "city": "Kiel" }));

        let p: UpdateContactPersonParams = serde_json::from_value(
            json!({ "company_id": 1, "person_id": 2, "email": "a@b.de" }),
        )
        .unwrap();
        assert_eq!(body(&p).unwrap(), json!({ "email": "a@b.de" }));
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let p: CreateEstimateParams =
            serde_json::from_value(json!({ "name": "Q1", "foo": "bar" })).unwrap();
        assert_eq!(body(&p).unwrap(), json!({ "name": "Q1" }));
    }

    #[test]
    fn test_enum_fields_are_restricted() {
        let ok: CreateCompanyParams =
            serde_json::from_value(json!({ "name": "Acme", "contact_type": "supplier" })).unwrap();
        assert_eq!(ok.fields.contact_type, Some(ContactType::Supplier));

        let bad = serde_json::from_value::<CreateCompanyParams>(
            json!({ "name": "Acme", "contact_type": "partner" }),
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_required_fields_and_types() {
        assert!(serde_json::from_value::<CreateInvoiceParams>(json!({})).is_err());
        assert!(serde_json::from_value::<IdParams>(json!({ "id": "7" })).is_err());
        assert!(serde_json::from_value::<IdParams>(json!({ "id": -1 })).is_err());
        assert!(serde_json::from_value::<PaginationParams>(json!({ "page": 0 })).is_err());
    }

    #[test]
    fn test_time_entry_body_keeps_billable_false() {
        let p: CreateTimeEntryParams = serde_json::from_value(
            json!({ "entry_date": "2024-03-01", "duration": 90, "billable": false }),
        )
        .unwrap();
        assert_eq!(
            body(&p).unwrap(),
            json!({ "entry_date": "2024-03-01", "duration": 90, "billable": false })
        );
    }
}
