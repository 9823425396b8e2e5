#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, CreateExpenseParams, IdParams, PaginationParams, UpdateExpenseParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_expenses(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_expense_vouchers(p).await
}

pub async fn get_expense(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_expense_voucher(p.id).await
}

pub async fn create_expense(client: Arc<PapierkramClient>, p: CreateExpenseParams) -> Outcome {
    client.create_expense_voucher(&params::body(&p)?).await
}

pub async fn update_expense(client: Arc<PapierkramClient>, p: UpdateExpenseParams) -> Outcome {
    client.update_expense_voucher(p.id, &params::body(&p)?).await
}

pub async fn delete_expense(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_expense_voucher(p.id).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Expenses;
    vec![
        command(cat, "list_expenses", "List all expense vouchers", list_expenses),
        command(cat, "get_expense", "Get details of an expense voucher", get_expense),
        command(cat, "create_expense", "Create a new expense voucher", create_expense),
        command(cat, "update_expense", "Update an expense voucher", update_expense),
        command(cat, "delete_expense", "Delete an expense voucher", delete_expense),
    ]
}
