#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::{PapierkramClient, Query};
use crate::registry::params::ExpenseByCategoryParams;
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn get_expense_by_category(
    client: Arc<PapierkramClient>,
    p: ExpenseByCategoryParams,
) -> Outcome {
    let query = Query::new().with("year", p.year);
    client.get_expense_by_category(&query).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    vec![command(
        CommandCategory::Analytics,
        "get_expense_by_category",
        "Show expenses grouped by category (business intelligence)",
        get_expense_by_category,
    )]
}
