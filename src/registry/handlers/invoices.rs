#![allow(clippy::needless_pass_by_value)]

use std::sync::Arc;

use crate::client::PapierkramClient;
use crate::registry::params::{
    self, CreateInvoiceParams, IdParams, PaginationParams, SendInvoiceParams, UpdateInvoiceParams,
};
use crate::registry::{command, CommandCategory, CommandDescriptor};

use super::Outcome;

pub async fn list_invoices(client: Arc<PapierkramClient>, p: PaginationParams) -> Outcome {
    client.list_invoices(p).await
}

pub async fn get_invoice(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.get_invoice(p.id).await
}

pub async fn create_invoice(client: Arc<PapierkramClient>, p: CreateInvoiceParams) -> Outcome {
    client.create_invoice(&params::body(&p)?).await
}

pub async fn update_invoice(client: Arc<PapierkramClient>, p: UpdateInvoiceParams) -> Outcome {
    client.update_invoice(p.id, &params::body(&p)?).await
}

pub async fn delete_invoice(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.delete_invoice(p.id).await
}

pub async fn archive_invoice(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.archive_invoice(p.id).await
}

pub async fn unarchive_invoice(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.unarchive_invoice(p.id).await
}

pub async fn cancel_invoice(client: Arc<PapierkramClient>, p: IdParams) -> Outcome {
    client.cancel_invoice(p.id).await
}

/// No body at all unless a recipient address was given.
pub async fn send_invoice(client: Arc<PapierkramClient>, p: SendInvoiceParams) -> Outcome {
    let data = if p.email.is_some() {
        Some(params::body(&p)?)
    } else {
        None
    };
    client.send_invoice(p.id, data.as_ref()).await
}

pub fn commands() -> Vec<CommandDescriptor> {
    let cat = CommandCategory::Invoices;
    vec![
        command(cat, "list_invoices", "List all invoices (income)", list_invoices),
        command(cat, "get_invoice", "Get details of an invoice", get_invoice),
        command(cat, "create_invoice", "Create a new invoice", create_invoice),
        command(cat, "update_invoice", "Update an existing invoice", update_invoice),
        command(cat, "delete_invoice", "Delete an invoice", delete_invoice),
        command(cat, "archive_invoice", "Archive an invoice", archive_invoice),
        command(cat, "unarchive_invoice", "Restore an archived invoice", unarchive_invoice),
        command(cat, "cancel_invoice", "Cancel an invoice", cancel_invoice),
        command(cat, "send_invoice", "Send an invoice by e-mail", send_invoice),
    ]
}
