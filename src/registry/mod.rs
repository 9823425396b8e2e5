pub mod catalog;
pub mod execute;
pub mod handlers;
pub mod params;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::{self, BoxFuture, FutureExt};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{PapierkramClient, Payload};
use crate::error::{AppError, ClientError};

// ── Command metadata ────────────────────────────────────────────

/// Resource domain a command belongs to. Used for grouping in catalogs and
/// help output only; it plays no part in dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandCategory {
    Info,
    Companies,
    Contacts,
    Projects,
    Invoices,
    Estimates,
    Propositions,
    Expenses,
    Tasks,
    TimeEntries,
    Banking,
    Analytics,
}

impl CommandCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Companies => "companies",
            Self::Contacts => "contacts",
            Self::Projects => "projects",
            Self::Invoices => "invoices",
            Self::Estimates => "estimates",
            Self::Propositions => "propositions",
            Self::Expenses => "expenses",
            Self::Tasks => "tasks",
            Self::TimeEntries => "time_entries",
            Self::Banking => "banking",
            Self::Analytics => "analytics",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Info => "Account information",
            Self::Companies => "Customers and suppliers",
            Self::Contacts => "Contact persons of a company",
            Self::Projects => "Projects and budgets",
            Self::Invoices => "Invoices: CRUD, archive, cancel, send",
            Self::Estimates => "Estimates and quotes",
            Self::Propositions => "Products, services and payment terms",
            Self::Expenses => "Expense vouchers",
            Self::Tasks => "Time tracker tasks",
            Self::TimeEntries => "Time tracker entries",
            Self::Banking => "Bank connections and transactions (read-only)",
            Self::Analytics => "Business intelligence reports",
        }
    }

    pub fn all() -> &'static [CommandCategory] {
        &[
            Self::Info,
            Self::Companies,
            Self::Contacts,
            Self::Projects,
            Self::Invoices,
            Self::Estimates,
            Self::Propositions,
            Self::Expenses,
            Self::Tasks,
            Self::TimeEntries,
            Self::Banking,
            Self::Analytics,
        ]
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.slug() == slug)
    }
}

// ── Command descriptor ──────────────────────────────────────────

pub type HandlerFuture = BoxFuture<'static, Result<Payload, AppError>>;

/// Type-erased handler: raw JSON arguments in, payload out. Validation of the
/// arguments against the command's parameter type happens inside.
pub type Handler = Arc<dyn Fn(Arc<PapierkramClient>, Value) -> HandlerFuture + Send + Sync>;

/// Static definition of one invokable command.
#[derive(Clone)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    pub param_schema: Value,
    handler: Handler,
}

impl CommandDescriptor {
    /// Validate `input` and, only if it is well-formed, run the handler.
    pub fn invoke(&self, client: Arc<PapierkramClient>, input: Value) -> HandlerFuture {
        (self.handler)(client, input)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Build a descriptor from a parameter type and a handler closure.
///
/// `P` is the single source of truth for the command's arguments: its JSON
/// schema is published to callers and its `Deserialize` impl rejects
/// malformed input before `run` (and therefore the network) is ever reached.
pub fn command<P, F, Fut>(
    category: CommandCategory,
    name: &'static str,
    description: &'static str,
    run: F,
) -> CommandDescriptor
where
    P: DeserializeOwned + JsonSchema + Send + 'static,
    F: Fn(Arc<PapierkramClient>, P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Payload, ClientError>> + Send + 'static,
{
    let handler: Handler = Arc::new(
        move |client: Arc<PapierkramClient>, input: Value| -> HandlerFuture {
            match catalog::de::<P>(input) {
                Ok(params) => run(client, params)
                    .map(|outcome| outcome.map_err(AppError::from))
                    .boxed(),
                Err(message) => future::ready(Err(AppError::Validation {
                    command: name.to_string(),
                    message,
                }))
                .boxed(),
            }
        },
    );

    CommandDescriptor {
        name,
        description,
        category,
        param_schema: catalog::schema_value::<P>(),
        handler,
    }
}

// ── Registry ────────────────────────────────────────────────────

/// Name → descriptor table, in registration order.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: IndexMap<&'static str, CommandDescriptor>,
}

impl CommandRegistry {
    /// Empty registry; nothing registered yet.
    pub fn empty() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Registry with every resource domain registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for group in handlers::groups() {
            registry.register_group(group);
        }
        registry
    }

    /// Register one domain's commands. Re-registering a name replaces the
    /// previous descriptor in place, so registering a group twice is a no-op.
    pub fn register_group(&mut self, commands: Vec<CommandDescriptor>) {
        for descriptor in commands {
            self.commands.insert(descriptor.name, descriptor);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.values()
    }

    pub fn in_category(&self, category: CommandCategory) -> impl Iterator<Item = &CommandDescriptor> {
        self.iter().filter(move |c| c.category == category)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Command output ──────────────────────────────────────────────

/// Result of executing a command: which command ran, and what it returned.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub command: &'static str,
    pub payload: Payload,
}

impl CommandOutput {
    pub fn new(command: &'static str, payload: Payload) -> Self {
        Self { command, payload }
    }

    /// The payload as a JSON value (markers expanded).
    pub fn into_value(self) -> Value {
        self.payload.into_value()
    }

    /// Pretty-printed text, the form returned to protocol callers.
    pub fn render(self) -> String {
        self.payload.render()
    }
}
