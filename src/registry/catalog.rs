#![allow(clippy::needless_pass_by_value)]

use schemars::gen::SchemaSettings;
use serde_json::Value;

use super::{CommandCategory, CommandDescriptor, CommandRegistry};

pub(super) fn empty_object_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}

/// JSON schema for a parameter type, with nested structs inlined so callers
/// see one flat object schema (no `$ref`/`definitions`).
pub(super) fn schema_value<T: schemars::JsonSchema>() -> Value {
    let root = SchemaSettings::draft07()
        .with(|s| s.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>();
    let mut value = serde_json::to_value(root).unwrap_or_else(|_| empty_object_schema());
    if let Some(obj) = value.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
        // Unit-like parameter structs produce no `properties`; MCP clients expect one.
        if obj.get("type").and_then(Value::as_str) == Some("object") && !obj.contains_key("properties") {
            obj.insert("properties".into(), serde_json::json!({}));
        }
    }
    value
}

pub(super) fn de<T: serde::de::DeserializeOwned>(input: Value) -> Result<T, String> {
    let input = if input.is_null() { serde_json::json!({}) } else { input };
    serde_json::from_value(input).map_err(|e| e.to_string())
}

/// One catalog entry in the shape MCP `tools/list` expects.
pub fn tool_entry(descriptor: &CommandDescriptor) -> Value {
    serde_json::json!({
        "name": descriptor.name,
        "description": descriptor.description,
        "inputSchema": descriptor.param_schema,
    })
}

/// Generate JSON Schema formatted tool list (for MCP / REST).
pub fn to_json_schema(registry: &CommandRegistry) -> Value {
    Value::Array(registry.iter().map(tool_entry).collect())
}

/// Same list, with each entry tagged by category. Used by the REST surface
/// and `tools --json`.
pub fn to_catalog(registry: &CommandRegistry) -> Value {
    Value::Array(
        registry
            .iter()
            .map(|c| {
                let mut entry = tool_entry(c);
                if let Some(obj) = entry.as_object_mut() {
                    obj.insert("category".into(), Value::String(c.category.slug().into()));
                }
                entry
            })
            .collect(),
    )
}

/// Human-readable command discovery.
/// Three tiers: no topic → categories, category → command list, command → full schema.
pub fn help_text(registry: &CommandRegistry, topic: Option<&str>) -> String {
    match topic {
        None => {
            let mut lines = vec!["Available command categories:".to_string()];
            for cat in CommandCategory::all() {
                let count = registry.in_category(*cat).count();
                if count > 0 {
                    lines.push(format!("  {} ({count}): {}", cat.slug(), cat.description()));
                }
            }
            lines.push(String::new());
            lines.push("Use `tools --category invoices` to list commands in a category.".to_string());
            lines.push("A command name instead of a category shows its parameters.".to_string());
            lines.join("\n")
        }
        Some(topic) => {
            if let Some(c) = registry.get(topic) {
                let schema_str = serde_json::to_string_pretty(&c.param_schema)
                    .unwrap_or_else(|_| "{}".to_string());
                return format!(
                    "{}: {}\nCategory: {}\n\nParameters:\n{}",
                    c.name,
                    c.description,
                    c.category.slug(),
                    schema_str,
                );
            }

            let Some(cat) = CommandCategory::from_slug(&topic.to_lowercase()) else {
                return format!("Unknown topic: \"{topic}\". Run `tools` to see categories.");
            };
            let mut lines = vec![format!("{} commands:", cat.slug())];
            for c in registry.in_category(cat) {
                lines.push(format!("  - {}: {}", c.name, c.description));
            }
            lines.join("\n")
        }
    }
}
