//! JSON-RPC 2.0 envelope types and the MCP constants this server speaks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";
/// Used when the client's `initialize` names no protocol version.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "papierkram";

// Standard JSON-RPC error codes.
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

/// A JSON-RPC 2.0 request. No `id` means it is a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
}

/// A JSON-RPC 2.0 response: exactly one of `result` / `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: RequestId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request ID: integer, string, or null (only in replies to unparseable input).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
    Null,
}

impl Request {
    pub fn new(method: impl Into<String>, params: Option<Value>, id: Option<RequestId>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

impl Response {
    pub fn success(id: RequestId, result: Value) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_string(), result: Some(result), error: None, id }
    }

    pub fn error(id: RequestId, error: RpcError) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_string(), result: None, error: Some(error), id }
    }
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Arguments of `tools/call`. Missing `arguments` are treated as `{}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Body of a `tools/call` result carrying one text block.
pub fn tool_result(text: String, is_error: bool) -> Value {
    let mut result = serde_json::json!({
        "content": [{ "type": "text", "text": text }],
    });
    if is_error {
        if let Some(obj) = result.as_object_mut() {
            obj.insert("isError".into(), Value::Bool(true));
        }
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_without_id_is_notification() {
        let req: Request =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }))
                .unwrap();
        assert_eq!(req.id, None);

        let req: Request =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "method": "ping", "id": "a1" })).unwrap();
        assert_eq!(req.id, Some(RequestId::String("a1".into())));
    }

    #[test]
    fn test_request_round_trip_keeps_string_id() {
        let req = Request::new("tools/list", None, Some(RequestId::String("req-1".into())));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, json!({ "jsonrpc": "2.0", "method": "tools/list", "id": "req-1" }));
        assert_eq!(serde_json::from_value::<Request>(json).unwrap(), req);
    }

    #[test]
    fn test_response_omits_unused_half() {
        let ok = serde_json::to_value(Response::success(RequestId::Number(1), json!({}))).unwrap();
        assert_eq!(ok, json!({ "jsonrpc": "2.0", "result": {}, "id": 1 }));

        let err = Response::error(RequestId::Null, RpcError::new(PARSE_ERROR, "Parse error"));
        let err = serde_json::to_value(err).unwrap();
        assert_eq!(
            err,
            json!({ "jsonrpc": "2.0", "error": { "code": -32700, "message": "Parse error" }, "id": null })
        );
    }

    #[test]
    fn test_tool_result_error_flag() {
        assert!(tool_result("x".into(), false).get("isError").is_none());
        assert_eq!(tool_result("x".into(), true)["isError"], true);
    }
}
