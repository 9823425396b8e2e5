use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use super::protocol::{
    tool_result, Request, RequestId, Response, RpcError, ToolCallParams, DEFAULT_PROTOCOL_VERSION,
    INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, SERVER_NAME,
};
use crate::client::PapierkramClient;
use crate::registry::catalog;
use crate::registry::execute::execute;
use crate::registry::CommandRegistry;

/// What to do with one inbound line.
enum Routed {
    Reply(Response),
    Call { id: RequestId, params: Option<Value> },
    Silent,
}

/// MCP server over a newline-delimited JSON-RPC byte stream.
#[derive(Clone)]
pub struct McpServer {
    registry: Arc<CommandRegistry>,
    client: Arc<PapierkramClient>,
}

impl McpServer {
    pub fn new(registry: Arc<CommandRegistry>, client: Arc<PapierkramClient>) -> Self {
        Self { registry, client }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn serve_stdio(&self) -> io::Result<()> {
        self.serve(io::stdin(), io::stdout()).await
    }

    /// Serve until `reader` reaches EOF, then wait for in-flight tool calls
    /// to finish and their replies to be written.
    ///
    /// Every reply goes through one channel to a single writer task, so
    /// concurrent calls never interleave bytes on `writer`.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<Response>();
        let writer_task = tokio::spawn(write_responses(writer, rx));

        let mut reader = BufReader::new(reader);
        let mut line = Vec::new();
        loop {
            line.clear();
            let bytes_read = match reader.read_until(b'\n', &mut line).await {
                Ok(n) => n,
                Err(e) => {
                    error!(error = %e, "failed to read from MCP input");
                    break;
                }
            };
            if bytes_read == 0 {
                break;
            }

            trim_line_endings(&mut line);
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            // A dead writer means no reply could ever be delivered.
            if tx.is_closed() {
                warn!("MCP output closed, no longer accepting requests");
                break;
            }

            match self.route(&line) {
                Routed::Reply(response) => {
                    if tx.send(response).is_err() {
                        warn!("MCP output closed, no longer accepting requests");
                        break;
                    }
                }
                Routed::Call { id, params } => {
                    let server = self.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let response = server.call_tool(id, params).await;
                        let _ = tx.send(response);
                    });
                }
                Routed::Silent => {}
            }
        }

        // The writer drains until every sender (ours and the in-flight calls') is gone.
        drop(tx);
        match writer_task.await {
            Ok(result) => result,
            Err(e) => Err(io::Error::other(e)),
        }
    }

    fn route(&self, raw: &[u8]) -> Routed {
        let value: Value = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable MCP message");
                return Routed::Reply(Response::error(
                    RequestId::Null,
                    RpcError::new(PARSE_ERROR, "Parse error").with_data(json!({ "reason": e.to_string() })),
                ));
            }
        };

        let request = match serde_json::from_value::<Request>(value.clone()) {
            Ok(request) if request.jsonrpc == JSONRPC_VERSION => request,
            _ => {
                let id = value
                    .get("id")
                    .and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok())
                    .unwrap_or(RequestId::Null);
                return Routed::Reply(Response::error(
                    id,
                    RpcError::new(INVALID_REQUEST, "Invalid Request"),
                ));
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "notification");
            return Routed::Silent;
        };
        debug!(method = %request.method, "request");

        let result = match request.method.as_str() {
            "initialize" => initialize_result(request.params.as_ref()),
            "ping" => json!({}),
            "tools/list" => json!({ "tools": catalog::to_json_schema(&self.registry) }),
            "tools/call" => {
                return Routed::Call {
                    id,
                    params: request.params,
                };
            }
            other => {
                return Routed::Reply(Response::error(
                    id,
                    RpcError::new(METHOD_NOT_FOUND, format!("Method not found: {other}")),
                ));
            }
        };
        Routed::Reply(Response::success(id, result))
    }

    /// Rejected input becomes a protocol error; a failed remote call becomes
    /// a tool result flagged `isError` so the caller sees the service's answer.
    async fn call_tool(&self, id: RequestId, params: Option<Value>) -> Response {
        let call = match params.map(serde_json::from_value::<ToolCallParams>) {
            Some(Ok(call)) => call,
            Some(Err(e)) => {
                return Response::error(id, RpcError::new(INVALID_PARAMS, e.to_string()));
            }
            None => {
                return Response::error(id, RpcError::new(INVALID_PARAMS, "Missing tool call params"));
            }
        };

        match execute(&self.registry, &self.client, &call.name, call.arguments).await {
            Ok(output) => Response::success(id, tool_result(output.render(), false)),
            Err(e) if e.is_rejected_input() => {
                Response::error(id, RpcError::new(INVALID_PARAMS, e.to_string()))
            }
            Err(e) => Response::success(id, tool_result(e.to_string(), true)),
        }
    }
}

async fn write_responses<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<Response>) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut encoded = serde_json::to_vec(&response).map_err(io::Error::other)?;
        encoded.push(b'\n');
        if let Err(e) = writer.write_all(&encoded).await {
            error!(error = %e, "failed to write MCP response");
            return Err(e);
        }
        writer.flush().await?;
    }
    Ok(())
}

fn initialize_result(params: Option<&Value>) -> Value {
    let protocol_version = params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);
    json!({
        "protocolVersion": protocol_version,
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") },
    })
}

fn trim_line_endings(line: &mut Vec<u8>) {
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
}
