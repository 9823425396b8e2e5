//! Model Context Protocol server: newline-delimited JSON-RPC 2.0 over stdio,
//! exposing every registered command as a tool.

pub mod protocol;
mod server;

pub use server::McpServer;
