pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod registry;

#[cfg(test)]
mod test_support;
