//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the Trello client over MCP (stdio transport in the binary).
//!
//! - **server**: coordinator owning the client and the merged tool router
//! - **tools**: one tool file per Trello entity, all routed through `ToolCall`
//! - **resources**: `trello://` composite text views
//! - **events**: per-call info/error events sent to the host

pub mod events;
pub mod resources;
pub mod server;
pub mod tools;

#[cfg(test)]
mod resources_test;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use server::TrelloMcpServer;
