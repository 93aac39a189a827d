//! Fixtures for driving tools against a mockito-backed client.

use mockito::ServerGuard;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

use crate::mcp::TrelloMcpServer;
use crate::trello::test_helpers::client_for;

pub(crate) fn server_for(mock: &ServerGuard) -> TrelloMcpServer {
    TrelloMcpServer::new(client_for(mock))
}

/// Parse the single text block of a tool result as JSON.
pub(crate) fn result_json(result: &CallToolResult) -> Value {
    let content_text = match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    };
    serde_json::from_str(content_text).unwrap()
}

pub(crate) fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}
