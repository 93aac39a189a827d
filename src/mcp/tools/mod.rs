//! MCP tool implementations
//!
//! Tools are grouped by Trello entity. Every tool delegates to the shared
//! `TrelloClient` through [`ToolCall`], which turns client failures into
//! structured tool errors instead of protocol errors and reports each outcome
//! to the host as an info or error event.

mod attachments;
mod boards;
mod cards;
mod checklists;
mod labels;


pub use attachments::*;
pub use boards::*;
pub use cards::*;
pub use checklists::*;
pub use labels::*;

use std::future::Future;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{error, info};

use crate::mcp::events::{EventLevel, HostEvents};
use crate::mcp::server::TrelloMcpServer;
use crate::trello::{TrelloError, TrelloResult};

impl TrelloMcpServer {
    pub(crate) fn tool_call(&self, tool: &'static str, action: impl Into<String>) -> ToolCall {
        ToolCall::new(self.events().clone(), tool, action)
    }
}

/// One tool invocation: its name, a human description of the action for
/// failure events, and the identifying parameters echoed back on failure.
pub(crate) struct ToolCall {
    events: HostEvents,
    tool: &'static str,
    action: String,
    context: Map<String, Value>,
}

impl ToolCall {
    pub(crate) fn new(events: HostEvents, tool: &'static str, action: impl Into<String>) -> Self {
        Self {
            events,
            tool,
            action: action.into(),
            context: Map::new(),
        }
    }

    /// Attach an identifying parameter to the failure payload.
    pub(crate) fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    /// Run a single-object operation.
    pub(crate) async fn run<T, F>(
        self,
        operation: F,
        summary: impl FnOnce(&T) -> String,
    ) -> Result<CallToolResult, McpError>
    where
        T: Serialize,
        F: Future<Output = TrelloResult<T>>,
    {
        match operation.await {
            Ok(value) => {
                self.succeeded(summary(&value)).await;
                success(&value)
            }
            Err(e) => {
                let payload = self.failed(&e).await;
                failure(payload)
            }
        }
    }

    /// Run a collection operation; failures are wrapped in a one-element array.
    pub(crate) async fn run_list<T, F>(
        self,
        operation: F,
        summary: impl FnOnce(&[T]) -> String,
    ) -> Result<CallToolResult, McpError>
    where
        T: Serialize,
        F: Future<Output = TrelloResult<Vec<T>>>,
    {
        match operation.await {
            Ok(items) => {
                self.succeeded(summary(items.as_slice())).await;
                success(&items)
            }
            Err(e) => {
                let payload = self.failed(&e).await;
                failure(Value::Array(vec![payload]))
            }
        }
    }

    /// Run a delete operation, reporting `{"success": true, <ids>, "result": ..}`.
    pub(crate) async fn run_delete<F>(
        self,
        operation: F,
        summary: impl FnOnce() -> String,
    ) -> Result<CallToolResult, McpError>
    where
        F: Future<Output = TrelloResult<Value>>,
    {
        match operation.await {
            Ok(result) => {
                self.succeeded(summary()).await;
                let mut body = Map::new();
                body.insert("success".to_string(), Value::Bool(true));
                body.extend(self.context);
                body.insert("result".to_string(), result);
                success(&Value::Object(body))
            }
            Err(e) => {
                let payload = self.failed(&e).await;
                failure(payload)
            }
        }
    }

    async fn succeeded(&self, message: String) {
        info!(tool = self.tool, "{message}");
        self.events
            .emit(EventLevel::Info, self.tool, &message)
            .await;
    }

    /// Report the failure and build the `{error, kind, <ids>}` payload.
    async fn failed(&self, e: &TrelloError) -> Value {
        let message = format!("Failed to {}: {}", self.action, e);
        error!(tool = self.tool, kind = e.kind().as_str(), "{message}");
        self.events
            .emit(EventLevel::Error, self.tool, &message)
            .await;

        let mut payload = Map::new();
        payload.insert("error".to_string(), Value::String(e.to_string()));
        payload.insert(
            "kind".to_string(),
            Value::String(e.kind().as_str().to_string()),
        );
        payload.extend(self.context.clone());
        Value::Object(payload)
    }
}

fn to_pretty(value: &impl Serialize) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(json!({"error": e.to_string()})),
        )
    })
}

fn success(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(to_pretty(
        value,
    )?)]))
}

fn failure(payload: Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(to_pretty(
        &payload,
    )?)]))
}
