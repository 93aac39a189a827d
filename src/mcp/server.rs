//! MCP server implementation
//!
//! Owns the shared `TrelloClient`, combines the per-entity tool routers,
//! serves the `trello://` resource templates and forwards per-call events to
//! the connected client.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::*,
    service::{NotificationContext, RequestContext},
    tool_handler,
};
use serde_json::json;
use tracing::info;

use crate::trello::TrelloClient;

use super::events::{EventLevel, HostEvents};
use super::resources::{BOARD_TEMPLATE, CARD_TEMPLATE, LIST_TEMPLATE, ResourceUri};

const INSTRUCTIONS: &str = "Trello MCP Server - Manage boards, lists, cards, checklists, labels, \
due dates and attachments. Load trello://board/{board_id}, trello://list/{list_id} or \
trello://card/{card_id} to pull a readable summary into context.";

/// Main MCP server coordinator
///
/// Tools are split by entity across `tools::*`; each file contributes a
/// router that is merged here.
#[derive(Clone)]
pub struct TrelloMcpServer {
    client: Arc<TrelloClient>,
    events: HostEvents,
    tool_router: ToolRouter<Self>,
}

impl TrelloMcpServer {
    pub fn new(client: impl Into<Arc<TrelloClient>>) -> Self {
        Self {
            client: client.into(),
            events: HostEvents::new(),
            tool_router: Self::board_tools()
                + Self::card_tools()
                + Self::checklist_tools()
                + Self::label_tools()
                + Self::attachment_tools(),
        }
    }

    pub fn client(&self) -> &TrelloClient {
        &self.client
    }

    /// Destination of per-call info and error events.
    pub fn events(&self) -> &HostEvents {
        &self.events
    }

    /// Get the combined tool router
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }

    /// The resource templates this server can render.
    pub fn resource_templates() -> Vec<ResourceTemplate> {
        [
            (
                BOARD_TEMPLATE,
                "board",
                "Board details with every list and its cards",
            ),
            (LIST_TEMPLATE, "list", "Cards in a list"),
            (
                CARD_TEMPLATE,
                "card",
                "Card details including due date and labels",
            ),
        ]
        .into_iter()
        .map(|(uri_template, name, description)| {
            RawResourceTemplate {
                uri_template: uri_template.to_string(),
                name: name.to_string(),
                title: None,
                description: Some(description.to_string()),
                mime_type: Some("text/plain".to_string()),
                icons: None,
            }
            .no_annotation()
        })
        .collect()
    }

    /// Render a `trello://` resource; unknown addresses are protocol errors.
    pub async fn read_uri(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let resource = ResourceUri::parse(uri).ok_or_else(|| {
            McpError::resource_not_found("resource_not_found", Some(json!({"uri": uri})))
        })?;

        info!(uri, "Reading resource");
        let text = resource.read(&self.client).await;

        Ok(ReadResourceResult::new(vec![ResourceContents::text(
            text, uri,
        )]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TrelloMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_logging()
                .build(),
        )
        .with_instructions(INSTRUCTIONS)
    }

    async fn on_initialized(&self, context: NotificationContext<RoleServer>) {
        info!("Client initialized; forwarding tool events");
        self.events.attach_peer(context.peer);
    }

    async fn set_level(
        &self,
        request: SetLevelRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<(), McpError> {
        let level: EventLevel = serde_json::to_value(request.level)
            .and_then(serde_json::from_value)
            .map_err(|e| {
                McpError::invalid_params("invalid_log_level", Some(json!({"error": e.to_string()})))
            })?;
        info!(?level, "Host log level changed");
        self.events.set_min_level(level);
        Ok(())
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            Self::resource_templates(),
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read_uri(&request.uri).await
    }
}
