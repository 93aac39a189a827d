//! MCP tools for cards and their due dates.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::mcp::server::TrelloMcpServer;
use crate::trello::CardUpdate;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListCardsParams {
    #[schemars(description = "The ID of the list")]
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CardIdParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCardParams {
    #[schemars(description = "The ID of the list to add the card to")]
    pub list_id: String,
    #[schemars(description = "Name of the card")]
    pub name: String,
    #[schemars(description = "Card description (optional)")]
    pub desc: Option<String>,
    #[schemars(description = "Position: 'top', 'bottom', or a positive number (optional)")]
    pub pos: Option<String>,
    #[schemars(description = "Due date in ISO 8601 format, e.g. '2025-12-31T23:59:59.000Z' (optional)")]
    pub due: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCardParams {
    #[schemars(description = "The ID of the card to update")]
    pub card_id: String,
    #[schemars(description = "New name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New description (optional)")]
    pub desc: Option<String>,
    #[schemars(description = "Move the card to this list (optional)")]
    pub list_id: Option<String>,
    #[schemars(
        description = "Due date in ISO 8601 format. Pass null to clear the due date; omit to leave it unchanged."
    )]
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    pub due: Option<Option<String>>,
    #[schemars(description = "Mark the due date complete or incomplete (optional)")]
    pub due_complete: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MoveCardParams {
    #[schemars(description = "The ID of the card to move")]
    pub card_id: String,
    #[schemars(description = "The ID of the destination list")]
    pub list_id: String,
    #[schemars(description = "Position in the destination list (optional)")]
    pub pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetDueDateParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "Due date in ISO 8601 format, e.g. '2025-12-31T23:59:59.000Z'")]
    pub due_date: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MarkDueCompleteParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "True to mark complete, false to mark incomplete (default: true)")]
    #[serde(default = "default_complete")]
    pub complete: bool,
}

fn default_complete() -> bool {
    true
}

// =============================================================================
// Card Tools
// =============================================================================

#[tool_router(router = card_tools, vis = "pub(crate)")]
impl TrelloMcpServer {
    #[tool(description = "List all open cards in a Trello list.")]
    pub async fn list_cards(
        &self,
        params: Parameters<ListCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        let list_id = params.0.list_id;
        self.tool_call("list_cards", format!("get cards for list {list_id}"))
            .with("list_id", list_id.as_str())
            .run_list(self.client().list_cards(&list_id), |cards| {
                format!("Retrieved {} cards from list {list_id}", cards.len())
            })
            .await
    }

    #[tool(description = "Get details of a specific Trello card, including its labels.")]
    pub async fn get_card(
        &self,
        params: Parameters<CardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let card_id = params.0.card_id;
        self.tool_call("get_card", format!("get card {card_id}"))
            .with("card_id", card_id.as_str())
            .run(self.client().get_card(&card_id), |card| {
                format!("Retrieved card: {}", card.name)
            })
            .await
    }

    #[tool(description = "Create a new card in a Trello list.")]
    pub async fn create_card(
        &self,
        params: Parameters<CreateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateCardParams {
            list_id,
            name,
            desc,
            pos,
            due,
        } = params.0;
        self.tool_call(
            "create_card",
            format!("create card '{name}' in list {list_id}"),
        )
        .with("list_id", list_id.as_str())
        .with("name", name.as_str())
        .run(
            self.client().create_card(
                &list_id,
                &name,
                desc.as_deref(),
                pos.as_deref(),
                due.as_deref(),
            ),
            |card| format!("Created card '{}' in list {list_id}", card.name),
        )
        .await
    }

    #[tool(
        description = "Update fields of a Trello card. Only supplied fields change; pass due as null to clear the due date."
    )]
    pub async fn update_card(
        &self,
        params: Parameters<UpdateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateCardParams {
            card_id,
            name,
            desc,
            list_id,
            due,
            due_complete,
        } = params.0;
        let update = CardUpdate {
            name,
            desc,
            list_id,
            due,
            due_complete,
        };
        self.tool_call("update_card", format!("update card {card_id}"))
            .with("card_id", card_id.as_str())
            .run(self.client().update_card(&card_id, update), |_| {
                format!("Updated card {card_id}")
            })
            .await
    }

    #[tool(description = "Permanently delete a Trello card.")]
    pub async fn delete_card(
        &self,
        params: Parameters<CardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let card_id = params.0.card_id;
        self.tool_call("delete_card", format!("delete card {card_id}"))
            .with("card_id", card_id.as_str())
            .run_delete(self.client().delete_card(&card_id), || {
                format!("Deleted card {card_id}")
            })
            .await
    }

    #[tool(description = "Move a card to a different list.")]
    pub async fn move_card(
        &self,
        params: Parameters<MoveCardParams>,
    ) -> Result<CallToolResult, McpError> {
        let MoveCardParams {
            card_id,
            list_id,
            pos,
        } = params.0;
        self.tool_call(
            "move_card",
            format!("move card {card_id} to list {list_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("list_id", list_id.as_str())
        .run(
            self.client().move_card(&card_id, &list_id, pos.as_deref()),
            |_| format!("Moved card {card_id} to list {list_id}"),
        )
        .await
    }

    #[tool(description = "Set the due date of a card.")]
    pub async fn set_card_due_date(
        &self,
        params: Parameters<SetDueDateParams>,
    ) -> Result<CallToolResult, McpError> {
        let SetDueDateParams { card_id, due_date } = params.0;
        self.tool_call(
            "set_card_due_date",
            format!("set due date on card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("due_date", due_date.as_str())
        .run(
            self.client().set_card_due_date(&card_id, &due_date),
            |_| format!("Set due date on card {card_id} to {due_date}"),
        )
        .await
    }

    #[tool(description = "Mark a card's due date as complete or incomplete.")]
    pub async fn mark_due_date_complete(
        &self,
        params: Parameters<MarkDueCompleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let MarkDueCompleteParams { card_id, complete } = params.0;
        let state = if complete { "complete" } else { "incomplete" };
        self.tool_call(
            "mark_due_date_complete",
            format!("mark due date on card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .run(
            self.client().mark_due_date_complete(&card_id, complete),
            |_| format!("Marked due date {state} on card {card_id}"),
        )
        .await
    }

    #[tool(description = "Remove the due date from a card.")]
    pub async fn clear_card_due_date(
        &self,
        params: Parameters<CardIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let card_id = params.0.card_id;
        self.tool_call(
            "clear_card_due_date",
            format!("clear due date on card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .run(self.client().clear_card_due_date(&card_id), |_| {
            format!("Cleared due date on card {card_id}")
        })
        .await
    }
}
