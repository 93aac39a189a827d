//! MCP tools for checklists and checklist items.

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
use crate::trello::CheckItemState;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCardChecklistsParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateChecklistParams {
    #[schemars(description = "The ID of the card to add the checklist to")]
    pub card_id: String,
    #[schemars(description = "Name of the checklist")]
    pub name: String,
    #[schemars(description = "Position: 'top', 'bottom', or a positive number (optional)")]
    pub pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChecklistIdParams {
    #[schemars(description = "The ID of the checklist")]
    pub checklist_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateChecklistParams {
    #[schemars(description = "The ID of the checklist to update")]
    pub checklist_id: String,
    #[schemars(description = "New name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New position (optional)")]
    pub pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddChecklistItemParams {
    #[schemars(description = "The ID of the checklist")]
    pub checklist_id: String,
    #[schemars(description = "Text of the item")]
    pub name: String,
    #[schemars(description = "Whether the item starts checked (optional)")]
    pub checked: Option<bool>,
    #[schemars(description = "Position: 'top', 'bottom', or a positive number (optional)")]
    pub pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateChecklistItemParams {
    #[schemars(description = "The ID of the card that holds the checklist")]
    pub card_id: String,
    #[schemars(description = "The ID of the checklist item to update")]
    pub checklist_item_id: String,
    #[schemars(description = "New text (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New state: 'complete' or 'incomplete' (optional)")]
    pub state: Option<CheckItemState>,
    #[schemars(description = "New position (optional)")]
    pub pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteChecklistItemParams {
    #[schemars(description = "The ID of the checklist")]
    pub checklist_id: String,
    #[schemars(description = "The ID of the checklist item to delete")]
    pub checklist_item_id: String,
}

// =============================================================================
// Checklist Tools
// =============================================================================

#[tool_router(router = checklist_tools, vis = "pub(crate)")]
impl TrelloMcpServer {
    #[tool(description = "Get all checklists on a card, with their items.")]
    pub async fn get_card_checklists(
        &self,
        params: Parameters<GetCardChecklistsParams>,
    ) -> Result<CallToolResult, McpError> {
        let card_id = params.0.card_id;
        self.tool_call(
            "get_card_checklists",
            format!("get checklists for card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .run_list(self.client().get_card_checklists(&card_id), |checklists| {
            format!(
                "Retrieved {} checklists from card {card_id}",
                checklists.len()
            )
        })
        .await
    }

    #[tool(description = "Create a checklist on a card.")]
    pub async fn create_checklist(
        &self,
        params: Parameters<CreateChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateChecklistParams { card_id, name, pos } = params.0;
        self.tool_call(
            "create_checklist",
            format!("create checklist '{name}' on card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("name", name.as_str())
        .run(
            self.client()
                .create_checklist(&card_id, &name, pos.as_deref()),
            |checklist| format!("Created checklist '{}' on card {card_id}", checklist.name),
        )
        .await
    }

    #[tool(description = "Get a checklist by ID.")]
    pub async fn get_checklist(
        &self,
        params: Parameters<ChecklistIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let checklist_id = params.0.checklist_id;
        self.tool_call("get_checklist", format!("get checklist {checklist_id}"))
            .with("checklist_id", checklist_id.as_str())
            .run(self.client().get_checklist(&checklist_id), |checklist| {
                format!("Retrieved checklist: {}", checklist.name)
            })
            .await
    }

    #[tool(description = "Rename or reposition a checklist.")]
    pub async fn update_checklist(
        &self,
        params: Parameters<UpdateChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateChecklistParams {
            checklist_id,
            name,
            pos,
        } = params.0;
        self.tool_call(
            "update_checklist",
            format!("update checklist {checklist_id}"),
        )
        .with("checklist_id", checklist_id.as_str())
        .run(
            self.client()
                .update_checklist(&checklist_id, name.as_deref(), pos.as_deref()),
            |_| format!("Updated checklist {checklist_id}"),
        )
        .await
    }

    #[tool(description = "Delete a checklist.")]
    pub async fn delete_checklist(
        &self,
        params: Parameters<ChecklistIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let checklist_id = params.0.checklist_id;
        self.tool_call(
            "delete_checklist",
            format!("delete checklist {checklist_id}"),
        )
        .with("checklist_id", checklist_id.as_str())
        .run_delete(self.client().delete_checklist(&checklist_id), || {
            format!("Deleted checklist {checklist_id}")
        })
        .await
    }

    #[tool(description = "Get all items of a checklist.")]
    pub async fn get_checklist_items(
        &self,
        params: Parameters<ChecklistIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let checklist_id = params.0.checklist_id;
        self.tool_call(
            "get_checklist_items",
            format!("get items for checklist {checklist_id}"),
        )
        .with("checklist_id", checklist_id.as_str())
        .run_list(self.client().get_checklist_items(&checklist_id), |items| {
            format!(
                "Retrieved {} items from checklist {checklist_id}",
                items.len()
            )
        })
        .await
    }

    #[tool(description = "Add an item to a checklist.")]
    pub async fn add_checklist_item(
        &self,
        params: Parameters<AddChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let AddChecklistItemParams {
            checklist_id,
            name,
            checked,
            pos,
        } = params.0;
        self.tool_call(
            "add_checklist_item",
            format!("add item to checklist {checklist_id}"),
        )
        .with("checklist_id", checklist_id.as_str())
        .with("name", name.as_str())
        .run(
            self.client()
                .add_checklist_item(&checklist_id, &name, checked, pos.as_deref()),
            |item| format!("Added item '{}' to checklist {checklist_id}", item.name),
        )
        .await
    }

    #[tool(description = "Update a checklist item's text, state or position.")]
    pub async fn update_checklist_item(
        &self,
        params: Parameters<UpdateChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateChecklistItemParams {
            card_id,
            checklist_item_id,
            name,
            state,
            pos,
        } = params.0;
        self.tool_call(
            "update_checklist_item",
            format!("update checklist item {checklist_item_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("checklist_item_id", checklist_item_id.as_str())
        .run(
            self.client().update_checklist_item(
                &card_id,
                &checklist_item_id,
                name.as_deref(),
                state,
                pos.as_deref(),
            ),
            |_| format!("Updated checklist item {checklist_item_id}"),
        )
        .await
    }

    #[tool(description = "Delete an item from a checklist.")]
    pub async fn delete_checklist_item(
        &self,
        params: Parameters<DeleteChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let DeleteChecklistItemParams {
            checklist_id,
            checklist_item_id,
        } = params.0;
        self.tool_call(
            "delete_checklist_item",
            format!("delete checklist item {checklist_item_id}"),
        )
        .with("checklist_id", checklist_id.as_str())
        .with("checklist_item_id", checklist_item_id.as_str())
        .run_delete(
            self.client()
                .delete_checklist_item(&checklist_id, &checklist_item_id),
            || format!("Deleted checklist item {checklist_item_id}"),
        )
        .await
    }
}
