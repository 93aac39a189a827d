//! MCP tools for board labels and card labelling.

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
use crate::trello::LabelColor;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardLabelsParams {
    #[schemars(description = "The ID of the board")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "The ID of the board to add the label to")]
    pub board_id: String,
    #[schemars(description = "Name of the label")]
    pub name: String,
    #[schemars(
        description = "Color: green, yellow, orange, red, purple, blue, sky, lime, pink or black. Omit for an uncolored label."
    )]
    pub color: Option<LabelColor>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LabelIdParams {
    #[schemars(description = "The ID of the label")]
    pub label_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateLabelParams {
    #[schemars(description = "The ID of the label to update")]
    pub label_id: String,
    #[schemars(description = "New name (optional, may be empty)")]
    pub name: Option<String>,
    #[schemars(description = "New color from the label palette (optional)")]
    pub color: Option<LabelColor>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCardLabelsParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CardLabelParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "The ID of the label")]
    pub label_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetCardLabelsParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "Label IDs that replace the card's labels. An empty list removes all labels.")]
    pub label_ids: Vec<String>,
}

// =============================================================================
// Label Tools
// =============================================================================

#[tool_router(router = label_tools, vis = "pub(crate)")]
impl TrelloMcpServer {
    #[tool(description = "Get all labels defined on a board.")]
    pub async fn get_board_labels(
        &self,
        params: Parameters<GetBoardLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        let board_id = params.0.board_id;
        self.tool_call(
            "get_board_labels",
            format!("get labels for board {board_id}"),
        )
        .with("board_id", board_id.as_str())
        .run_list(self.client().get_board_labels(&board_id), |labels| {
            format!("Retrieved {} labels from board {board_id}", labels.len())
        })
        .await
    }

    #[tool(description = "Create a label on a board.")]
    pub async fn create_label(
        &self,
        params: Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateLabelParams {
            board_id,
            name,
            color,
        } = params.0;
        self.tool_call(
            "create_label",
            format!("create label '{name}' on board {board_id}"),
        )
        .with("board_id", board_id.as_str())
        .with("name", name.as_str())
        .run(
            self.client().create_label(&board_id, &name, color),
            |label| format!("Created label '{}' on board {board_id}", label.name),
        )
        .await
    }

    #[tool(description = "Get a label by ID.")]
    pub async fn get_label(
        &self,
        params: Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let label_id = params.0.label_id;
        self.tool_call("get_label", format!("get label {label_id}"))
            .with("label_id", label_id.as_str())
            .run(self.client().get_label(&label_id), |label| {
                format!("Retrieved label: {}", label.name)
            })
            .await
    }

    #[tool(description = "Rename or recolor a label.")]
    pub async fn update_label(
        &self,
        params: Parameters<UpdateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateLabelParams {
            label_id,
            name,
            color,
        } = params.0;
        self.tool_call("update_label", format!("update label {label_id}"))
            .with("label_id", label_id.as_str())
            .run(
                self.client()
                    .update_label(&label_id, name.as_deref(), color),
                |_| format!("Updated label {label_id}"),
            )
            .await
    }

    #[tool(description = "Delete a label from its board and every card using it.")]
    pub async fn delete_label(
        &self,
        params: Parameters<LabelIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let label_id = params.0.label_id;
        self.tool_call("delete_label", format!("delete label {label_id}"))
            .with("label_id", label_id.as_str())
            .run_delete(self.client().delete_label(&label_id), || {
                format!("Deleted label {label_id}")
            })
            .await
    }

    #[tool(description = "Get the labels applied to a card.")]
    pub async fn get_card_labels(
        &self,
        params: Parameters<GetCardLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        let card_id = params.0.card_id;
        self.tool_call("get_card_labels", format!("get labels for card {card_id}"))
            .with("card_id", card_id.as_str())
            .run_list(self.client().get_card_labels(&card_id), |labels| {
                format!("Retrieved {} labels from card {card_id}", labels.len())
            })
            .await
    }

    #[tool(description = "Apply an existing board label to a card.")]
    pub async fn add_label_to_card(
        &self,
        params: Parameters<CardLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let CardLabelParams { card_id, label_id } = params.0;
        self.tool_call(
            "add_label_to_card",
            format!("add label {label_id} to card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("label_id", label_id.as_str())
        .run(
            self.client().add_label_to_card(&card_id, &label_id),
            |_| format!("Added label {label_id} to card {card_id}"),
        )
        .await
    }

    #[tool(description = "Remove a label from a card. The label stays on the board.")]
    pub async fn remove_label_from_card(
        &self,
        params: Parameters<CardLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        let CardLabelParams { card_id, label_id } = params.0;
        self.tool_call(
            "remove_label_from_card",
            format!("remove label {label_id} from card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("label_id", label_id.as_str())
        .run(
            self.client().remove_label_from_card(&card_id, &label_id),
            |_| format!("Removed label {label_id} from card {card_id}"),
        )
        .await
    }

    #[tool(description = "Replace all labels on a card. An empty list clears every label.")]
    pub async fn set_card_labels(
        &self,
        params: Parameters<SetCardLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        let SetCardLabelsParams { card_id, label_ids } = params.0;
        self.tool_call("set_card_labels", format!("set labels on card {card_id}"))
            .with("card_id", card_id.as_str())
            .with("label_ids", label_ids.clone())
            .run(
                self.client().set_card_labels(&card_id, &label_ids),
                |_| format!("Set {} labels on card {card_id}", label_ids.len()),
            )
            .await
    }
}
