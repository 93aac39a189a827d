//! MCP tools for boards and lists.

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

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardParams {
    #[schemars(description = "The ID of the board to retrieve")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateBoardParams {
    #[schemars(description = "Name of the new board")]
    pub name: String,
    #[schemars(description = "Board description (optional)")]
    pub desc: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardListsParams {
    #[schemars(description = "The ID of the board")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "The ID of the board to add the list to")]
    pub board_id: String,
    #[schemars(description = "Name of the new list")]
    pub name: String,
    #[schemars(description = "Position: 'top', 'bottom', or a positive number (optional)")]
    pub pos: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ArchiveListParams {
    #[schemars(description = "The ID of the list to archive")]
    pub list_id: String,
}

// =============================================================================
// Board Tools
// =============================================================================

#[tool_router(router = board_tools, vis = "pub(crate)")]
impl TrelloMcpServer {
    #[tool(description = "List all Trello boards for the authenticated user.")]
    pub async fn list_boards(&self) -> Result<CallToolResult, McpError> {
        self.tool_call("list_boards", "list boards")
            .run_list(self.client().list_boards(), |boards| {
                format!("Retrieved {} boards", boards.len())
            })
            .await
    }

    #[tool(description = "Get details of a specific Trello board.")]
    pub async fn get_board(
        &self,
        params: Parameters<GetBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        let board_id = params.0.board_id;
        self.tool_call("get_board", format!("get board {board_id}"))
            .with("board_id", board_id.as_str())
            .run(self.client().get_board(&board_id), |board| {
                format!("Retrieved board: {}", board.name)
            })
            .await
    }

    #[tool(description = "Create a new Trello board.")]
    pub async fn create_board(
        &self,
        params: Parameters<CreateBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateBoardParams { name, desc } = params.0;
        self.tool_call("create_board", format!("create board '{name}'"))
            .with("name", name.as_str())
            .run(
                self.client().create_board(&name, desc.as_deref()),
                |board| format!("Created board: {}", board.name),
            )
            .await
    }

    #[tool(description = "Get all open lists on a Trello board.")]
    pub async fn get_board_lists(
        &self,
        params: Parameters<GetBoardListsParams>,
    ) -> Result<CallToolResult, McpError> {
        let board_id = params.0.board_id;
        self.tool_call("get_board_lists", format!("get lists for board {board_id}"))
            .with("board_id", board_id.as_str())
            .run_list(self.client().get_board_lists(&board_id), |lists| {
                format!("Retrieved {} lists from board {board_id}", lists.len())
            })
            .await
    }

    #[tool(description = "Create a new list on a Trello board.")]
    pub async fn create_list(
        &self,
        params: Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateListParams {
            board_id,
            name,
            pos,
        } = params.0;
        self.tool_call(
            "create_list",
            format!("create list '{name}' on board {board_id}"),
        )
        .with("board_id", board_id.as_str())
        .with("name", name.as_str())
        .run(
            self.client().create_list(&board_id, &name, pos.as_deref()),
            |list| format!("Created list '{}' on board {board_id}", list.name),
        )
        .await
    }

    #[tool(description = "Archive (close) a Trello list.")]
    pub async fn archive_list(
        &self,
        params: Parameters<ArchiveListParams>,
    ) -> Result<CallToolResult, McpError> {
        let list_id = params.0.list_id;
        self.tool_call("archive_list", format!("archive list {list_id}"))
            .with("list_id", list_id.as_str())
            .run(self.client().archive_list(&list_id), |_| {
                format!("Archived list {list_id}")
            })
            .await
    }
}
