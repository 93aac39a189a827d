//! MCP tools for card attachments, including local file upload and download.

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
pub struct GetCardAttachmentsParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AttachmentParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "The ID of the attachment")]
    pub attachment_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddAttachmentUrlParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "URL to attach")]
    pub url: String,
    #[schemars(description = "Display name for the attachment (optional)")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddAttachmentFileParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "Path to a local file to upload")]
    pub file_path: String,
    #[schemars(description = "Display name for the attachment (optional, defaults to the file name)")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DownloadAttachmentParams {
    #[schemars(description = "The ID of the card")]
    pub card_id: String,
    #[schemars(description = "The ID of the attachment to download")]
    pub attachment_id: String,
    #[schemars(description = "Local path where the file will be saved. Existing files are overwritten.")]
    pub output_path: String,
}

// =============================================================================
// Attachment Tools
// =============================================================================

#[tool_router(router = attachment_tools, vis = "pub(crate)")]
impl TrelloMcpServer {
    #[tool(description = "List all attachments on a card.")]
    pub async fn get_card_attachments(
        &self,
        params: Parameters<GetCardAttachmentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let card_id = params.0.card_id;
        self.tool_call(
            "get_card_attachments",
            format!("get attachments for card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .run_list(self.client().get_card_attachments(&card_id), |attachments| {
            format!(
                "Retrieved {} attachments from card {card_id}",
                attachments.len()
            )
        })
        .await
    }

    #[tool(description = "Get metadata for a single attachment.")]
    pub async fn get_attachment(
        &self,
        params: Parameters<AttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let AttachmentParams {
            card_id,
            attachment_id,
        } = params.0;
        self.tool_call("get_attachment", format!("get attachment {attachment_id}"))
            .with("card_id", card_id.as_str())
            .with("attachment_id", attachment_id.as_str())
            .run(
                self.client().get_attachment(&card_id, &attachment_id),
                |attachment| {
                    format!(
                        "Retrieved attachment: {}",
                        attachment.name.as_deref().unwrap_or(&attachment_id)
                    )
                },
            )
            .await
    }

    #[tool(description = "Attach a URL to a card.")]
    pub async fn add_attachment_url(
        &self,
        params: Parameters<AddAttachmentUrlParams>,
    ) -> Result<CallToolResult, McpError> {
        let AddAttachmentUrlParams { card_id, url, name } = params.0;
        self.tool_call(
            "add_attachment_url",
            format!("add URL attachment to card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("url", url.as_str())
        .run(
            self.client()
                .add_attachment_url(&card_id, &url, name.as_deref()),
            |_| format!("Added URL attachment to card {card_id}"),
        )
        .await
    }

    #[tool(description = "Upload a local file as an attachment on a card.")]
    pub async fn add_attachment_file(
        &self,
        params: Parameters<AddAttachmentFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let AddAttachmentFileParams {
            card_id,
            file_path,
            name,
        } = params.0;
        self.tool_call(
            "add_attachment_file",
            format!("upload file attachment to card {card_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("file_path", file_path.as_str())
        .run(
            self.client()
                .add_attachment_file(&card_id, &file_path, name.as_deref()),
            |_| format!("Uploaded file attachment to card {card_id}"),
        )
        .await
    }

    #[tool(description = "Download an attachment from a card to a local file.")]
    pub async fn download_attachment(
        &self,
        params: Parameters<DownloadAttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let DownloadAttachmentParams {
            card_id,
            attachment_id,
            output_path,
        } = params.0;
        self.tool_call(
            "download_attachment",
            format!("download attachment {attachment_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("attachment_id", attachment_id.as_str())
        .with("output_path", output_path.as_str())
        .run(
            self.client()
                .download_attachment(&card_id, &attachment_id, &output_path),
            |_| format!("Downloaded attachment to {output_path}"),
        )
        .await
    }

    #[tool(description = "Delete an attachment from a card.")]
    pub async fn delete_attachment(
        &self,
        params: Parameters<AttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        let AttachmentParams {
            card_id,
            attachment_id,
        } = params.0;
        self.tool_call(
            "delete_attachment",
            format!("delete attachment {attachment_id}"),
        )
        .with("card_id", card_id.as_str())
        .with("attachment_id", attachment_id.as_str())
        .run_delete(
            self.client().delete_attachment(&card_id, &attachment_id),
            || format!("Deleted attachment {attachment_id} from card {card_id}"),
        )
        .await
    }
}
