//! Trello entities as consumed by the client.
//!
//! The remote store owns every record; these structs only model the fields the
//! server reads or renders. Unknown fields are ignored and everything except
//! `id` is optional or defaulted so partial responses still decode.

use chrono::{DateTime, Utc};
use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque remote identifier.
pub type Id = String;

/// A top-level container for lists and labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub closed: bool,
}

/// An ordered column of cards within a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloList {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub id_board: Option<Id>,
}

/// A unit of work within a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default, with = "crate::serde_utils::timestamp")]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_complete: bool,
    #[serde(default)]
    pub id_list: Option<Id>,
    #[serde(default)]
    pub id_board: Option<Id>,
    #[serde(default)]
    pub id_labels: Vec<Id>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub id_card: Option<Id>,
    #[serde(default)]
    pub id_board: Option<Id>,
    #[serde(default)]
    pub check_items: Vec<CheckItem>,
}

/// Completion state of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckItemState {
    Complete,
    #[default]
    Incomplete,
}

impl CheckItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckItemState::Complete => "complete",
            CheckItemState::Incomplete => "incomplete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckItem {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: CheckItemState,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub id_checklist: Option<Id>,
}

/// Fixed label palette accepted by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Blue,
    Sky,
    Lime,
    Pink,
    Black,
}

impl LabelColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelColor::Green => "green",
            LabelColor::Yellow => "yellow",
            LabelColor::Orange => "orange",
            LabelColor::Red => "red",
            LabelColor::Purple => "purple",
            LabelColor::Blue => "blue",
            LabelColor::Sky => "sky",
            LabelColor::Lime => "lime",
            LabelColor::Pink => "pink",
            LabelColor::Black => "black",
        }
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A colored, board-scoped tag.
///
/// `color` keeps the remote string so palette additions never break decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub id_board: Option<Id>,
}

/// A file or URL associated with a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub is_upload: bool,
    #[serde(default, with = "crate::serde_utils::timestamp")]
    pub date: Option<DateTime<Utc>>,
}

impl Attachment {
    /// Name used for the download endpoint: stored file name, then display
    /// name, then a literal fallback.
    pub fn download_name(&self) -> &str {
        [self.file_name.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or("download")
    }
}

/// Result of writing an attachment to local disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadedAttachment {
    pub success: bool,
    pub path: String,
    pub size: u64,
    pub name: String,
    pub attachment_id: Id,
}
