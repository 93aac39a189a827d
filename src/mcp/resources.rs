//! Read-only composite views served as MCP resources.
//!
//! Each view renders plain text meant to be loaded into an assistant's
//! context. Top-level failures collapse into a single `Error loading ...`
//! line; a failure to load one list's cards only affects that list.

use tracing::{debug, warn};

use crate::serde_utils::timestamp;
use crate::trello::{Board, Card, TrelloClient, TrelloList, TrelloResult};

pub const BOARD_TEMPLATE: &str = "trello://board/{board_id}";
pub const LIST_TEMPLATE: &str = "trello://list/{list_id}";
pub const CARD_TEMPLATE: &str = "trello://card/{card_id}";

const SCHEME: &str = "trello://";

/// A parsed `trello://` resource address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Board(String),
    List(String),
    Card(String),
}

impl ResourceUri {
    /// Parse `trello://{board|list|card}/{id}`; anything else is `None`.
    pub fn parse(uri: &str) -> Option<Self> {
        let rest = uri.strip_prefix(SCHEME)?;
        let (kind, id) = rest.split_once('/')?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        let id = id.to_string();
        match kind {
            "board" => Some(Self::Board(id)),
            "list" => Some(Self::List(id)),
            "card" => Some(Self::Card(id)),
            _ => None,
        }
    }

    /// Render the view this address names.
    pub async fn read(&self, client: &TrelloClient) -> String {
        match self {
            Self::Board(id) => board_view(client, id).await,
            Self::List(id) => list_view(client, id).await,
            Self::Card(id) => card_view(client, id).await,
        }
    }
}

pub async fn board_view(client: &TrelloClient, board_id: &str) -> String {
    let loaded = async {
        let board = client.get_board(board_id).await?;
        let lists = client.get_board_lists(board_id).await?;
        TrelloResult::Ok((board, lists))
    };

    let (board, lists) = match loaded.await {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!(board_id, error = %e, "Failed to load board resource");
            return format!("Error loading board {board_id}: {e}");
        }
    };

    let mut sections = Vec::with_capacity(lists.len());
    for list in lists {
        let cards = client.list_cards(&list.id).await;
        if let Err(e) = &cards {
            debug!(list_id = %list.id, error = %e, "Failed to load cards for board view");
        }
        sections.push((list, cards));
    }

    render_board(&board, &sections)
}

pub async fn list_view(client: &TrelloClient, list_id: &str) -> String {
    match client.list_cards(list_id).await {
        Ok(cards) => render_list(list_id, &cards),
        Err(e) => {
            warn!(list_id, error = %e, "Failed to load list resource");
            format!("Error loading list {list_id}: {e}")
        }
    }
}

pub async fn card_view(client: &TrelloClient, card_id: &str) -> String {
    match client.get_card(card_id).await {
        Ok(card) => render_card(&card),
        Err(e) => {
            warn!(card_id, error = %e, "Failed to load card resource");
            format!("Error loading card {card_id}: {e}")
        }
    }
}

/// Render a board with each list's cards, or the list's load failure.
pub fn render_board(board: &Board, lists: &[(TrelloList, TrelloResult<Vec<Card>>)]) -> String {
    let mut out = vec![
        format!("Board: {}", board.name),
        format!("URL: {}", board.url.as_deref().unwrap_or("N/A")),
        format!(
            "Description: {}",
            board.desc.as_deref().unwrap_or("No description")
        ),
        format!("\nLists ({}):", lists.len()),
    ];

    for (list, cards) in lists {
        out.push(format!("\n  - {} (ID: {})", list.name, list.id));
        match cards {
            Ok(cards) if cards.is_empty() => out.push("    No cards".to_string()),
            Ok(cards) => {
                out.push(format!("    Cards ({}):", cards.len()));
                for card in cards {
                    out.push(format!("      • {} (ID: {})", card.name, card.id));
                    if let Some(desc) = non_empty(&card.desc) {
                        out.push(format!("        Description: {desc}"));
                    }
                }
            }
            Err(_) => out.push("    Error loading cards".to_string()),
        }
    }

    out.join("\n")
}

pub fn render_list(list_id: &str, cards: &[Card]) -> String {
    let mut out = vec![
        format!("List ID: {list_id}"),
        format!("\nCards ({}):", cards.len()),
    ];

    if cards.is_empty() {
        out.push("  No cards in this list".to_string());
    }
    for card in cards {
        out.push(format!("\n  • {} (ID: {})", card.name, card.id));
        if let Some(desc) = non_empty(&card.desc) {
            out.push(format!("    Description: {desc}"));
        }
        if let Some(url) = non_empty(&card.url) {
            out.push(format!("    URL: {url}"));
        }
    }

    out.join("\n")
}

pub fn render_card(card: &Card) -> String {
    let labels: Vec<&str> = card
        .labels
        .iter()
        .map(|label| or_placeholder(&label.name, "Unnamed"))
        .collect();
    let due = card
        .due
        .as_ref()
        .map(timestamp::format)
        .unwrap_or_else(|| "None".to_string());

    [
        format!("Card: {}", card.name),
        format!("ID: {}", card.id),
        format!("URL: {}", card.url.as_deref().unwrap_or("N/A")),
        format!(
            "Description: {}",
            card.desc.as_deref().unwrap_or("No description")
        ),
        format!("List ID: {}", card.id_list.as_deref().unwrap_or("N/A")),
        format!("Board ID: {}", card.id_board.as_deref().unwrap_or("N/A")),
        format!("Due Date: {due}"),
        format!("Labels: {}", labels.join(", ")),
    ]
    .join("\n")
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
