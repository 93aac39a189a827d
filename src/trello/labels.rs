//! Label operations, board-scoped and per-card.

use reqwest::Method;

use crate::trello::client::{Query, TrelloClient};
use crate::trello::error::TrelloResult;
use crate::trello::models::{Card, Id, Label, LabelColor};

impl TrelloClient {
    pub async fn get_board_labels(&self, board_id: &str) -> TrelloResult<Vec<Label>> {
        self.get(&["boards", board_id, "labels"]).await
    }

    /// Create a label; `color: None` creates an uncolored label.
    pub async fn create_label(
        &self,
        board_id: &str,
        name: &str,
        color: Option<LabelColor>,
    ) -> TrelloResult<Label> {
        let query = Query::new()
            .set("idBoard", board_id)
            .set("name", name)
            .opt("color", color);
        self.post(&["labels"], query).await
    }

    pub async fn get_label(&self, label_id: &str) -> TrelloResult<Label> {
        self.get(&["labels", label_id]).await
    }

    /// Update a label. A supplied name is sent even when empty.
    pub async fn update_label(
        &self,
        label_id: &str,
        name: Option<&str>,
        color: Option<LabelColor>,
    ) -> TrelloResult<Label> {
        let mut query = Query::new();
        if let Some(name) = name {
            query = query.set("name", name);
        }
        let query = query.opt("color", color);
        self.put(&["labels", label_id], query).await
    }

    pub async fn delete_label(&self, label_id: &str) -> TrelloResult<serde_json::Value> {
        self.delete(&["labels", label_id]).await
    }

    pub async fn get_card_labels(&self, card_id: &str) -> TrelloResult<Vec<Label>> {
        self.get(&["cards", card_id, "labels"]).await
    }

    /// Attach a label; the remote answers with the card's label ids.
    pub async fn add_label_to_card(&self, card_id: &str, label_id: &str) -> TrelloResult<Vec<Id>> {
        self.post(
            &["cards", card_id, "idLabels"],
            Query::new().set("value", label_id),
        )
        .await
    }

    pub async fn remove_label_from_card(
        &self,
        card_id: &str,
        label_id: &str,
    ) -> TrelloResult<serde_json::Value> {
        self.request(
            Method::DELETE,
            &["cards", card_id, "idLabels", label_id],
            Query::new(),
            None,
        )
        .await
    }

    /// Replace every label on a card. An empty slice removes them all.
    pub async fn set_card_labels(&self, card_id: &str, label_ids: &[String]) -> TrelloResult<Card> {
        self.put(&["cards", card_id], Query::new().list("idLabels", label_ids))
            .await
    }
}
