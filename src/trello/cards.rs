//! Card operations, including moves and due dates.

use crate::trello::client::{Query, TrelloClient};
use crate::trello::error::TrelloResult;
use crate::trello::models::Card;

/// Fields to change on a card. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardUpdate {
    pub name: Option<String>,
    pub desc: Option<String>,
    /// Destination list, for moves.
    pub list_id: Option<String>,
    /// `Some(None)` clears the due date; `None` leaves it unchanged.
    pub due: Option<Option<String>>,
    pub due_complete: Option<bool>,
}

impl CardUpdate {
    fn into_query(self) -> Query {
        let query = Query::new()
            .opt("name", self.name)
            .opt("desc", self.desc)
            .opt("idList", self.list_id);
        let query = match self.due {
            Some(Some(due)) if !due.is_empty() => query.set("due", due),
            Some(_) => query.null("due"),
            None => query,
        };
        query.opt("dueComplete", self.due_complete)
    }
}

impl TrelloClient {
    pub async fn list_cards(&self, list_id: &str) -> TrelloResult<Vec<Card>> {
        self.get(&["lists", list_id, "cards"]).await
    }

    pub async fn get_card(&self, card_id: &str) -> TrelloResult<Card> {
        self.get(&["cards", card_id]).await
    }

    /// Create a card; `due` is ISO-8601 (`YYYY-MM-DDTHH:mm:ss.sssZ`).
    pub async fn create_card(
        &self,
        list_id: &str,
        name: &str,
        desc: Option<&str>,
        pos: Option<&str>,
        due: Option<&str>,
    ) -> TrelloResult<Card> {
        let query = Query::new()
            .set("idList", list_id)
            .set("name", name)
            .opt("desc", desc)
            .opt("pos", pos)
            .opt("due", due);
        self.post(&["cards"], query).await
    }

    pub async fn update_card(&self, card_id: &str, update: CardUpdate) -> TrelloResult<Card> {
        self.put(&["cards", card_id], update.into_query()).await
    }

    pub async fn delete_card(&self, card_id: &str) -> TrelloResult<serde_json::Value> {
        self.delete(&["cards", card_id]).await
    }

    /// Move a card to another list, optionally at a position within it.
    pub async fn move_card(
        &self,
        card_id: &str,
        list_id: &str,
        pos: Option<&str>,
    ) -> TrelloResult<Card> {
        let query = Query::new().set("idList", list_id).opt("pos", pos);
        self.put(&["cards", card_id], query).await
    }

    pub async fn set_card_due_date(&self, card_id: &str, due_date: &str) -> TrelloResult<Card> {
        self.put(&["cards", card_id], Query::new().set("due", due_date))
            .await
    }

    pub async fn mark_due_date_complete(
        &self,
        card_id: &str,
        complete: bool,
    ) -> TrelloResult<Card> {
        self.put(&["cards", card_id], Query::new().set("dueComplete", complete))
            .await
    }

    /// Remove the due date; sends an explicit null rather than omitting `due`.
    pub async fn clear_card_due_date(&self, card_id: &str) -> TrelloResult<Card> {
        self.put(&["cards", card_id], Query::new().null("due"))
            .await
    }
}
