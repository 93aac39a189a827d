//! Board and list operations.

use reqwest::Method;

use crate::trello::client::{Query, TrelloClient};
use crate::trello::error::TrelloResult;
use crate::trello::models::{Board, TrelloList};

impl TrelloClient {
    /// All boards visible to the authenticated member.
    pub async fn list_boards(&self) -> TrelloResult<Vec<Board>> {
        self.get(&["members", "me", "boards"]).await
    }

    pub async fn get_board(&self, board_id: &str) -> TrelloResult<Board> {
        self.get(&["boards", board_id]).await
    }

    pub async fn create_board(&self, name: &str, desc: Option<&str>) -> TrelloResult<Board> {
        let query = Query::new().set("name", name).opt("desc", desc);
        self.post(&["boards"], query).await
    }

    pub async fn get_board_lists(&self, board_id: &str) -> TrelloResult<Vec<TrelloList>> {
        self.get(&["boards", board_id, "lists"]).await
    }

    /// Create a list; `pos` is `top`, `bottom` or a positive number.
    pub async fn create_list(
        &self,
        board_id: &str,
        name: &str,
        pos: Option<&str>,
    ) -> TrelloResult<TrelloList> {
        let query = Query::new().set("name", name).opt("pos", pos);
        self.post(&["boards", board_id, "lists"], query).await
    }

    /// Archive (close) a list.
    pub async fn archive_list(&self, list_id: &str) -> TrelloResult<TrelloList> {
        self.request(
            Method::PUT,
            &["lists", list_id, "closed"],
            Query::new().set("value", "true"),
            None,
        )
        .await
    }
}
