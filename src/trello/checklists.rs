//! Checklist and checklist item operations.

use crate::trello::client::{Query, TrelloClient};
use crate::trello::error::TrelloResult;
use crate::trello::models::{CheckItem, CheckItemState, Checklist};

impl TrelloClient {
    pub async fn get_card_checklists(&self, card_id: &str) -> TrelloResult<Vec<Checklist>> {
        self.get(&["cards", card_id, "checklists"]).await
    }

    pub async fn create_checklist(
        &self,
        card_id: &str,
        name: &str,
        pos: Option<&str>,
    ) -> TrelloResult<Checklist> {
        let query = Query::new()
            .set("idCard", card_id)
            .opt("name", Some(name))
            .opt("pos", pos);
        self.post(&["checklists"], query).await
    }

    pub async fn get_checklist(&self, checklist_id: &str) -> TrelloResult<Checklist> {
        self.get(&["checklists", checklist_id]).await
    }

    pub async fn update_checklist(
        &self,
        checklist_id: &str,
        name: Option<&str>,
        pos: Option<&str>,
    ) -> TrelloResult<Checklist> {
        let query = Query::new().opt("name", name).opt("pos", pos);
        self.put(&["checklists", checklist_id], query).await
    }

    pub async fn delete_checklist(&self, checklist_id: &str) -> TrelloResult<serde_json::Value> {
        self.delete(&["checklists", checklist_id]).await
    }

    pub async fn get_checklist_items(&self, checklist_id: &str) -> TrelloResult<Vec<CheckItem>> {
        self.get(&["checklists", checklist_id, "checkItems"]).await
    }

    pub async fn add_checklist_item(
        &self,
        checklist_id: &str,
        name: &str,
        checked: Option<bool>,
        pos: Option<&str>,
    ) -> TrelloResult<CheckItem> {
        let query = Query::new()
            .set("name", name)
            .opt("checked", checked)
            .opt("pos", pos);
        self.post(&["checklists", checklist_id, "checkItems"], query)
            .await
    }

    /// Update an item through its card, the only route that accepts `state`.
    pub async fn update_checklist_item(
        &self,
        card_id: &str,
        checklist_item_id: &str,
        name: Option<&str>,
        state: Option<CheckItemState>,
        pos: Option<&str>,
    ) -> TrelloResult<CheckItem> {
        let query = Query::new()
            .opt("name", name)
            .opt("state", state.map(|s| s.as_str()))
            .opt("pos", pos);
        self.put(&["cards", card_id, "checkItem", checklist_item_id], query)
            .await
    }

    pub async fn delete_checklist_item(
        &self,
        checklist_id: &str,
        checklist_item_id: &str,
    ) -> TrelloResult<serde_json::Value> {
        self.delete(&["checklists", checklist_id, "checkItems", checklist_item_id])
            .await
    }
}
