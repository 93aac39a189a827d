use crate::trello::CheckItemState;
use crate::trello::test_helpers::{client_for, exact_query, query_with};

#[tokio::test]
async fn test_create_checklist_on_card() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/checklists")
        .match_query(exact_query(&[("idCard", "c1"), ("name", "Launch")]))
        .with_status(200)
        .with_body(r#"{"id": "cl1", "name": "Launch", "idCard": "c1", "checkItems": []}"#)
        .create_async()
        .await;

    let checklist = client_for(&server)
        .create_checklist("c1", "Launch", None)
        .await
        .unwrap();

    assert_eq!(checklist.name, "Launch");
    assert_eq!(checklist.id_card.as_deref(), Some("c1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_card_checklists_with_items() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/cards/c1/checklists")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body(
            r#"[{"id": "cl1", "name": "Launch", "checkItems": [
                {"id": "i1", "name": "Tag release", "state": "complete"},
                {"id": "i2", "name": "Announce", "state": "incomplete"}
            ]}]"#,
        )
        .create_async()
        .await;

    let checklists = client_for(&server).get_card_checklists("c1").await.unwrap();

    assert_eq!(checklists.len(), 1);
    assert_eq!(checklists[0].check_items.len(), 2);
    assert_eq!(checklists[0].check_items[0].state, CheckItemState::Complete);
}

#[tokio::test]
async fn test_update_checklist_with_nothing_sends_only_credentials() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/checklists/cl1")
        .match_query(exact_query(&[]))
        .with_status(200)
        .with_body(r#"{"id": "cl1", "name": "Launch"}"#)
        .create_async()
        .await;

    client_for(&server)
        .update_checklist("cl1", None, Some(""))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_checklist_item_lowercases_checked() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/checklists/cl1/checkItems")
        .match_query(exact_query(&[
            ("name", "Write"),
            ("checked", "true"),
            ("pos", "bottom"),
        ]))
        .with_status(200)
        .with_body(r#"{"id": "i1", "name": "Write", "state": "complete"}"#)
        .create_async()
        .await;

    let item = client_for(&server)
        .add_checklist_item("cl1", "Write", Some(true), Some("bottom"))
        .await
        .unwrap();

    assert_eq!(item.state, CheckItemState::Complete);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_checklist_item_goes_through_card() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/cards/c1/checkItem/i1")
        .match_query(exact_query(&[("state", "complete")]))
        .with_status(200)
        .with_body(r#"{"id": "i1", "name": "Write", "state": "complete"}"#)
        .create_async()
        .await;

    client_for(&server)
        .update_checklist_item("c1", "i1", None, Some(CheckItemState::Complete), None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_and_delete_checklist_items() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/checklists/cl1/checkItems")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body(r#"[{"id": "i1", "name": "Write"}]"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/checklists/cl1/checkItems/i1")
        .match_query(exact_query(&[]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let delete_list = server
        .mock("DELETE", "/checklists/cl1")
        .match_query(exact_query(&[]))
        .with_status(200)
        .with_body(r#"{"_value": null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let items = client.get_checklist_items("cl1").await.unwrap();
    assert_eq!(items[0].state, CheckItemState::Incomplete);

    client.delete_checklist_item("cl1", "i1").await.unwrap();
    client.delete_checklist("cl1").await.unwrap();

    delete.assert_async().await;
    delete_list.assert_async().await;
}
