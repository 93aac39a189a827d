use crate::trello::CardUpdate;
use crate::trello::test_helpers::{client_for, exact_query, query_with};

const CARD: &str = r#"{
    "id": "c1",
    "name": "Ship it",
    "desc": "",
    "idList": "l1",
    "idBoard": "b1",
    "due": "2026-01-25T12:00:00.000Z",
    "dueComplete": false
}"#;

#[tokio::test]
async fn test_create_card_sends_only_supplied_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/cards")
        .match_query(exact_query(&[
            ("idList", "l1"),
            ("name", "Ship"),
            ("pos", "bottom"),
        ]))
        .with_status(200)
        .with_body(r#"{"id": "c1", "name": "Ship", "idList": "l1"}"#)
        .create_async()
        .await;

    let card = client_for(&server)
        .create_card("l1", "Ship", None, Some("bottom"), None)
        .await
        .unwrap();

    assert_eq!(card.name, "Ship");
    assert_eq!(card.id_list.as_deref(), Some("l1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_card_without_due_leaves_it_alone() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/cards/c1")
        .match_query(exact_query(&[("name", "Renamed")]))
        .with_status(200)
        .with_body(CARD)
        .create_async()
        .await;

    let update = CardUpdate {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let card = client_for(&server).update_card("c1", update).await.unwrap();

    assert!(card.due.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_card_with_explicit_null_clears_due() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/cards/c1")
        .match_query(exact_query(&[("due", "null")]))
        .with_status(200)
        .with_body(r#"{"id": "c1", "due": null}"#)
        .create_async()
        .await;

    let update = CardUpdate {
        due: Some(None),
        ..Default::default()
    };
    let card = client_for(&server).update_card("c1", update).await.unwrap();

    assert!(card.due.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_card_all_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/cards/c1")
        .match_query(query_with(&[
            ("name", "N"),
            ("desc", "D"),
            ("idList", "l2"),
            ("due", "2026-02-01T00:00:00.000Z"),
            ("dueComplete", "true"),
        ]))
        .with_status(200)
        .with_body(CARD)
        .create_async()
        .await;

    let update = CardUpdate {
        name: Some("N".to_string()),
        desc: Some("D".to_string()),
        list_id: Some("l2".to_string()),
        due: Some(Some("2026-02-01T00:00:00.000Z".to_string())),
        due_complete: Some(true),
    };
    client_for(&server).update_card("c1", update).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_move_card_changes_list_membership() {
    let mut server = mockito::Server::new_async().await;
    let move_mock = server
        .mock("PUT", "/cards/c1")
        .match_query(exact_query(&[("idList", "l2"), ("pos", "top")]))
        .with_status(200)
        .with_body(r#"{"id": "c1", "name": "Ship it", "idList": "l2"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/lists/l2/cards")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body(r#"[{"id": "c1", "name": "Ship it", "idList": "l2"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/lists/l1/cards")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let moved = client.move_card("c1", "l2", Some("top")).await.unwrap();
    assert_eq!(moved.id_list.as_deref(), Some("l2"));

    let destination = client.list_cards("l2").await.unwrap();
    assert!(destination.iter().any(|c| c.id == "c1"));
    let origin = client.list_cards("l1").await.unwrap();
    assert!(origin.iter().all(|c| c.id != "c1"));

    move_mock.assert_async().await;
}

#[tokio::test]
async fn test_due_date_operations() {
    let mut server = mockito::Server::new_async().await;
    let set = server
        .mock("PUT", "/cards/c1")
        .match_query(query_with(&[("due", "2026-01-25T12:00:00.000Z")]))
        .with_status(200)
        .with_body(CARD)
        .create_async()
        .await;
    let complete = server
        .mock("PUT", "/cards/c1")
        .match_query(exact_query(&[("dueComplete", "false")]))
        .with_status(200)
        .with_body(CARD)
        .create_async()
        .await;
    let clear = server
        .mock("PUT", "/cards/c1")
        .match_query(exact_query(&[("due", "null")]))
        .with_status(200)
        .with_body(r#"{"id": "c1", "due": null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let card = client
        .set_card_due_date("c1", "2026-01-25T12:00:00.000Z")
        .await
        .unwrap();
    assert!(card.due.is_some());

    client.mark_due_date_complete("c1", false).await.unwrap();

    let cleared = client.clear_card_due_date("c1").await.unwrap();
    assert!(cleared.due.is_none());

    set.assert_async().await;
    complete.assert_async().await;
    clear.assert_async().await;
}

#[tokio::test]
async fn test_delete_card_returns_remote_ack() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/cards/c1")
        .match_query(exact_query(&[]))
        .with_status(200)
        .with_body(r#"{"limits": {}}"#)
        .create_async()
        .await;

    let ack = client_for(&server).delete_card("c1").await.unwrap();

    assert!(ack.get("limits").is_some());
    mock.assert_async().await;
}
