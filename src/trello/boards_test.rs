use mockito::Matcher;

use crate::trello::ErrorKind;
use crate::trello::test_helpers::{client_for, exact_query, query_with};

#[tokio::test]
async fn test_list_boards_uses_member_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/members/me/boards")
        .match_query(exact_query(&[]))
        .with_status(200)
        .with_body(r#"[{"id": "b1", "name": "One"}, {"id": "b2", "name": "Two"}]"#)
        .create_async()
        .await;

    let boards = client_for(&server).list_boards().await.unwrap();

    assert_eq!(boards.len(), 2);
    assert_eq!(boards[1].name, "Two");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_board_omits_missing_description() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/boards")
        .match_query(exact_query(&[("name", "Roadmap")]))
        .with_status(200)
        .with_body(r#"{"id": "b1", "name": "Roadmap", "desc": ""}"#)
        .create_async()
        .await;

    let board = client_for(&server)
        .create_board("Roadmap", None)
        .await
        .unwrap();

    assert_eq!(board.name, "Roadmap");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_board_sends_description() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/boards")
        .match_query(query_with(&[("name", "Roadmap"), ("desc", "Plans for Q3")]))
        .with_status(200)
        .with_body(r#"{"id": "b1", "name": "Roadmap", "desc": "Plans for Q3"}"#)
        .create_async()
        .await;

    let board = client_for(&server)
        .create_board("Roadmap", Some("Plans for Q3"))
        .await
        .unwrap();

    assert_eq!(board.desc.as_deref(), Some("Plans for Q3"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_board_lists() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/boards/b1/lists")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body(
            r#"[{"id": "l1", "name": "Todo", "pos": 1024, "closed": false, "idBoard": "b1"}]"#,
        )
        .create_async()
        .await;

    let lists = client_for(&server).get_board_lists("b1").await.unwrap();

    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].name, "Todo");
    assert_eq!(lists[0].id_board.as_deref(), Some("b1"));
}

#[tokio::test]
async fn test_create_list_with_position() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/boards/b1/lists")
        .match_query(exact_query(&[("name", "Doing"), ("pos", "top")]))
        .with_status(200)
        .with_body(r#"{"id": "l2", "name": "Doing", "pos": 512}"#)
        .create_async()
        .await;

    let list = client_for(&server)
        .create_list("b1", "Doing", Some("top"))
        .await
        .unwrap();

    assert_eq!(list.id, "l2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_archive_list_closes_it() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/lists/l1/closed")
        .match_query(exact_query(&[("value", "true")]))
        .with_status(200)
        .with_body(r#"{"id": "l1", "name": "Old", "closed": true}"#)
        .create_async()
        .await;

    let list = client_for(&server).archive_list("l1").await.unwrap();

    assert!(list.closed);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_board_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/boards/nope")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("The requested resource was not found.")
        .create_async()
        .await;

    let err = client_for(&server).get_board("nope").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
