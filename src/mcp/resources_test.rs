use chrono::{TimeZone, Utc};
use mockito::Matcher;

use crate::mcp::resources::{
    ResourceUri, board_view, list_view, render_board, render_card, render_list,
};
use crate::trello::test_helpers::{client_for, query_with};
use crate::trello::{Board, Card, Label, TrelloError, TrelloList};

fn board(name: &str) -> Board {
    serde_json::from_value(serde_json::json!({"id": "b1", "name": name})).unwrap()
}

fn list(id: &str, name: &str) -> TrelloList {
    serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
}

fn card(id: &str, name: &str, desc: &str) -> Card {
    serde_json::from_value(serde_json::json!({"id": id, "name": name, "desc": desc})).unwrap()
}

#[test]
fn test_parse_resource_uri() {
    assert_eq!(
        ResourceUri::parse("trello://board/b1"),
        Some(ResourceUri::Board("b1".to_string()))
    );
    assert_eq!(
        ResourceUri::parse("trello://list/l1"),
        Some(ResourceUri::List("l1".to_string()))
    );
    assert_eq!(
        ResourceUri::parse("trello://card/c1"),
        Some(ResourceUri::Card("c1".to_string()))
    );
    assert_eq!(ResourceUri::parse("trello://card/"), None);
    assert_eq!(ResourceUri::parse("trello://card/c1/extra"), None);
    assert_eq!(ResourceUri::parse("trello://label/x"), None);
    assert_eq!(ResourceUri::parse("file:///etc/passwd"), None);
}

#[test]
fn test_render_empty_board() {
    let text = render_board(&board("Empty"), &[]);

    assert_eq!(
        text,
        "Board: Empty\nURL: N/A\nDescription: No description\n\nLists (0):"
    );
}

#[test]
fn test_render_board_keeps_empty_description() {
    let blank: Board =
        serde_json::from_value(serde_json::json!({"id": "b1", "name": "Blank", "desc": ""}))
            .unwrap();

    let text = render_board(&blank, &[]);

    assert!(text.contains("\nDescription: \n"));
    assert!(!text.contains("No description"));
}

#[test]
fn test_render_board_degrades_per_list() {
    let sections = vec![
        (
            list("l1", "Todo"),
            Ok(vec![card("c1", "Write", "first draft"), card("c2", "Review", "")]),
        ),
        (list("l2", "Done"), Ok(vec![])),
        (
            list("l3", "Broken"),
            Err(TrelloError::NotFound {
                endpoint: "/lists/l3/cards".to_string(),
            }),
        ),
    ];

    let text = render_board(&board("Roadmap"), &sections);

    assert!(text.contains("\nLists (3):"));
    assert!(text.contains("\n  - Todo (ID: l1)\n    Cards (2):"));
    assert!(text.contains("      • Write (ID: c1)\n        Description: first draft"));
    assert!(text.contains("      • Review (ID: c2)"));
    assert!(!text.contains("Description: \n"));
    assert!(text.contains("\n  - Done (ID: l2)\n    No cards"));
    assert!(text.contains("\n  - Broken (ID: l3)\n    Error loading cards"));
}

#[test]
fn test_render_empty_list() {
    assert_eq!(
        render_list("l1", &[]),
        "List ID: l1\n\nCards (0):\n  No cards in this list"
    );
}

#[test]
fn test_render_list_with_url() {
    let mut with_url = card("c1", "Write", "");
    with_url.url = Some("https://trello.com/c/abc".to_string());

    let text = render_list("l1", &[with_url]);

    assert!(text.contains("\n  • Write (ID: c1)\n    URL: https://trello.com/c/abc"));
    assert!(!text.contains("Description:"));
}

#[test]
fn test_render_card() {
    let mut c = card("c1", "Ship it", "");
    c.id_list = Some("l1".to_string());
    c.id_board = Some("b1".to_string());
    c.due = Some(Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap());
    c.labels = vec![
        serde_json::from_value::<Label>(serde_json::json!({"id": "a", "name": "Bug"})).unwrap(),
        serde_json::from_value::<Label>(serde_json::json!({"id": "b", "name": "Urgent"})).unwrap(),
    ];

    let text = render_card(&c);

    assert_eq!(
        text,
        "Card: Ship it\nID: c1\nURL: N/A\nDescription: \nList ID: l1\n\
         Board ID: b1\nDue Date: 2025-12-31T23:59:59.000Z\nLabels: Bug, Urgent"
    );
}

#[test]
fn test_render_card_without_description_field() {
    let bare: Card =
        serde_json::from_value(serde_json::json!({"id": "c2", "name": "Bare"})).unwrap();

    assert!(render_card(&bare).contains("\nDescription: No description\n"));
}

#[tokio::test]
async fn test_board_view_loads_cards_per_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/boards/b1")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body(r#"{"id": "b1", "name": "Roadmap", "url": "https://trello.com/b/xyz"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/boards/b1/lists")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body(r#"[{"id": "l1", "name": "Todo"}, {"id": "l2", "name": "Flaky"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/lists/l1/cards")
        .match_query(query_with(&[]))
        .with_status(200)
        .with_body(r#"[{"id": "c1", "name": "Write"}]"#)
        .create_async()
        .await;
    server
        .mock("GET", "/lists/l2/cards")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let text = board_view(&client_for(&server), "b1").await;

    assert!(text.starts_with("Board: Roadmap\nURL: https://trello.com/b/xyz"));
    assert!(text.contains("      • Write (ID: c1)"));
    assert!(text.contains("\n  - Flaky (ID: l2)\n    Error loading cards"));
}

#[tokio::test]
async fn test_list_view_failure_is_single_line() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/lists/l9/cards")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let text = list_view(&client_for(&server), "l9").await;

    assert_eq!(
        text,
        "Error loading list l9: Invalid Trello API credentials"
    );
}
