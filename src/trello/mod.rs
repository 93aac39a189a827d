//! Trello REST API client.
//!
//! `TrelloClient` is the single authenticated gateway to the remote store.
//! The core request primitive lives in `client`; per-entity operations are
//! split across sibling modules as additional `impl TrelloClient` blocks:
//!
//! - `boards`: boards and lists
//! - `cards`: cards, moves and due dates
//! - `checklists`: checklists and their items
//! - `labels`: board labels and card label assignment
//! - `attachments`: URL attachments, file upload and download

mod attachments;
mod boards;
mod cards;
mod checklists;
mod client;
mod error;
mod labels;
mod models;

#[cfg(test)]
mod boards_test;
#[cfg(test)]
mod cards_test;
#[cfg(test)]
mod checklists_test;
#[cfg(test)]
pub(crate) mod test_helpers;

pub use cards::CardUpdate;
pub use client::{DEFAULT_BASE_URL, Query, REQUEST_TIMEOUT, TrelloClient};
pub use error::{ErrorKind, TrelloError, TrelloResult};
pub use models::*;
