pub mod config;
pub mod mcp;
pub mod serde_utils;
pub mod trello;
