//! Per-call events forwarded to the MCP host.
//!
//! Tool outcomes are logged with `tracing` and also sent to the connected
//! client as `notifications/message`. The peer is attached once the session
//! is initialized; until then events only reach the local log.

use std::sync::{Arc, RwLock};

use rmcp::{Peer, RoleServer};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Logger name reported on every host event.
pub const LOGGER: &str = "trello_mcp";

/// Protocol log levels, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

/// One event as delivered to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostEvent {
    pub level: EventLevel,
    pub logger: String,
    pub data: Value,
}

#[derive(Clone)]
enum Sink {
    Peer(Peer<RoleServer>),
    Channel(UnboundedSender<HostEvent>),
}

struct State {
    sink: Option<Sink>,
    min_level: EventLevel,
}

/// Shared handle to wherever host events go. Clones share one destination.
#[derive(Clone)]
pub struct HostEvents {
    state: Arc<RwLock<State>>,
}

impl Default for HostEvents {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                sink: None,
                min_level: EventLevel::Info,
            })),
        }
    }
}

impl HostEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver events to the connected client.
    pub fn attach_peer(&self, peer: Peer<RoleServer>) {
        self.attach(Sink::Peer(peer));
    }

    /// Deliver events to a channel instead of a client session.
    pub fn attach_channel(&self, sender: UnboundedSender<HostEvent>) {
        self.attach(Sink::Channel(sender));
    }

    fn attach(&self, sink: Sink) {
        if let Ok(mut state) = self.state.write() {
            state.sink = Some(sink);
        }
    }

    /// Drop events below `level`, as requested by `logging/setLevel`.
    pub fn set_min_level(&self, level: EventLevel) {
        if let Ok(mut state) = self.state.write() {
            state.min_level = level;
        }
    }

    pub fn min_level(&self) -> EventLevel {
        self.state
            .read()
            .map(|state| state.min_level)
            .unwrap_or(EventLevel::Info)
    }

    /// Send one tool outcome. Delivery failures are logged and otherwise ignored.
    pub async fn emit(&self, level: EventLevel, tool: &str, message: &str) {
        let sink = match self.state.read() {
            Ok(state) if level >= state.min_level => state.sink.clone(),
            _ => None,
        };
        let Some(sink) = sink else {
            return;
        };

        let event = HostEvent {
            level,
            logger: LOGGER.to_string(),
            data: json!({"tool": tool, "message": message}),
        };

        match sink {
            Sink::Peer(peer) => {
                let param = match serde_json::to_value(&event).and_then(serde_json::from_value) {
                    Ok(param) => param,
                    Err(e) => {
                        debug!(tool, "Could not encode host event: {e}");
                        return;
                    }
                };
                if let Err(e) = peer.notify_logging_message(param).await {
                    debug!(tool, "Could not deliver host event: {e}");
                }
            }
            Sink::Channel(sender) => {
                if sender.send(event).is_err() {
                    debug!(tool, "Host event receiver dropped");
                }
            }
        }
    }
}
