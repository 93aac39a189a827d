//! Server configuration.
//!
//! Credentials come from the process environment, optionally seeded from a
//! local `.env` file. Variables already present in the environment always win
//! over the file, and the file never mutates the process environment.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use tracing::debug;

use crate::trello::{DEFAULT_BASE_URL, TrelloError, TrelloResult};

pub const API_KEY_VAR: &str = "TRELLO_API_KEY";
pub const API_TOKEN_VAR: &str = "TRELLO_API_TOKEN";
pub const API_URL_VAR: &str = "TRELLO_API_URL";

/// Validated settings needed to build a `TrelloClient`.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_token: String,
    /// Trello REST root (default: https://api.trello.com/1)
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Read configuration from the process environment only.
    pub fn from_env() -> TrelloResult<Self> {
        Self::resolve(|name| env::var(name).ok())
    }

    /// Read configuration from the environment, falling back to `env_file`.
    ///
    /// A missing file is not an error.
    pub fn load(env_file: &Path) -> TrelloResult<Self> {
        let file_vars = read_env_file(env_file)?;
        Self::resolve(|name| {
            env::var(name)
                .ok()
                .or_else(|| file_vars.get(name).cloned())
        })
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> TrelloResult<Self> {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = present(API_KEY_VAR);
        let api_token = present(API_TOKEN_VAR);

        match (api_key, api_token) {
            (Some(api_key), Some(api_token)) => Ok(Self {
                api_key,
                api_token,
                base_url: present(API_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            }),
            (key, token) => {
                let missing: Vec<&str> = [(API_KEY_VAR, key.is_none()), (API_TOKEN_VAR, token.is_none())]
                    .into_iter()
                    .filter(|(_, missing)| *missing)
                    .map(|(name, _)| name)
                    .collect();
                Err(TrelloError::Configuration {
                    message: format!("{} not set", missing.join(" and ")),
                })
            }
        }
    }

    /// Override the API root, e.g. from a CLI flag.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Read `KEY=value` pairs from an env file; a missing file yields no pairs.
pub fn read_env_file(path: &Path) -> TrelloResult<HashMap<String, String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let vars = parse_env_file(&contents);
            debug!(path = %path.display(), count = vars.len(), "Loaded env file");
            Ok(vars)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(source) => Err(TrelloError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Parse dotenv-style content: `KEY=value`, optional `export ` prefix,
/// `#` comments, and single or double quoted values.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    // Unquoted values may carry a trailing comment
    match value.find(" #") {
        Some(idx) => value[..idx].trim_end(),
        None => value,
    }
}
