//! Shared fixtures for client tests against a local mockito server.

use mockito::{Matcher, ServerGuard};

use crate::trello::TrelloClient;

pub(crate) const TEST_KEY: &str = "test-key";
pub(crate) const TEST_TOKEN: &str = "test-token";

pub(crate) fn client_for(server: &ServerGuard) -> TrelloClient {
    TrelloClient::with_base_url(TEST_KEY, TEST_TOKEN, server.url()).unwrap()
}

/// Matches a query carrying the credentials plus every given pair.
pub(crate) fn query_with(pairs: &[(&str, &str)]) -> Matcher {
    let mut matchers = vec![
        Matcher::UrlEncoded("key".into(), TEST_KEY.into()),
        Matcher::UrlEncoded("token".into(), TEST_TOKEN.into()),
    ];
    matchers.extend(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string())),
    );
    Matcher::AllOf(matchers)
}

/// Matches a query that is exactly `pairs` followed by the credentials.
pub(crate) fn exact_query(pairs: &[(&str, &str)]) -> Matcher {
    let mut parts: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    parts.push(format!("key={TEST_KEY}"));
    parts.push(format!("token={TEST_TOKEN}"));
    Matcher::Exact(parts.join("&"))
}
