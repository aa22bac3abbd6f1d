//! Outgoing IGDB search requests.
//!
//! A [`SearchRequest`] is a value: the controller decides *when* one exists,
//! this module only knows how to phrase it for the games endpoint. Zellij
//! performs the actual HTTP call and hands the response back as an event, so
//! everything the plugin needs to correlate that event travels in the request
//! context map (see [`SearchRequest::context`] and [`ResponseTag`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields requested for every game. Nested `genres.id` and `platforms.id`
/// expand to arrays of `{ "id": n }` objects in the response.
const FIELDS: &str =
    "name, first_release_date, id, popularity, rating, genres.id, platforms.id, cover.image_id";

const CONTEXT_QUERY: &str = "query";
const CONTEXT_REQUEST_ID: &str = "request_id";

/// Where searches are sent and with which credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub client_id: String,
    pub access_token: String,
}

impl Endpoint {
    /// HTTP headers IGDB requires on every call.
    #[must_use]
    pub fn headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Client-ID".to_string(), self.client_id.clone()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.access_token),
            ),
            ("Accept".to_string(), "application/json".to_string()),
        ])
    }
}

/// One search to send to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free text exactly as it was in the search bar when the timer fired.
    pub query: String,
    /// Monotonic id, unique per plugin instance.
    pub request_id: u64,
    pub platform_id: Option<u32>,
    pub genre_id: Option<u32>,
    pub limit: u32,
}

impl SearchRequest {
    /// Renders the request as an IGDB query body.
    ///
    /// ```
    /// use gamedex::search::SearchRequest;
    ///
    /// let request = SearchRequest {
    ///     query: "zelda".to_string(),
    ///     request_id: 1,
    ///     platform_id: Some(130),
    ///     genre_id: None,
    ///     limit: 30,
    /// };
    /// assert!(request.body().contains("search \"zelda\"; where platforms = (130); limit 30;"));
    /// ```
    #[must_use]
    pub fn body(&self) -> String {
        let mut body = format!("fields {FIELDS}; search \"{}\";", escape(&self.query));

        let mut conditions = Vec::with_capacity(2);
        if let Some(platform) = self.platform_id {
            conditions.push(format!("platforms = ({platform})"));
        }
        if let Some(genre) = self.genre_id {
            conditions.push(format!("genres = ({genre})"));
        }
        if !conditions.is_empty() {
            body.push_str(" where ");
            body.push_str(&conditions.join(" & "));
            body.push(';');
        }

        body.push_str(&format!(" limit {};", self.limit));
        body
    }

    /// Context map attached to the web request and echoed back in the result.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_QUERY.to_string(), self.query.clone()),
            (CONTEXT_REQUEST_ID.to_string(), self.request_id.to_string()),
        ])
    }
}

/// Correlation data recovered from a web request result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTag {
    pub query: String,
    pub request_id: u64,
}

impl ResponseTag {
    /// Reads the tag back out of a context map built by
    /// [`SearchRequest::context`]. Results from any other request yield `None`.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let query = context.get(CONTEXT_QUERY)?.clone();
        let request_id = context.get(CONTEXT_REQUEST_ID)?.parse().ok()?;
        Some(Self { query, request_id })
    }
}

/// Escapes a string for use inside an IGDB double-quoted literal.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            request_id: 7,
            platform_id: None,
            genre_id: None,
            limit: 30,
        }
    }

    #[test]
    fn body_without_filters_has_no_where_clause() {
        assert_eq!(
            request("zelda").body(),
            "fields name, first_release_date, id, popularity, rating, genres.id, platforms.id, \
             cover.image_id; search \"zelda\"; limit 30;"
        );
    }

    #[test]
    fn body_joins_platform_and_genre_conditions() {
        let mut req = request("mario");
        req.platform_id = Some(130);
        req.genre_id = Some(8);
        assert!(req
            .body()
            .ends_with("search \"mario\"; where platforms = (130) & genres = (8); limit 30;"));
    }

    #[test]
    fn body_with_only_a_genre() {
        let mut req = request("x");
        req.genre_id = Some(12);
        assert!(req.body().contains("where genres = (12);"));
        assert!(!req.body().contains("platforms = ("));
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let body = request(r#"say "hi" \o/"#).body();
        assert!(body.contains(r#"search "say \"hi\" \\o/";"#));
    }

    #[test]
    fn context_carries_the_response_tag() {
        let req = request("ab");
        let tag = ResponseTag::from_context(&req.context());
        assert_eq!(
            tag,
            Some(ResponseTag {
                query: "ab".to_string(),
                request_id: 7
            })
        );
    }

    #[test]
    fn foreign_context_has_no_tag() {
        assert_eq!(ResponseTag::from_context(&BTreeMap::new()), None);
        let bad = BTreeMap::from([
            ("query".to_string(), "a".to_string()),
            ("request_id".to_string(), "seven".to_string()),
        ]);
        assert_eq!(ResponseTag::from_context(&bad), None);
    }

    #[test]
    fn headers_carry_credentials() {
        let endpoint = Endpoint {
            url: "https://api.igdb.com/v4/games".to_string(),
            client_id: "abc".to_string(),
            access_token: "tok".to_string(),
        };
        let headers = endpoint.headers();
        assert_eq!(headers.get("Client-ID").map(String::as_str), Some("abc"));
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer tok"));
        assert_eq!(headers.get("Accept").map(String::as_str), Some("application/json"));
    }
}
