//! Tweets, as returned by the Twitter API.

use crate::text::convert_html_entities;
use crate::twitter::query::Query;
use serde::Deserialize;
use thiserror::Error;

/// A single tweet.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Tweet {
    id: u64,
    created_at: String,
    #[serde(alias = "full_text")]
    text: String,
    user: Author,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
struct Author {
    screen_name: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    statuses: Vec<Tweet>,
}

impl Tweet {
    /// Creates a new tweet from its parts.
    pub fn new(
        id: u64,
        handle: impl Into<String>,
        created_at: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let user = Author {
            screen_name: handle.into(),
        };
        Self {
            id,
            created_at: created_at.into(),
            text: text.into(),
            user,
        }
    }

    /// Parses one page of API results for `query`.
    ///
    /// User timelines come back as a bare JSON array of tweets; searches
    /// come back as an object with the tweets under `statuses`.
    pub fn parse_page(query: &Query, body: &str) -> Result<Vec<Self>, Error> {
        let tweets = match query {
            Query::User(_) => serde_json::from_str::<Vec<Tweet>>(body)?,
            Query::Tag(_) => serde_json::from_str::<SearchResponse>(body)?.statuses,
        };
        Ok(tweets)
    }

    /// The tweet's unique ID. Newer tweets have larger IDs.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The author's handle, without a leading `@`.
    pub fn handle(&self) -> &str {
        &self.user.screen_name
    }

    /// When the tweet was posted, exactly as Twitter formats it
    /// (e.g., "Wed Oct 10 20:19:24 +0000 2018").
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// The tweet's body, with HTML entities decoded.
    pub fn text(&self) -> String {
        convert_html_entities(&self.text)
    }
}

/// An error parsing an API response.
#[derive(Debug, Error)]
pub enum Error {
    /// The response was not the JSON that was expected.
    #[error("could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::load_data;
    use crate::twitter::query::{build_tag_query, build_user_query};
    use pretty_assertions::assert_eq;

    fn tag_query() -> Query {
        build_tag_query(&[String::from("rust"), String::from("golang")], "en")
    }

    #[test]
    fn it_parses_search_results() {
        let tweets = Tweet::parse_page(&tag_query(), &load_data("search_rust_golang")).unwrap();
        assert_eq!(tweets.len(), 5);
        assert_eq!(tweets[0].id(), 1005);
        assert_eq!(tweets[0].handle(), "ferris");
        assert_eq!(tweets[0].created_at(), "Sat Oct 17 09:15:02 +0000 2026");
    }

    #[test]
    fn it_parses_user_timelines() {
        let query = build_user_query("rustlang");
        let tweets = Tweet::parse_page(&query, &load_data("timeline_rustlang")).unwrap();
        let ids: Vec<_> = tweets.iter().map(Tweet::id).collect();
        assert_eq!(ids, vec![903, 902, 901]);
        assert!(tweets.iter().all(|tweet| tweet.handle() == "rustlang"));
    }

    #[test]
    fn it_decodes_html_entities_in_text() {
        let query = build_user_query("rustlang");
        let tweets = Tweet::parse_page(&query, &load_data("timeline_rustlang")).unwrap();
        assert_eq!(
            tweets[1].text(),
            "Announcing Rust 1.90 & the new <3 lint"
        );
    }

    #[test]
    fn it_keeps_whitespace_in_text() {
        let tweet = Tweet::new(1, "ferris", "Sat Oct 17 09:15:02 +0000 2026", "  fn main() {}\n\n&gt; ok ");
        assert_eq!(tweet.text(), "  fn main() {}\n\n> ok ");
    }

    #[test]
    fn it_reads_extended_text() {
        let body = r#"[{"id": 1, "created_at": "Sat Oct 17 09:15:02 +0000 2026",
                        "full_text": "an extended tweet", "user": {"screen_name": "ferris"}}]"#;
        let tweets = Tweet::parse_page(&build_user_query("ferris"), body).unwrap();
        assert_eq!(tweets[0].text(), "an extended tweet");
    }

    #[test]
    fn it_parses_empty_pages() {
        let tweets = Tweet::parse_page(&tag_query(), r#"{"statuses": []}"#).unwrap();
        assert!(tweets.is_empty());
        let tweets = Tweet::parse_page(&build_user_query("ferris"), "[]").unwrap();
        assert!(tweets.is_empty());
    }

    #[test]
    fn it_fails_on_the_wrong_shape() {
        let result = Tweet::parse_page(&tag_query(), "[]");
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
