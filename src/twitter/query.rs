//! Queries that can be submitted to the Twitter search API.
//!
//! There are two kinds of query: a [`UserQuery`], which reads a single
//! account's timeline, and a [`TagQuery`], which searches all recent tweets
//! for a set of hashtags or keywords. Both are wrapped in a [`Query`] and
//! handed to a [`Session`](crate::twitter::Session), which is the only
//! thing that looks inside them.

use clap::ValueEnum;
use itertools::Itertools;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?(?<handle>[A-Za-z0-9_]{1,15})$").unwrap());

/// Languages that tweets can be filtered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// English.
    #[default]
    En,

    /// Dutch.
    Nl,
}

impl Language {
    /// The ISO 639-1 code Twitter uses for the language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    /// Parses a language code. Only the exact, lowercase codes are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "nl" => Ok(Language::Nl),
            _ => Err(format!("unsupported language: {s}")),
        }
    }
}

/// The order in which Twitter should return search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultType {
    /// A mix of popular and recent results.
    #[default]
    Mixed,

    /// The most recent results first.
    Recent,

    /// The most popular results first.
    Popular,
}

impl ResultType {
    /// The value of the `result_type` parameter for this ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Mixed => "mixed",
            ResultType::Recent => "recent",
            ResultType::Popular => "popular",
        }
    }
}

/// A request for tweets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Tweets written by a single user.
    User(UserQuery),

    /// Tweets matching a set of hashtags or keywords.
    Tag(TagQuery),
}

impl Query {
    /// The API endpoint, relative to the API root, that answers this query.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Query::User(_) => "statuses/user_timeline.json",
            Query::Tag(_) => "search/tweets.json",
        }
    }

    /// The largest number of tweets the endpoint returns per page.
    pub fn page_size(&self) -> u32 {
        match self {
            Query::User(_) => 200,
            Query::Tag(_) => 100,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::User(query) => write!(f, "@{}", query.user()),
            Query::Tag(query) => match query.language_filter() {
                Some(language) => write!(f, "'{}' ({language})", query.search_terms()),
                None => write!(f, "'{}'", query.search_terms()),
            },
        }
    }
}

/// A query for the tweets on a user's timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuery {
    user: String,
}

impl UserQuery {
    /// Creates a query for the timeline of `user`. A leading `@` is dropped.
    pub fn new(user: impl Into<String>) -> Self {
        let user = user.into();
        let user = user.strip_prefix('@').map(String::from).unwrap_or(user);
        Self { user }
    }

    /// The user's handle, without a leading `@`.
    pub fn user(&self) -> &str {
        &self.user
    }
}

/// A query for recent tweets containing hashtags or keywords.
///
/// Built up incrementally:
///
/// ```
/// use tweetsearch::twitter::query::{ResultType, TagQuery};
/// let query = TagQuery::default()
///     .keywords(["#rustlang", "tokio"])
///     .language("nl")
///     .result_type(ResultType::Recent);
/// assert_eq!(query.search_terms(), "#rustlang tokio");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct TagQuery {
    keywords: Vec<String>,
    language: Option<Language>,
    result_type: Option<ResultType>,
}

impl TagQuery {
    /// Sets the keywords to search for.
    pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts results to tweets in `language`.
    ///
    /// Only the exact codes `"en"` and `"nl"` set a filter; anything else
    /// leaves the query unfiltered.
    pub fn language(mut self, language: &str) -> Self {
        self.language = language.parse().ok();
        self
    }

    /// Sets the order in which results are returned.
    pub fn result_type(mut self, result_type: ResultType) -> Self {
        self.result_type = Some(result_type);
        self
    }

    /// The keywords being searched for, in order.
    pub fn keyword_list(&self) -> &[String] {
        &self.keywords
    }

    /// The keywords joined into a single search string.
    ///
    /// Twitter treats space-separated terms as a logical AND.
    pub fn search_terms(&self) -> String {
        self.keywords.iter().join(" ")
    }

    /// The language filter, if one is set.
    pub fn language_filter(&self) -> Option<Language> {
        self.language
    }

    /// The requested result ordering, if one is set.
    pub fn result_order(&self) -> Option<ResultType> {
        self.result_type
    }
}

/// Builds a query for the tweets on `user`'s timeline.
pub fn build_user_query(user: impl Into<String>) -> Query {
    Query::User(UserQuery::new(user))
}

/// Builds a query for the most recent tweets matching every one of `tags`,
/// filtered by `language` if it is exactly `"en"` or `"nl"`.
pub fn build_tag_query(tags: &[String], language: &str) -> Query {
    let query = TagQuery::default()
        .keywords(tags)
        .language(language)
        .result_type(ResultType::Recent);
    Query::Tag(query)
}

/// Parses a Twitter handle given on the command line.
///
/// A handle is 1 to 15 letters, digits, or underscores, optionally preceded
/// by an `@`, which is dropped.
///
/// # Examples
///
/// ```
/// use tweetsearch::twitter::query::parse_handle;
/// assert_eq!(parse_handle("@rustlang"), Ok(String::from("rustlang")));
/// assert!(parse_handle("not a handle").is_err());
/// ```
pub fn parse_handle(s: &str) -> Result<String, String> {
    HANDLE_RE
        .captures(s)
        .map(|caps| caps["handle"].to_string())
        .ok_or_else(|| format!("'{s}' is not a valid Twitter handle"))
}
