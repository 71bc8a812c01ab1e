use crate::http::{HTTPError, HTTPResult};
use crate::twitter::Tweet;
use crate::twitter::client;
use crate::twitter::query::Query;
use crate::twitter::service::Service;
use futures::stream::{self, Stream};
use reqwest::StatusCode;
use std::fs;
use std::sync::Mutex;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// Serves canned pages of results, one per request, followed by empty
/// pages once it runs out. Remembers the `max_id` of every request.
pub struct TestService {
    pages: Vec<String>,
    fail: bool,
    requests: Mutex<Vec<Option<u64>>>,
}

impl TestService {
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages,
            fail: false,
            requests: Mutex::new(vec![]),
        }
    }

    pub fn fixture(file: &str) -> Self {
        Self::new(vec![load_data(file)])
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![])
        }
    }

    pub fn requests(&self) -> Vec<Option<u64>> {
        self.requests.lock().unwrap().clone()
    }

    fn empty_page(query: &Query) -> String {
        match query {
            Query::User(_) => String::from("[]"),
            Query::Tag(_) => String::from(r#"{"statuses": []}"#),
        }
    }
}

impl Service for TestService {
    async fn fetch(&self, query: &Query, max_id: Option<u64>) -> HTTPResult<String> {
        if self.fail {
            return Err(HTTPError::Http(StatusCode::UNAUTHORIZED));
        }
        let mut requests = self.requests.lock().unwrap();
        let page = self
            .pages
            .get(requests.len())
            .cloned()
            .unwrap_or_else(|| Self::empty_page(query));
        requests.push(max_id);
        Ok(page)
    }
}

/// `n` tweets with descending IDs, as an already-resolved stream.
pub fn tweet_stream(n: u64) -> impl Stream<Item = Result<Tweet, client::Error>> {
    stream::iter((1..=n).rev().map(|id| {
        Ok(Tweet::new(
            id,
            format!("user{id}"),
            format!("Sat Oct 17 09:00:{id:02} +0000 2026"),
            format!("tweet number {id}"),
        ))
    }))
}
