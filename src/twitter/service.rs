// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Twitter API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Twitter API over HTTPS, essentially a specialized HTTPS client
//! that knows how to sign requests and fetch one page of results at a time.

use crate::http::{HTTPClientFactory, HTTPError, HTTPResult};
use crate::twitter::auth::Credentials;
use crate::twitter::query::{Query, TagQuery, UserQuery};
use log::debug;
use reqwest::{Client, header};

/// Root of the version 1.1 REST API.
pub const API_ROOT: &str = "https://api.twitter.com/1.1";

/// A service for retrieving tweets.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Twitter API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Fetches one page of results for `query` and returns the raw JSON body.
    ///
    /// With no `max_id`, the newest page is returned. Otherwise only tweets
    /// with an ID less than or equal to `max_id` are returned.
    fn fetch(
        &self,
        query: &Query,
        max_id: Option<u64>,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

#[derive(oauth::Request)]
struct TimelineParams<'a> {
    count: u32,
    max_id: Option<u64>,
    screen_name: &'a str,
}

#[derive(oauth::Request)]
struct SearchParams<'a> {
    count: u32,
    lang: Option<&'static str>,
    max_id: Option<u64>,
    q: &'a str,
    result_type: Option<&'static str>,
}

/// A service that contacts the Twitter API directly, signing every request
/// with the user's OAuth 1.0a credentials.
pub struct TwitterService {
    client: Client,
    credentials: Credentials,
}

impl TwitterService {
    /// Creates a new Twitter service with a fresh client from `factory`.
    pub fn new(credentials: Credentials, factory: &HTTPClientFactory) -> HTTPResult<Self> {
        let client = factory.create()?;
        Ok(Self {
            client,
            credentials,
        })
    }

    fn uri(&self, query: &Query) -> String {
        format!("{API_ROOT}/{}", query.endpoint())
    }

    /// Returns the full request URI for a page of `query` along with the
    /// `Authorization` header that signs it.
    fn signed_request(&self, query: &Query, max_id: Option<u64>) -> (String, String) {
        let uri = self.uri(query);
        let count = query.page_size();
        match query {
            Query::User(query) => self.sign(uri, &timeline_params(query, count, max_id)),
            Query::Tag(query) => {
                let terms = query.search_terms();
                self.sign(uri, &search_params(query, &terms, count, max_id))
            }
        }
    }

    fn sign<R: oauth::Request>(&self, uri: String, params: &R) -> (String, String) {
        let authorization = self.credentials.authorize_get(&uri, params);
        (oauth::to_query(uri, params), authorization)
    }

    async fn get(&self, uri: &str, authorization: &str) -> HTTPResult<String> {
        let resp = self
            .client
            .get(uri)
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .ok_or(HTTPError::MissingContentType)?
                .to_str()?;
            if !content_type.starts_with("application/json") {
                Err(HTTPError::UnexpectedContentType(content_type.to_string()))
            } else {
                resp.text().await.map_err(HTTPError::Body)
            }
        }
    }
}

fn timeline_params(query: &UserQuery, count: u32, max_id: Option<u64>) -> TimelineParams<'_> {
    TimelineParams {
        count,
        max_id,
        screen_name: query.user(),
    }
}

fn search_params<'a>(
    query: &TagQuery,
    terms: &'a str,
    count: u32,
    max_id: Option<u64>,
) -> SearchParams<'a> {
    SearchParams {
        count,
        lang: query.language_filter().map(|language| language.as_str()),
        max_id,
        q: terms,
        result_type: query.result_order().map(|order| order.as_str()),
    }
}

impl Service for TwitterService {
    async fn fetch(&self, query: &Query, max_id: Option<u64>) -> HTTPResult<String> {
        let (uri, authorization) = self.signed_request(query, max_id);
        debug!("GET {uri}");
        self.get(&uri, &authorization).await
    }
}
