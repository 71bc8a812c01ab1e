// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for searching tweets with the Twitter API.

use crate::http::{self, HTTPClientFactory};
use crate::twitter::auth::Credentials;
use crate::twitter::query::Query;
use crate::twitter::service::{Service, TwitterService};
use crate::twitter::thing::{self, Tweet};
use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use thiserror::Error;

/// An authenticated connection to the Twitter API.
///
/// A session is cheap to open and is meant to be used for a single search.
#[derive(Debug)]
pub struct Session<S> {
    service: S,
}

impl Session<TwitterService> {
    /// Opens a new session using `credentials`, talking to Twitter through
    /// a fresh client from `factory`.
    pub fn open(credentials: Credentials, factory: &HTTPClientFactory) -> Result<Self, Error> {
        let service = TwitterService::new(credentials, factory)?;
        Ok(Self::with_service(service))
    }
}

impl<S: Service> Session<S> {
    /// Opens a new session that retrieves tweets with `service`.
    pub fn with_service(service: S) -> Self {
        Self { service }
    }

    /// Searches for tweets matching `query`.
    ///
    /// Tweets are yielded in the order Twitter returns them. Pages are only
    /// fetched as the stream is consumed, so a caller that stops early
    /// never requests pages it does not need. The stream ends after
    /// Twitter returns an empty page.
    pub fn search<'a>(&'a self, query: &'a Query) -> impl Stream<Item = Result<Tweet, Error>> + 'a {
        stream::try_unfold(Cursor::Start, move |cursor| self.next_page(query, cursor))
            .map_ok(|page| stream::iter(page.into_iter().map(Ok::<Tweet, Error>)))
            .try_flatten()
    }

    async fn next_page(
        &self,
        query: &Query,
        cursor: Cursor,
    ) -> Result<Option<(Vec<Tweet>, Cursor)>, Error> {
        let max_id = match cursor {
            Cursor::Start => None,
            Cursor::Before(max_id) => Some(max_id),
            Cursor::Exhausted => return Ok(None),
        };

        let body = self.service.fetch(query, max_id).await?;
        let page = Tweet::parse_page(query, &body)?;
        debug!("fetched {} tweets for {query} (max_id = {max_id:?})", page.len());

        if page.is_empty() {
            return Ok(None);
        }

        let next = page
            .iter()
            .map(Tweet::id)
            .min()
            .and_then(|oldest| oldest.checked_sub(1))
            .map_or(Cursor::Exhausted, Cursor::Before);
        Ok(Some((page, next)))
    }
}

/// Position in a paged search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Start,
    Before(u64),
    Exhausted,
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}
