//! Runs searches and prints their results.

use crate::error::Error;
use crate::twitter::client::{self, Session};
use crate::twitter::query::Query;
use crate::twitter::service::Service;
use crate::twitter::Tweet;
use crate::view::{ViewOptions, Viewable};
use futures::stream::{Stream, StreamExt, TryStreamExt};
use log::{debug, info};
use std::io::Write;
use std::pin::pin;

/// Prints at most `limit` tweets from `results` to `out`.
///
/// Each tweet is written and flushed as soon as it arrives, followed by a
/// blank line. Once `limit` tweets have been printed the stream is not
/// polled again, so no further pages are requested.
///
/// Returns the number of tweets printed.
pub async fn print_results<S, W>(
    results: S,
    limit: usize,
    opts: &ViewOptions,
    out: &mut W,
) -> Result<usize, Error>
where
    S: Stream<Item = Result<Tweet, client::Error>>,
    W: Write,
{
    let mut results = pin!(results.take(limit));
    let mut printed = 0;
    while let Some(tweet) = results.try_next().await? {
        writeln!(out, "{}", tweet.view(opts))?;
        out.flush()?;
        printed += 1;
    }
    Ok(printed)
}

/// Searches for `query` in `session` and prints at most `limit` results
/// to `out`.
pub async fn search<S, W>(
    session: &Session<S>,
    query: &Query,
    limit: usize,
    opts: &ViewOptions,
    out: &mut W,
) -> Result<usize, Error>
where
    S: Service,
    W: Write,
{
    info!("searching for {query}");
    let printed = print_results(session.search(query), limit, opts, out).await?;
    debug!("printed {printed} tweets for {query}");
    Ok(printed)
}
