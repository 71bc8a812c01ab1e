// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! tweetsearch is a command-line tool for keeping an eye on Twitter from
//! the terminal. It prints the most recent tweets containing a set of
//! hashtags or keywords, or the latest tweets from a single user, and can
//! keep refreshing them every minute.
//!
//! # Examples
//!
//! Display the 10 most recent English tweets mentioning both `rust` and
//! `golang`:
//!
//! ```bash
//! tweetsearch --tag rust golang
//! ```
//!
//! Display the last 5 tweets from `@rustlang`:
//!
//! ```bash
//! tweetsearch --user rustlang --amount 5
//! ```
//!
//! Watch Dutch tweets tagged `#rustlang`, refreshing every 60 seconds
//! until interrupted with Ctrl-C:
//!
//! ```bash
//! tweetsearch --daemon --lang nl --tag '#rustlang'
//! ```
//!
//! Send requests through a SOCKS proxy:
//!
//! ```bash
//! tweetsearch --proxy socks5://127.0.0.1:9050 --tag rust
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! tweetsearch --help
//! ```
//!
//! # Twitter API Setup
//!
//! tweetsearch signs its requests with OAuth 1.0a, so it needs the four
//! credentials of a Twitter developer app:
//!
//! 1. Create a project and app in the [Twitter developer portal].
//! 2. Generate the app's consumer key and secret, and an access token and
//!    secret for your account.
//! 3. Store them in `./twitter.cfg` (or any file passed with `--config`):
//!
//!    ```ini
//!    [twitter]
//!    consumerkey = YOUR_CONSUMER_KEY
//!    consumersecret = YOUR_CONSUMER_SECRET
//!    accesstoken = YOUR_ACCESS_TOKEN
//!    accesstokensecret = YOUR_ACCESS_TOKEN_SECRET
//!    ```
//!
//! The file is read again before every refresh, so credentials can be
//! rotated while running in daemon mode.
//!
//! # Exit Status
//!
//! | Status | Meaning                                                       |
//! |--------|---------------------------------------------------------------|
//! | 0      | Success, or stopped with Ctrl-C                               |
//! | 1      | Missing or malformed config file, or a failed search          |
//! | 2      | Invalid arguments, or neither `--user` nor `--tag` was given  |
//!
//! # License
//!
//! tweetsearch is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [Twitter developer portal]: https://developer.twitter.com/en/portal/dashboard

pub mod cli;
pub mod conf;
pub mod error;
pub mod http;
pub mod runner;
pub mod search;
pub mod text;
pub mod twitter;
pub mod view;

#[cfg(test)]
mod test_utils;
