//! Twitter API clients and services for searching tweets over HTTP.

pub mod auth;
pub mod client;
pub mod query;
pub mod service;
pub mod thing;

pub use auth::Credentials;
pub use client::Session;
pub use query::{Language, Query, build_tag_query, build_user_query};
pub use thing::Tweet;
