//! Authentication for the Twitter API.

use std::fmt;

/// OAuth 1.0a credentials for a Twitter application acting on behalf of
/// a single user account.
///
/// The values are secrets, so the [`Debug`] implementation redacts them.
///
/// # Examples
///
/// ```
/// use tweetsearch::twitter::Credentials;
/// let credentials = Credentials::new("k", "s", "t", "ts");
/// assert_eq!(credentials.consumer_key(), "k");
/// assert!(!format!("{credentials:?}").contains("\"ts\""));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// The application's consumer (API) key.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// The application's consumer (API) secret.
    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    /// The user's access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The user's access token secret.
    pub fn access_token_secret(&self) -> &str {
        &self.access_token_secret
    }

    /// Signs a GET request to `uri` carrying the parameters in `request`
    /// and returns the value of its `Authorization` header.
    pub(crate) fn authorize_get<R>(&self, uri: &str, request: &R) -> String
    where
        R: oauth::Request + ?Sized,
    {
        let token = oauth::Token::from_parts(
            self.consumer_key.as_str(),
            self.consumer_secret.as_str(),
            self.access_token.as_str(),
            self.access_token_secret.as_str(),
        );
        oauth::get(uri, request, &token, oauth::HMAC_SHA1)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"<redacted>")
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}
