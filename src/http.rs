//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, Proxy, Url, header};
use std::{error, fmt};

/// Proxy schemes that clients can route requests through.
pub const PROXY_SCHEMES: [&str; 4] = ["http", "https", "socks5", "socks5h"];

/// Builds HTTP clients that identify themselves as this program.
///
/// Every search opens a fresh session, so rather than sharing one client,
/// callers hold onto a factory and ask it for a new client each time. The
/// factory is checked once when it is created: if a client cannot be built
/// at all (no TLS backend, a proxy with an unsupported scheme), the error
/// surfaces up front instead of in the middle of a search.
#[derive(Clone, Debug)]
pub struct HTTPClientFactory {
    user_agent: String,
    proxy: Option<Url>,
}

impl HTTPClientFactory {
    /// Creates a new factory for a program called `name` at `version`,
    /// optionally routing every request through `proxy`.
    ///
    /// Returns an error if `proxy` has a scheme other than those in
    /// [`PROXY_SCHEMES`], or if a client with these settings cannot be built.
    pub fn new(name: &str, version: &str, proxy: Option<Url>) -> HTTPResult<Self> {
        if let Some(proxy) = &proxy {
            if !PROXY_SCHEMES.contains(&proxy.scheme()) {
                return Err(HTTPError::UnsupportedProxy(proxy.clone()));
            }
        }
        let user_agent = format!("{name} v{version}");
        let factory = Self { user_agent, proxy };
        factory.create()?;
        Ok(factory)
    }

    /// An appropriate user agent to use when making HTTP requests.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The proxy that requests are routed through, if any.
    pub fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }

    /// Creates a new HTTP client.
    pub fn create(&self) -> HTTPResult<Client> {
        let builder = ClientBuilder::new().user_agent(&self.user_agent);
        let builder = match &self.proxy {
            Some(proxy) => builder.proxy(Proxy::all(proxy.clone()).map_err(HTTPError::Client)?),
            None => builder,
        };
        builder.build().map_err(HTTPError::Client)
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug)]
pub enum HTTPError {
    /// An HTTP client could not be built.
    Client(reqwest::Error),

    /// A proxy whose scheme clients cannot speak.
    UnsupportedProxy(Url),

    /// An error retrieving the body of a response.
    Body(reqwest::Error),

    /// An error that occurred while making an HTTP request.
    Request(reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    Http(reqwest::StatusCode),

    /// A missing Content-Type header in a response.
    MissingContentType,

    /// An invalid Content-Type header.
    InvalidContentType(header::ToStrError),

    /// A Content-Type that is not understood by the service.
    UnexpectedContentType(String),
}

impl From<reqwest::Error> for HTTPError {
    fn from(error: reqwest::Error) -> Self {
        HTTPError::Request(error)
    }
}

impl From<header::ToStrError> for HTTPError {
    fn from(error: header::ToStrError) -> Self {
        HTTPError::InvalidContentType(error)
    }
}

impl fmt::Display for HTTPError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HTTPError::Client(err) => write!(f, "Could not create HTTP client: {err}"),
            HTTPError::UnsupportedProxy(proxy) => {
                write!(f, "Unsupported proxy scheme '{}' in {proxy}", proxy.scheme())
            }
            HTTPError::Body(err) => write!(f, "Error retrieving body of HTTP response: {err}"),
            HTTPError::Request(err) => write!(f, "Error while making HTTP request: {err}"),
            HTTPError::Http(status) => write!(f, "Request returned HTTP {status}"),
            HTTPError::MissingContentType => write!(f, "Missing Content-Type header"),
            HTTPError::InvalidContentType(err) => {
                write!(f, "Invalid Content-Type header value: {err}")
            }
            HTTPError::UnexpectedContentType(content_type) => {
                write!(f, "Unexpected content type: {content_type}")
            }
        }
    }
}

impl error::Error for HTTPError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HTTPError::Client(err) => Some(err),
            HTTPError::UnsupportedProxy(_) => None,
            HTTPError::Body(err) => Some(err),
            HTTPError::Request(err) => Some(err),
            HTTPError::Http(_) => None,
            HTTPError::MissingContentType => None,
            HTTPError::InvalidContentType(err) => Some(err),
            HTTPError::UnexpectedContentType(_) => None,
        }
    }
}
