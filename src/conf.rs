//! Configuration file handling.
//!
//! Twitter API credentials are read from an INI-style file with a single
//! `[twitter]` section:
//!
//! ```ini
//! [twitter]
//! consumerkey = YOUR_CONSUMER_KEY
//! consumersecret = YOUR_CONSUMER_SECRET
//! accesstoken = YOUR_ACCESS_TOKEN
//! accesstokensecret = YOUR_ACCESS_TOKEN_SECRET
//! ```

use crate::error::Error;
use crate::twitter::Credentials;
use ini::Ini;
use log::debug;
use std::fs;
use std::path::Path;

/// Where the configuration file is looked for by default.
pub const DEFAULT_PATH: &str = "./twitter.cfg";

/// The section holding the credentials.
pub const SECTION: &str = "twitter";

/// Loads credentials from the configuration file at `path`.
///
/// Returns [`Error::ConfigNotFound`] if there is no file at `path`, and
/// [`Error::ConfigMalformed`] if it cannot be read or lacks any of the
/// required keys.
pub fn load(path: impl AsRef<Path>) -> Result<Credentials, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }

    debug!("reading credentials from {}", path.display());
    let text = fs::read_to_string(path).map_err(|err| Error::ConfigMalformed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    parse(path, &text)
}

/// Parses credentials from `text`, the contents of the configuration file
/// at `path`.
///
/// # Examples
///
/// ```
/// use tweetsearch::conf;
/// let text = "[twitter]\nconsumerkey=k\nconsumersecret=s\naccesstoken=t\naccesstokensecret=ts\n";
/// let credentials = conf::parse("twitter.cfg", text).unwrap();
/// assert_eq!(credentials.access_token(), "t");
/// ```
pub fn parse(path: impl AsRef<Path>, text: &str) -> Result<Credentials, Error> {
    let path = path.as_ref();
    let malformed = |reason: String| Error::ConfigMalformed {
        path: path.to_path_buf(),
        reason,
    };

    let ini = Ini::load_from_str(text).map_err(|err| malformed(err.to_string()))?;
    let section = ini
        .section(Some(SECTION))
        .ok_or_else(|| malformed(format!("missing [{SECTION}] section")))?;
    // Keys are matched case-insensitively.
    let get = |key: &str| {
        section
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(String::from)
            .ok_or_else(|| malformed(format!("missing '{key}' in [{SECTION}] section")))
    };

    Ok(Credentials::new(
        get("consumerkey")?,
        get("consumersecret")?,
        get("accesstoken")?,
        get("accesstokensecret")?,
    ))
}
