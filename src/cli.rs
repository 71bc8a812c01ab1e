//! Drives the command-line program.

pub use crate::error::Error;
use crate::conf;
use crate::http::HTTPClientFactory;
use crate::runner::{self, Cycle, RunLoop};
use crate::search::search;
use crate::twitter::query::{Language, Query, build_tag_query, build_user_query, parse_handle};
use crate::twitter::Session;
use crate::view::ViewOptions;
use clap::{CommandFactory, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use log::{debug, info};
use reqwest::Url;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use tokio::signal;

pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Displays recent tweets for hashtags, keywords, or a user", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// Display this many tweets per search
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    amount: u32,

    /// Configuration file holding Twitter API credentials
    #[arg(short, long, value_name = "FILE", default_value = conf::DEFAULT_PATH)]
    config: PathBuf,

    /// Refresh automatically every 60 seconds
    #[arg(short, long, default_value_t = false)]
    daemon: bool,

    /// Only show tweets in this language
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    lang: Language,

    /// Route API requests through this proxy (http, https, or socks5)
    #[arg(short, long, value_name = "URI")]
    proxy: Option<Url>,

    /// Display tweets with these hashtags or keywords
    #[arg(short, long = "tag", value_name = "TAG", num_args = 1..)]
    tags: Vec<String>,

    /// Display tweets from this user
    #[arg(short, long, value_parser = parse_handle)]
    user: Option<String>,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity<WarnLevel> {
        self.verbosity
    }

    /// Path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config
    }

    /// Number of tweets to display per search.
    pub fn amount(&self) -> usize {
        self.amount as usize
    }

    /// True if searches should repeat until interrupted.
    pub fn daemon(&self) -> bool {
        self.daemon
    }

    /// Checks that there is something to search for.
    pub fn validate(&self) -> Result<(), Error> {
        if self.user.is_none() && self.tags.is_empty() {
            let usage = Config::command().render_usage();
            Err(Error::Usage(format!(
                "no search target: supply --user and/or --tag\n{usage}"
            )))
        } else {
            Ok(())
        }
    }

    /// The searches to run each cycle: the user's timeline first, if a user
    /// was given, then the tag search, if any tags were given.
    pub fn queries(&self) -> Vec<Query> {
        let user = self.user.iter().map(build_user_query);
        let tags = (!self.tags.is_empty()).then(|| build_tag_query(&self.tags, self.lang.as_str()));
        user.chain(tags).collect()
    }
}

/// Runs searches for the command-line program.
#[derive(Debug)]
pub struct Runner {
    config: Config,
    factory: HTTPClientFactory,
    view_options: ViewOptions,
}

impl Runner {
    /// Creates a new program runner using the given `config`, opening
    /// sessions with clients from `factory`.
    pub fn new(config: Config, factory: HTTPClientFactory) -> Self {
        let view_options = ViewOptions::build()
            .color(io::stdout().is_terminal())
            .build();
        Self {
            config,
            factory,
            view_options,
        }
    }
}

impl Cycle for Runner {
    async fn run(&mut self) -> Result<(), Error> {
        clear_screen()?;

        // Validated before the loop started, but re-read every cycle so
        // rotated credentials are picked up without a restart.
        let credentials = conf::load(self.config.config_path())?;

        let mut out = io::stdout();
        for query in self.config.queries() {
            let session = Session::open(credentials.clone(), &self.factory)?;
            search(
                &session,
                &query,
                self.config.amount(),
                &self.view_options,
                &mut out,
            )
            .await?;
        }
        Ok(())
    }
}

fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    if stdout.is_terminal() {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}

/// Runs the command-line program using the given `config`.
///
/// Checks run in this order: the configuration file must exist and hold
/// credentials, there must be something to search for, and an HTTP client
/// must be constructible. Then searches run until done or interrupted.
pub async fn run(config: Config) -> Result<(), Error> {
    conf::load(config.config_path())?;
    config.validate()?;

    let factory = HTTPClientFactory::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.proxy.clone(),
    )
    .map_err(Error::DependencyUnavailable)?;
    if let Some(proxy) = factory.proxy() {
        info!("routing requests through {proxy}");
    }

    let (canceller, cancellation) = runner::cancellation();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("received interrupt, stopping");
            canceller.cancel();
        }
    });

    let run_loop = RunLoop::new(config.daemon());
    let mut runner = Runner::new(config, factory);
    let completed = run_loop.run(&mut runner, cancellation).await?;
    debug!("finished after {completed} cycle(s)");
    Ok(())
}

#[cfg(test)]
mod tests {
    mod config {
        use crate::cli::{Config, Error};
        use crate::twitter::query::{Language, Query, build_tag_query, build_user_query};
        use clap::Parser;
        use clap::error::ErrorKind;
        use std::path::Path;

        fn parse(args: &[&str]) -> Result<Config, clap::Error> {
            let mut argv = vec!["tweetsearch"];
            argv.extend_from_slice(args);
            Config::try_parse_from(argv)
        }

        #[test]
        fn it_uses_defaults() {
            let config = parse(&["--user", "rustlang"]).unwrap();
            assert_eq!(config.amount(), 10);
            assert_eq!(config.config_path(), Path::new("./twitter.cfg"));
            assert!(!config.daemon());
            assert_eq!(config.lang, Language::En);
            assert!(config.proxy.is_none());
            assert!(config.tags.is_empty());
        }

        #[test]
        fn it_parses_short_flags() {
            let config = parse(&[
                "-a", "3", "-c", "other.cfg", "-d", "-l", "nl", "-p", "http://127.0.0.1:3128",
                "-t", "rust", "-u", "rustlang",
            ])
            .unwrap();
            assert_eq!(config.amount(), 3);
            assert_eq!(config.config_path(), Path::new("other.cfg"));
            assert!(config.daemon());
            assert_eq!(config.lang, Language::Nl);
            assert_eq!(config.proxy.unwrap().as_str(), "http://127.0.0.1:3128/");
            assert_eq!(config.tags, vec!["rust"]);
            assert_eq!(config.user.as_deref(), Some("rustlang"));
        }

        #[test]
        fn it_collects_multiple_tags_in_order() {
            let config = parse(&["--tag", "rust", "golang", "zig"]).unwrap();
            assert_eq!(config.tags, vec!["rust", "golang", "zig"]);
        }

        #[test]
        fn it_accepts_repeated_tag_flags() {
            let config = parse(&["-t", "rust", "-t", "golang"]).unwrap();
            assert_eq!(config.tags, vec!["rust", "golang"]);
        }

        #[test]
        fn it_strips_at_signs_from_users() {
            let config = parse(&["--user", "@rustlang"]).unwrap();
            assert_eq!(config.user.as_deref(), Some("rustlang"));
        }

        #[test]
        fn it_rejects_unknown_languages() {
            let err = parse(&["--tag", "rust", "--lang", "de"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidValue);
        }

        #[test]
        fn it_rejects_non_positive_amounts() {
            for amount in ["0", "-1", "ten"] {
                let result = parse(&["--tag", "rust", "--amount", amount]);
                assert!(result.is_err(), "{amount} was accepted");
            }
        }

        #[test]
        fn it_rejects_invalid_proxies() {
            assert!(parse(&["--tag", "rust", "--proxy", "not a uri"]).is_err());
        }

        #[test]
        fn it_rejects_invalid_handles() {
            assert!(parse(&["--user", "not-a-handle!"]).is_err());
        }

        #[test]
        fn it_accepts_no_target_at_parse_time() {
            assert!(parse(&[]).is_ok());
        }

        #[test]
        fn it_requires_a_target_when_validated() {
            let config = parse(&[]).unwrap();
            let err = config.validate().unwrap_err();
            assert!(matches!(err, Error::Usage(_)));
            assert_eq!(err.exit_code(), 2);
            assert!(err.to_string().contains("Usage: tweetsearch"), "{err}");
        }

        #[test]
        fn it_validates_with_a_user_or_tags() {
            assert!(parse(&["-u", "rustlang"]).unwrap().validate().is_ok());
            assert!(parse(&["-t", "rust"]).unwrap().validate().is_ok());
        }

        #[test]
        fn it_searches_the_user_before_tags() {
            let config = parse(&["-t", "rust", "golang", "-u", "rustlang", "-l", "nl"]).unwrap();
            let tags = vec![String::from("rust"), String::from("golang")];
            let expected: Vec<Query> =
                vec![build_user_query("rustlang"), build_tag_query(&tags, "nl")];
            assert_eq!(config.queries(), expected);
        }

        #[test]
        fn it_searches_only_what_was_asked_for() {
            let config = parse(&["-u", "rustlang"]).unwrap();
            assert_eq!(config.queries(), vec![build_user_query("rustlang")]);
            let config = parse(&["-t", "rust"]).unwrap();
            assert!(matches!(config.queries().as_slice(), [Query::Tag(_)]));
        }
    }

    mod end_to_end {
        use crate::cli::Config;
        use crate::conf;
        use crate::search::search;
        use crate::test_utils::TestService;
        use crate::twitter::{Credentials, Session};
        use crate::view::ViewOptions;
        use clap::Parser;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn it_prints_the_first_tweets_for_tags() {
            let text = "[twitter]\n\
                        consumerkey = k\n\
                        consumersecret = s\n\
                        accesstoken = t\n\
                        accesstokensecret = ts\n";
            let credentials = conf::parse("twitter.cfg", text).unwrap();
            assert_eq!(credentials, Credentials::new("k", "s", "t", "ts"));

            let config = Config::try_parse_from([
                "tweetsearch", "--tag", "rust", "golang", "--amount", "2", "--lang", "en",
            ])
            .unwrap();
            config.validate().unwrap();

            let mut out = Vec::new();
            for query in config.queries() {
                let session = Session::with_service(TestService::fixture("search_rust_golang"));
                search(&session, &query, config.amount(), &ViewOptions::default(), &mut out)
                    .await
                    .unwrap();
            }

            let expected = "\
@ferris - Sat Oct 17 09:15:02 +0000 2026
Rewrote our Go service in Rust, p99 latency dropped by half #rust #golang

@gopher - Sat Oct 17 09:11:45 +0000 2026
Goroutines vs tokio tasks: a thread

";
            assert_eq!(String::from_utf8(out).unwrap(), expected);
        }
    }
}
