use clap::Parser;
use tweetsearch::cli::{self, Config};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    if let Err(err) = cli::run(config).await {
        cli::die(err.exit_code(), &format!("[-] {err}"));
    }
}
