use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use yt_search::config::{Config, load_env, youtube_api_key};
use yt_search::error::Result;

#[derive(Parser)]
#[command(name = "yt-search")]
#[command(about = "Search YouTube and print view, like and comment statistics")]
#[command(version)]
struct Cli {
    /// Search keyword
    #[arg(value_name = "KEYWORD", allow_hyphen_values = true)]
    keywords: Vec<String>,
}

/// Check the key before the arguments. A rejected command line counts as
/// zero keywords and so surfaces as a usage error.
fn resolve_config(
    api_key: Option<String>,
    parsed: std::result::Result<Cli, clap::Error>,
) -> Result<Config> {
    let keywords = parsed.map(|cli| cli.keywords).unwrap_or_default();
    Config::resolve(api_key, keywords)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    load_env();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let parsed = Cli::try_parse();
    if let Err(e) = &parsed {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
    }

    let config = match resolve_config(youtube_api_key(), parsed) {
        Ok(config) => config,
        Err(e) => return ExitCode::from(yt_search::report_error(&mut std::io::stderr(), &e)),
    };

    yt_search::run(config).await
}
