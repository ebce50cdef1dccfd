use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Env;
use log::{error, info};
use tokio::io::BufReader;

use reverse_dictionary::{
    config,
    ui::{run_lines, Terminal},
    DictionaryClient, SearchController, SearchOutcome,
};

#[derive(Debug, Parser)]
#[command(version, about = "Look up words by their description")]
struct Args {
    /// Search once for this description and exit [default: read one query per stdin line]
    query: Option<String>,

    /// Base URL of the dictionary API [default: $REVERSE_DICTIONARY_URL or http://localhost:8080]
    #[arg(long)]
    base_url: Option<String>,

    /// Print the results container as HTML
    #[arg(long)]
    html: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter(config::LOG_VAR))
        .init();

    let base_url = args.base_url.unwrap_or_else(config::base_url_from_env);
    let client = DictionaryClient::new(&base_url)
        .with_context(|| format!("Cannot use {base_url:?} as the dictionary API"))?;
    info!("Searching against {}", client.endpoint());

    let page = Arc::new(Terminal::new(args.html).context("Template parsing error")?);
    let controller = Arc::new(SearchController::new(Arc::clone(&page), client));

    if let Some(query) = args.query {
        page.set_input_value(&query);
        return Ok(exit_code(controller.on_search_triggered().await));
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let completed = run_lines(&controller, stdin)
        .await
        .context("Failed to read stdin")?;
    info!("{} searches completed", completed);
    Ok(ExitCode::SUCCESS)
}

// One-shot mode fails when nothing was rendered
fn exit_code(outcome: SearchOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
