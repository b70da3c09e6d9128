use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use quotebox::config::Config;
use quotebox::loader::QuoteLoader;
use quotebox::quotes::select;
use quotebox::share::{tweet_text, tweet_url};

/// Random quotes in your terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Override the quote source URL
    #[arg(long)]
    url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (suffixed with timestamp and pid)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Fetch once, print a random quote and exit without starting the UI
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = load_config(&args)?;
    quotebox::logging::init_tracing(args.log_file.as_deref());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let code = if args.check {
        run_check(&config, &runtime)?
    } else {
        quotebox::ui::run(&config, &runtime)?;
        ExitCode::SUCCESS
    };

    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(code)
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    if let Some(url) = &args.url {
        config.source.url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn run_check(config: &Config, runtime: &tokio::runtime::Runtime) -> anyhow::Result<ExitCode> {
    let loader = QuoteLoader::new(&config.source)?;
    let url = loader.url().to_string();
    let quotes = runtime.block_on(loader.load());
    println!("Loaded {} quotes from {}", quotes.len(), url);

    let palette = config.theme.palette();
    let mut rng = rand::thread_rng();
    let Some(selection) = select(&quotes, &palette, config.theme.initial_color, &mut rng) else {
        return Ok(ExitCode::FAILURE);
    };
    let quote = &quotes[selection.quote_index];
    println!("{}", tweet_text(quote));
    println!("Tweet: {}", tweet_url(quote));
    Ok(ExitCode::SUCCESS)
}
