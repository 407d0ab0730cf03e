use clap::Parser;
use time::Month;
use tokio::io::{AsyncBufReadExt, BufReader};
use txdash::dashboard::{command::Command, command::HELP, render::render, ApiClient, Dashboard};

/// Terminal client for the transaction dashboard API.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version)]
struct Args {
    /// Base URL of the API, including the `/api` prefix.
    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:3000/api")]
    api_url: String,

    /// Initially selected month (1-12).
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "txdash=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let month = Month::try_from(args.month)?;
    let mut dash = Dashboard::with_month(ApiClient::new(&args.api_url)?, month);
    dash.refresh().await;
    println!("{}", render(&dash));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };
        match cmd {
            Command::Month(m) => dash.set_month(m).await,
            Command::Search(text) => dash.set_search(text).await,
            Command::ClearSearch => dash.set_search("").await,
            Command::Next => dash.next_page().await,
            Command::Previous => dash.previous_page().await,
            Command::Refresh => dash.refresh().await,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }
        println!("{}", render(&dash));
    }
    Ok(())
}
