use anyhow::Result;
use chrono::Local;
use clap::{Parser, ValueEnum};
use log::info;
use plotlines::authors::AuthorStyles;
use plotlines::config::Config;
use plotlines::issue::{build_issue, IssueParams};
use plotlines::weather::WeatherClient;

/// Garden conversation engine, invoked once per newsletter run by the
/// dispatcher.
#[derive(Debug, Parser)]
#[command(name = "garden-engine", about = "Garden conversation engine")]
struct Args {
    /// NWS station code
    #[arg(long)]
    station: String,

    /// Author style key
    #[arg(long, default_value = "hemingway")]
    author: String,

    /// City name
    #[arg(long)]
    city: String,

    /// State abbreviation
    #[arg(long)]
    state: String,

    /// Latitude
    #[arg(long)]
    lat: f64,

    /// Longitude
    #[arg(long)]
    lon: f64,

    /// Garden context for location
    #[arg(long, default_value = "")]
    context: String,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    output: OutputFormat,

    /// Number of characters
    #[arg(long, default_value_t = 4)]
    num_chars: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting engine: {}, {} ({})", args.city, args.state, args.station);

    let config = Config::from_env();
    let styles = AuthorStyles::load(&config.authors_file);

    let weather = WeatherClient::new()?.fetch(args.lat, args.lon).await;

    let issue = build_issue(
        &IssueParams {
            author: &args.author,
            city: &args.city,
            state: &args.state,
            garden_context: &args.context,
            num_chars: args.num_chars,
        },
        &weather,
        &styles,
        Local::now(),
    );

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&issue)?),
        OutputFormat::Text => println!("{}", issue.render_text()),
    }

    Ok(())
}
