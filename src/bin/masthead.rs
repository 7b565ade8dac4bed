use anyhow::Result;
use clap::Parser;
use plotlines::config::Config;
use plotlines::masthead::generate_masthead;

#[derive(Debug, Parser)]
#[command(name = "masthead", about = "Masthead banner generator")]
struct Args {
    #[arg(default_value = "80303")]
    station: String,

    #[arg(default_value = "hemingway")]
    author: String,

    #[arg(default_value = "spring")]
    season: String,

    #[arg(default_value = "sunny")]
    weather: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = Config::from_env();

    let result = generate_masthead(&config, &args.station, &args.author, &args.season, &args.weather)?;

    println!("Generated: {}", result.url);
    println!("Masthead name: {}", result.masthead_name);
    println!("Font: {}", result.font_used);

    Ok(())
}
