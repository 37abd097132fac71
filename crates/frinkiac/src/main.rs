use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use frinkiac::config::Config;
use frinkiac::{Caption, FrinkiacClient};

const USAGE: &str = "usage: frinkiac <search <query...> | caption <episode> <timestamp> | random>";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = FrinkiacClient::with_base_url(&config.base_url);
    info!("Frinkiac client ready ({})", client.base_url());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        Some((cmd, rest)) if cmd == "search" && !rest.is_empty() => {
            run_search(&client, &config, &rest.join(" ")).await
        }
        Some((cmd, [episode, timestamp])) if cmd == "caption" => {
            let timestamp: u64 = timestamp
                .parse()
                .context("timestamp must be milliseconds from episode start")?;
            let caption = client.caption(episode, timestamp).await?;
            print_caption(&client, &config, &caption)
        }
        Some((cmd, [])) if cmd == "random" => {
            let caption = client.random().await?;
            print_caption(&client, &config, &caption)
        }
        _ => bail!(USAGE),
    }
}

async fn run_search(client: &FrinkiacClient, config: &Config, query: &str) -> Result<()> {
    let frames = client.search(query).await?;
    info!("{} frames match {query:?}", frames.len());

    for frame in frames.iter().take(5) {
        println!(
            "{} @ {}ms  {}",
            frame.episode,
            frame.timestamp,
            client.thumbnail_url(frame)?
        );
    }

    // Full caption and shareable meme URL for the top hit.
    if let Some(frame) = frames.first() {
        let caption = client.caption(&frame.episode, frame.timestamp).await?;
        print_caption(client, config, &caption)?;
    }

    Ok(())
}

fn print_caption(client: &FrinkiacClient, config: &Config, caption: &Caption) -> Result<()> {
    println!(
        "{} — {} ({})",
        caption.episode.key, caption.episode.title, caption.episode.original_air_date
    );
    println!("\"{}\"", caption.quote());
    println!(
        "meme: {}",
        client.meme_url(&caption.frame, &caption.quote(), config.meme_line_length)?
    );
    Ok(())
}
