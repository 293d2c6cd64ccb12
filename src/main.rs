mod bot;
mod category;
mod compose;
mod config;
mod constants;
mod corpus;
mod discord;
mod error;
mod giantbomb;
mod history;
mod logging;
mod message;
mod rotation;
mod selector;
mod state;
mod textgen;
mod utils;
mod votes;

#[cfg(test)]
mod test_support;

use std::env;

use anyhow::Context;
use dotenv::dotenv;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bot::Bot;
use config::Config;
use corpus::Corpus;
use logging::{setup_logging, LogSettings};

/// Validates the config, then starts logging. A bad config returns before
/// the log file is created.
fn startup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Config> {
    let config = Config::from_lookup(&lookup).context("invalid configuration")?;
    setup_logging(&LogSettings::from_lookup(&lookup)).context("failed to set up logging")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = startup(|key| env::var(key).ok())?;
    let corpus = Corpus::load(config.corpus_dir.as_deref());
    let bot = Bot::new(config, corpus).context("failed to build HTTP client")?;

    let report = bot.run(&mut StdRng::from_entropy()).await;
    info!(
        "Run finished: category={} message_id={} pinned={} announced={}",
        report.category,
        report.message_id.as_deref().unwrap_or("none"),
        report.pinned,
        report.announced
    );

    Ok(())
}
