mod config;
mod report;

use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use chirp_core::load_tweets;
use chirp_network::{guess_follows_graph, rank_influencers};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    // 2. Load configuration
    let config = Config::from_env()?;

    // 3. Load tweets
    let tweets = load_tweets(&config.tweets_path)
        .with_context(|| format!("cannot load tweets from {}", config.tweets_path.display()))?;

    // 4. Build graph and rank
    let graph = guess_follows_graph(&tweets);
    tracing::info!("Inferred {} users and {} follows edges", graph.len(), graph.edge_count());
    let ranking = rank_influencers(&graph);
    if ranking.is_empty() {
        tracing::warn!("No user has any inferred followers");
    }

    // 5. Print results
    if config.print_graph {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    }
    for line in report::ranking_lines(&ranking, config.influencer_limit) {
        println!("{}", line);
    }
    Ok(())
}
