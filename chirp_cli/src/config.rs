use std::path::PathBuf;

use chirp_core::{Error, Result};

pub const DEFAULT_PRINT_GRAPH: bool = false;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tweets_path: PathBuf,
    pub influencer_limit: Option<usize>,
    pub print_graph: bool,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let tweets_path = lookup("TWEETS_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(Error::MissingConfig("TWEETS_PATH".to_string()))?;

        let influencer_limit = match lookup("INFLUENCER_LIMIT") {
            Some(limit) => match limit.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    return Err(Error::InvalidConfig(format!(
                        "INFLUENCER_LIMIT must be a positive integer, got `{}`",
                        limit
                    )))
                }
                Ok(limit) => Some(limit),
            },
            None => None,
        };

        let print_graph = match lookup("PRINT_GRAPH") {
            Some(flag) => flag
                .trim()
                .parse::<bool>()
                .map_err(|_| Error::InvalidConfig(format!("PRINT_GRAPH must be true or false, got `{}`", flag)))?,
            None => DEFAULT_PRINT_GRAPH,
        };

        Ok(Config {
            tweets_path,
            influencer_limit,
            print_graph,
        })
    }
}
