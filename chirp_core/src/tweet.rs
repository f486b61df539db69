use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::error::{Error, Result};
use crate::util::TwitterDate;

/// A single post. Usernames are compared case-insensitively by consumers.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Tweet {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub id: u64,
    pub author: String,
    pub text: String,
    #[serde_as(as = "TwitterDate")]
    pub created_at: DateTime<Utc>,
}

impl Tweet {
    pub fn new(id: u64, author: impl Into<String>, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Tweet {
            id,
            author: author.into(),
            text: text.into(),
            created_at,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.author.trim().is_empty() {
            return Err(Error::InvalidTweet(format!("tweet {} has no author", self.id)));
        }
        if self.author.chars().any(char::is_whitespace) {
            return Err(Error::InvalidTweet(format!(
                "tweet {} has malformed author `{}`",
                self.id, self.author
            )));
        }
        Ok(())
    }
}

/// Parse a JSON array of tweets, rejecting any tweet without a usable author.
pub fn parse_tweets(content: &str) -> Result<Vec<Tweet>> {
    let tweets: Vec<Tweet> = serde_json::from_str(content)?;
    for tweet in &tweets {
        tweet.validate()?;
    }
    tracing::debug!("Parsed {} tweets", tweets.len());
    Ok(tweets)
}

/// Read and parse a JSON tweet file.
pub fn load_tweets(path: impl AsRef<Path>) -> Result<Vec<Tweet>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let tweets = parse_tweets(&content)?;
    tracing::info!("Loaded {} tweets from {}", tweets.len(), path.display());
    Ok(tweets)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = r#"[
        {"id": 1, "author": "alyssa", "text": "is it reasonable to talk about rivest so much? @bbitdiddle", "created_at": "Wed Oct 10 20:19:24 +0000 2018"},
        {"id": "2", "author": "bbitdiddle", "text": "rivest talk in 30 minutes #hype", "created_at": "Wed Oct 10 21:00:00 +0000 2018"}
    ]"#;

    #[test]
    fn test_parse_tweets() {
        let tweets = parse_tweets(SAMPLE).unwrap();
        assert_eq!(tweets.len(), 2);
        assert_eq!(tweets[0].id, 1);
        assert_eq!(tweets[1].id, 2);
        assert_eq!(tweets[0].author, "alyssa");
        assert_eq!(tweets[1].text, "rivest talk in 30 minutes #hype");
        assert_eq!(
            tweets[0].created_at,
            Utc.with_ymd_and_hms(2018, 10, 10, 20, 19, 24).unwrap()
        );
    }

    #[test]
    fn test_serialize_tweet() {
        let tweet = parse_tweets(SAMPLE).unwrap().remove(0);
        let value = serde_json::to_value(&tweet).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["created_at"], "Wed Oct 10 20:19:24 +0000 2018");
    }

    #[test]
    fn test_parse_tweets_empty() {
        assert!(parse_tweets("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tweets_blank_author() {
        let content = r#"[{"id": 3, "author": "  ", "text": "@alyssa hi", "created_at": "Wed Oct 10 20:19:24 +0000 2018"}]"#;
        assert!(matches!(parse_tweets(content), Err(Error::InvalidTweet(_))));
    }

    #[test]
    fn test_parse_tweets_author_with_space() {
        let content = r#"[{"id": 4, "author": "ben bitdiddle", "text": "hi", "created_at": "Wed Oct 10 20:19:24 +0000 2018"}]"#;
        assert!(matches!(parse_tweets(content), Err(Error::InvalidTweet(_))));
    }

    #[test]
    fn test_parse_tweets_malformed() {
        assert!(matches!(parse_tweets("{\"id\": 1}"), Err(Error::JSONError(_))));
        let bad_date = r#"[{"id": 5, "author": "alyssa", "text": "hi", "created_at": "2018-10-10"}]"#;
        assert!(matches!(parse_tweets(bad_date), Err(Error::JSONError(_))));
    }

    #[test]
    fn test_load_tweets() {
        let path = std::env::temp_dir().join(format!("chirp_core_tweets_{}.json", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let tweets = load_tweets(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(tweets, parse_tweets(SAMPLE).unwrap());
    }

    #[test]
    fn test_load_tweets_missing_file() {
        let path = std::env::temp_dir().join("chirp_core_does_not_exist.json");
        assert!(matches!(load_tweets(path), Err(Error::IOError(_))));
    }
}
