pub mod error;
pub mod tweet;
mod util;

pub use error::*;
pub use tweet::{load_tweets, parse_tweets, Tweet};
