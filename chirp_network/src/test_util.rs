use chrono::{TimeZone, Utc};

use chirp_core::Tweet;

use crate::graph::FollowsGraph;

pub(crate) fn tweet(id: u64, author: &str, text: &str) -> Tweet {
    let created_at = Utc.with_ymd_and_hms(2016, 2, 17, 10, 0, 0).unwrap();
    Tweet::new(id, author, text, created_at)
}

pub(crate) fn graph_of(entries: &[(&str, &[&str])]) -> FollowsGraph {
    entries.iter().map(|(user, follows)| (*user, follows.iter().copied())).collect()
}
