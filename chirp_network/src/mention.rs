use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use chirp_core::Tweet;

lazy_static! {
    static ref MENTION: Regex = Regex::new(r"@([A-Za-z0-9_]+)").unwrap();
}

/// Canonical form of a username.
pub(crate) fn normalize_username(username: &str) -> String {
    username.to_lowercase()
}

/// Usernames mentioned in `text`, lowercased, in order of appearance.
/// Repeated mentions are kept.
pub fn mentioned_users(text: &str) -> Vec<String> {
    MENTION
        .captures_iter(text)
        .map(|caps| normalize_username(&caps[1]))
        .collect()
}

/// Distinct usernames mentioned anywhere in `tweets`.
pub fn mentioned_users_in(tweets: &[Tweet]) -> BTreeSet<String> {
    tweets.iter().flat_map(|t| mentioned_users(&t.text)).collect()
}
