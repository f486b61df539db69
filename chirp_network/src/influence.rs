use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::FollowsGraph;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Influencer {
    pub username: String,
    pub followers: usize,
}

/// Follower count of every user in `graph`, including nodes nobody follows
/// and followed users that are not nodes themselves.
pub fn follower_counts(graph: &FollowsGraph) -> BTreeMap<String, usize> {
    let mut counts = graph.users().map(|user| (user.to_string(), 0)).collect::<BTreeMap<_, _>>();
    for (_, follows) in graph.iter() {
        for followed in follows {
            *counts.entry(followed.clone()).or_default() += 1;
        }
    }
    counts
}

/// Users with at least one follower, most followed first. Equal counts are
/// ordered by username so the ranking is reproducible.
pub fn rank_influencers(graph: &FollowsGraph) -> Vec<Influencer> {
    use itertools::Itertools;

    follower_counts(graph)
        .into_iter()
        .filter(|(_, followers)| *followers > 0)
        .map(|(username, followers)| Influencer { username, followers })
        .sorted_by(|a, b| {
            b.followers
                .cmp(&a.followers)
                .then_with(|| a.username.cmp(&b.username))
        })
        .collect()
}

/// Usernames from [`rank_influencers`], in the same order.
pub fn influencers(graph: &FollowsGraph) -> Vec<String> {
    rank_influencers(graph)
        .into_iter()
        .map(|influencer| influencer.username)
        .collect()
}
