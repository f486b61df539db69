use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use chirp_core::Tweet;

use crate::mention::{mentioned_users, normalize_username};

/// Who follows whom: each key maps to the set of users it follows.
///
/// Graphs returned by [`guess_follows_graph`] are lowercase, have no self edges,
/// and contain every followed user as a key. Graphs built by callers through
/// `From` or `FromIterator` are taken as given.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FollowsGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl FollowsGraph {
    pub fn new() -> Self {
        Self { edges: BTreeMap::new() }
    }

    /// All users present as nodes.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// The users `user` follows, or `None` if `user` is not a node.
    pub fn follows(&self, user: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(user)
    }

    pub fn is_following(&self, follower: &str, followed: &str) -> bool {
        self.edges.get(follower).is_some_and(|f| f.contains(followed))
    }

    /// Nodes whose follow set contains `user`.
    pub fn followers_of<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a str> {
        self.edges
            .iter()
            .filter(move |(_, follows)| follows.contains(user))
            .map(|(follower, _)| follower.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.edges.iter().map(|(user, follows)| (user.as_str(), follows))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, BTreeSet<String>> {
        self.edges
    }
}

impl From<BTreeMap<String, BTreeSet<String>>> for FollowsGraph {
    fn from(edges: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { edges }
    }
}

impl<K, I, V> FromIterator<(K, I)> for FollowsGraph
where
    K: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (user, follows) in iter {
            edges
                .entry(user.into())
                .or_default()
                .extend(follows.into_iter().map(Into::into));
        }
        Self { edges }
    }
}

/// Guess who follows whom from the evidence in `tweets`.
///
/// An author is taken to follow every user they @-mention. Usernames are
/// lowercased. Self-mentions are ignored, and an author only becomes a node
/// through a tweet that mentions someone else. Every mentioned user becomes a
/// node, even if they never tweet.
///
/// A tweet whose only mentions are of its author adds nothing: the author is
/// neither given a self edge nor added as an empty node.
pub fn guess_follows_graph(tweets: &[Tweet]) -> FollowsGraph {
    let mut edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for tweet in tweets {
        let author = normalize_username(&tweet.author);
        let followed = mentioned_users(&tweet.text)
            .into_iter()
            .filter(|user| *user != author)
            .collect::<Vec<_>>();
        if followed.is_empty() {
            continue;
        }

        for user in &followed {
            edges.entry(user.clone()).or_default();
        }
        edges.entry(author).or_default().extend(followed);
    }

    let graph = FollowsGraph::from(edges);
    tracing::debug!(
        "Guessed follows graph with {} users and {} edges from {} tweets",
        graph.len(),
        graph.edge_count(),
        tweets.len()
    );
    graph
}
