//! Infers who follows whom from @-mentions in tweets, and ranks users by follower count.

mod graph;
mod influence;
mod mention;
#[cfg(test)]
mod test_util;

pub use graph::{guess_follows_graph, FollowsGraph};
pub use influence::{follower_counts, influencers, rank_influencers, Influencer};
pub use mention::{mentioned_users, mentioned_users_in};
