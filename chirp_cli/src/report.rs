use chirp_network::Influencer;

/// One line per influencer, numbered from 1, truncated to `limit` if given.
pub fn ranking_lines(ranking: &[Influencer], limit: Option<usize>) -> Vec<String> {
    let limit = limit.unwrap_or(ranking.len());
    ranking
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, influencer)| {
            let noun = if influencer.followers == 1 { "follower" } else { "followers" };
            format!("{}. {} ({} {})", index + 1, influencer.username, influencer.followers, noun)
        })
        .collect()
}
