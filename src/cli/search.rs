use tabled::Table;

use crate::{
    Res, config, info, success,
    transfer::{MatchSelector, QueryBuilder, TrackResolver},
    types::{CandidateTableRow, Track},
    warning,
    youtube::YouTubeClient,
};

/// Searches the instrumental query of a single track and shows how every
/// candidate scored.
pub async fn match_track(title: String, artist: String) -> Res<()> {
    let track = Track::new(title, artist, "");
    let selector = MatchSelector::new(config::match_weights()?);
    let youtube = YouTubeClient::from_config().await?;
    let resolver = TrackResolver::new(&youtube, selector);

    let query = QueryBuilder::new().build(&track);
    info!("Query: {}", query.text);

    let candidates = resolver.candidates(&query).await?;
    let scored = resolver.selector().score(&query, &candidates);
    let best = resolver.selector().best(&query, &candidates);

    let rows: Vec<CandidateTableRow> = scored
        .iter()
        .map(|s| CandidateTableRow {
            rank: s.candidate.rank,
            title: s.candidate.title.clone(),
            channel: s.candidate.channel.clone(),
            overlap: format!("{:.2}", s.overlap),
            score: format!("{:.2}", s.score),
            selected: match &best {
                Some(b) if b.candidate.video_id == s.candidate.video_id => "*".to_string(),
                _ => String::new(),
            },
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(rows));
    }

    match best {
        Some(b) => success!(
            "Selected {} https://www.youtube.com/watch?v={}",
            b.candidate.title,
            b.candidate.video_id
        ),
        None => warning!(
            "No candidate reached the acceptance threshold of {:.2}.",
            resolver.selector().weights().acceptance_threshold
        ),
    }
    Ok(())
}
