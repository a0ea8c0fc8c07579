use instrumentalcli::config::split_list;
use instrumentalcli::transfer::{MatchSelector, MatchWeights, QueryBuilder, tokenize};
use instrumentalcli::types::{CandidateVideo, SearchQuery, Track};

// Helper function to create a candidate video
fn candidate(video_id: &str, title: &str, rank: usize) -> CandidateVideo {
    CandidateVideo {
        video_id: video_id.to_string(),
        title: title.to_string(),
        channel: "Some Channel".to_string(),
        rank,
    }
}

fn shape_of_you_query() -> SearchQuery {
    QueryBuilder::new().build(&Track::new("Shape of You", "Ed Sheeran", "spotify-1"))
}

#[test]
fn test_select_prefers_instrumental_over_official_video() {
    let selector = MatchSelector::default();
    let candidates = vec![
        candidate("instrumental", "Shape of You - Instrumental", 0),
        candidate("official", "Shape of You (Official Video)", 1),
    ];

    let selected = selector.select(&shape_of_you_query(), &candidates);
    assert_eq!(selected.as_deref(), Some("instrumental"));
}

#[test]
fn test_select_empty_candidates() {
    let selector = MatchSelector::default();
    assert_eq!(selector.select(&shape_of_you_query(), &[]), None);
}

#[test]
fn test_select_rejects_below_threshold() {
    let selector = MatchSelector::default();
    let candidates = vec![
        candidate("official", "Shape of You (Official Video)", 0),
        candidate("unrelated", "Perfect Instrumental", 1),
    ];

    assert_eq!(selector.select(&shape_of_you_query(), &candidates), None);
}

#[test]
fn test_select_returns_candidate_id_only() {
    let selector = MatchSelector::default();
    let candidates = vec![
        candidate("a", "Shape of You Karaoke", 0),
        candidate("b", "Ed Sheeran - Shape of You (Instrumental)", 1),
        candidate("c", "Shape of You lyrics", 2),
    ];

    let selected = selector.select(&shape_of_you_query(), &candidates).unwrap();
    assert!(candidates.iter().any(|c| c.video_id == selected));
    // The artist match lifts b above the higher ranked title without the artist
    assert_eq!(selected, "b");
}

#[test]
fn test_select_is_deterministic() {
    let selector = MatchSelector::default();
    let candidates = vec![
        candidate("a", "Shape of You Instrumental", 0),
        candidate("b", "Shape of You Instrumental", 1),
        candidate("c", "Shape of You Karaoke", 2),
    ];
    let query = shape_of_you_query();

    let first = selector.select(&query, &candidates);
    let second = selector.select(&query, &candidates);
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some("a"));
}

#[test]
fn test_select_tie_goes_to_lowest_rank() {
    let selector = MatchSelector::new(MatchWeights {
        rank_penalty: 0.0,
        ..MatchWeights::default()
    });
    // Listed out of rank order on purpose
    let candidates = vec![
        candidate("second", "Shape of You Instrumental", 1),
        candidate("first", "Shape of You Instrumental", 0),
    ];

    let selected = selector.select(&shape_of_you_query(), &candidates);
    assert_eq!(selected.as_deref(), Some("first"));
}

#[test]
fn test_select_skips_candidates_without_id() {
    let selector = MatchSelector::default();
    let candidates = vec![
        candidate("", "Shape of You Ed Sheeran Instrumental", 0),
        candidate("real", "Shape of You - Instrumental", 1),
    ];

    let selected = selector.select(&shape_of_you_query(), &candidates);
    assert_eq!(selected.as_deref(), Some("real"));
}

#[test]
fn test_score_breakdown() {
    let selector = MatchSelector::default();
    let candidates = vec![
        candidate("a", "Shape of You - Instrumental", 0),
        candidate("b", "Shape of You (Official Video)", 1),
    ];

    let scored = selector.score(&shape_of_you_query(), &candidates);
    assert_eq!(scored.len(), 2);

    // Every title word, no artist, bonus
    assert!((scored[0].overlap - 1.0).abs() < 1e-9);
    assert!(!scored[0].has_artist);
    assert!(scored[0].has_bonus);
    assert!(!scored[0].is_excluded);
    assert!((scored[0].score - 1.5).abs() < 1e-9);

    // Every title word, exclusion penalty, one rank down
    assert!((scored[1].overlap - 1.0).abs() < 1e-9);
    assert!(!scored[1].has_bonus);
    assert!(scored[1].is_excluded);
    assert!((scored[1].score - (1.0 - 0.6 - 0.01)).abs() < 1e-9);
}

#[test]
fn test_score_ignores_qualifier_and_secondary_artists() {
    let selector = MatchSelector::default();
    let query = QueryBuilder::new().build(&Track::new("Stay", "The Kid LAROI, Justin Bieber", "1"));
    assert_eq!(query.text, "Stay The Kid LAROI, Justin Bieber instrumental");
    assert_eq!(query.artist, "The Kid LAROI");

    let candidates = vec![
        candidate("short", "STAY (Instrumental)", 0),
        candidate("karaoke", "Stay - Karaoke Instrumental", 1),
    ];

    let scored = selector.score(&query, &candidates);
    assert!((scored[0].overlap - 1.0).abs() < 1e-9);
    assert!((scored[0].score - 1.5).abs() < 1e-9);
    assert_eq!(selector.select(&query, &candidates).as_deref(), Some("short"));
}

#[test]
fn test_select_requires_bonus_by_default() {
    let selector = MatchSelector::default();
    let candidates = vec![candidate("vocal", "Ed Sheeran - Shape of You", 0)];

    let scored = selector.score(&shape_of_you_query(), &candidates);
    assert!(scored[0].has_artist);
    assert!((scored[0].score - 1.1).abs() < 1e-9);
    assert_eq!(selector.select(&shape_of_you_query(), &candidates), None);
}

#[test]
fn test_terms_are_case_insensitive() {
    let selector = MatchSelector::new(MatchWeights {
        bonus_terms: vec!["Instrumental".to_string()],
        exclusion_terms: vec!["LYRIC Video".to_string()],
        ..MatchWeights::default()
    });
    let candidates = vec![
        candidate("inst", "Shape of You - Instrumental", 0),
        candidate("lyric", "Shape of You (Lyric Video)", 1),
    ];

    let scored = selector.score(&shape_of_you_query(), &candidates);
    assert!(scored[0].has_bonus);
    assert!(scored[1].is_excluded);
    assert_eq!(
        selector.select(&shape_of_you_query(), &candidates).as_deref(),
        Some("inst")
    );
}

#[test]
fn test_exclusion_terms_match_whole_words() {
    let selector = MatchSelector::default();
    let query = shape_of_you_query();
    let candidates = vec![
        candidate("a", "Shape of You (Lyrical Instrumental)", 0),
        candidate("b", "Shape of You Instrumental [Lyrics]", 1),
        candidate("c", "Shape of You Instrumental | Official  Music-Video", 2),
    ];

    let scored = selector.score(&query, &candidates);
    assert!(!scored[0].is_excluded);
    assert!(scored[1].is_excluded);
    assert!(scored[2].is_excluded);
}

#[test]
fn test_custom_weights() {
    // Threshold of zero accepts any non-negative score
    let selector = MatchSelector::new(MatchWeights {
        acceptance_threshold: 0.0,
        ..MatchWeights::default()
    });
    let candidates = vec![candidate("plain", "Shape of You", 0)];
    assert_eq!(
        selector.select(&shape_of_you_query(), &candidates).as_deref(),
        Some("plain")
    );

    // Without bonus terms the instrumental title no longer stands out
    let selector = MatchSelector::new(MatchWeights {
        bonus_terms: Vec::new(),
        ..MatchWeights::default()
    });
    let candidates = vec![candidate("inst", "Shape of You - Instrumental", 0)];
    assert_eq!(selector.select(&shape_of_you_query(), &candidates), None);
}

#[test]
fn test_default_weights() {
    let weights = MatchWeights::default();
    assert!(weights.acceptance_threshold > 1.0 + weights.artist_weight);
    assert!(weights.bonus_weight > 0.0);
    assert!(weights.exclusion_penalty > 0.0);
    assert!(weights.bonus_terms.contains(&"instrumental".to_string()));
    assert!(weights.exclusion_terms.contains(&"lyrics".to_string()));
    assert!(weights.exclusion_terms.contains(&"official video".to_string()));
    assert!(weights.exclusion_terms.contains(&"music video".to_string()));
}

#[test]
fn test_tokenize() {
    assert_eq!(
        tokenize("Shape of You - Instrumental (HQ)!"),
        vec!["shape", "of", "you", "instrumental", "hq"]
    );
    assert_eq!(tokenize("Don't"), vec!["don", "t"]);
    assert!(tokenize(" -- ").is_empty());
}

#[test]
fn test_split_list() {
    assert_eq!(
        split_list("Lyrics, Official Video ,,music video"),
        vec!["lyrics", "official video", "music video"]
    );
    assert!(split_list(" , ").is_empty());
}
