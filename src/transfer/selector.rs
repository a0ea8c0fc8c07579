use std::collections::HashSet;

use crate::types::{CandidateVideo, SearchQuery};

/// Tunable weights of the match heuristic.
///
/// A candidate's score is
/// `overlap + artist_weight (if the primary artist appears) + bonus_weight (if
/// any bonus term) - exclusion_penalty (if any exclusion term) - rank_penalty *
/// rank`, where `overlap` is the share of the track title's words found in the
/// candidate title. The best candidate is only accepted when its score reaches
/// `acceptance_threshold`. The default threshold lies above a perfect overlap
/// plus the artist weight, so an accepted title always carries a bonus term.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchWeights {
    pub acceptance_threshold: f64,
    pub artist_weight: f64,
    pub bonus_weight: f64,
    pub exclusion_penalty: f64,
    pub rank_penalty: f64,
    /// Case-insensitive substrings that mark a title as an instrumental version.
    pub bonus_terms: Vec<String>,
    /// Whole-word phrases that mark a title as a vocal release.
    pub exclusion_terms: Vec<String>,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            acceptance_threshold: 1.2,
            artist_weight: 0.1,
            bonus_weight: 0.5,
            exclusion_penalty: 0.6,
            rank_penalty: 0.01,
            bonus_terms: vec!["instrumental".to_string(), "karaoke".to_string()],
            exclusion_terms: [
                "lyrics",
                "lyric video",
                "official video",
                "official music video",
                "music video",
                "official audio",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Score breakdown for a single candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: CandidateVideo,
    pub overlap: f64,
    pub has_artist: bool,
    pub has_bonus: bool,
    pub is_excluded: bool,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct MatchSelector {
    weights: MatchWeights,
}

impl MatchSelector {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Scores every candidate against the query, keeping the input order.
    pub fn score(&self, query: &SearchQuery, candidates: &[CandidateVideo]) -> Vec<ScoredCandidate> {
        let title_tokens: HashSet<String> = tokenize(&query.title).into_iter().collect();
        let artist_tokens = tokenize(&query.artist);

        candidates
            .iter()
            .map(|candidate| self.score_one(&title_tokens, &artist_tokens, candidate))
            .collect()
    }

    /// Picks the video id of the best acceptable candidate.
    ///
    /// Returns `None` for an empty candidate list, when no candidate reaches
    /// the acceptance threshold, or when the best candidate has no video id.
    /// Equal scores go to the lowest rank.
    pub fn select(&self, query: &SearchQuery, candidates: &[CandidateVideo]) -> Option<String> {
        self.best(query, candidates)
            .map(|scored| scored.candidate.video_id)
    }

    /// Like [`MatchSelector::select`] but returns the full breakdown of the winner.
    pub fn best(&self, query: &SearchQuery, candidates: &[CandidateVideo]) -> Option<ScoredCandidate> {
        let mut best: Option<ScoredCandidate> = None;

        for scored in self.score(query, candidates) {
            if scored.candidate.video_id.trim().is_empty() {
                continue;
            }
            let replace = match &best {
                None => true,
                Some(current) => {
                    scored.score > current.score
                        || (scored.score == current.score
                            && scored.candidate.rank < current.candidate.rank)
                }
            };
            if replace {
                best = Some(scored);
            }
        }

        best.filter(|scored| scored.score >= self.weights.acceptance_threshold)
    }

    fn score_one(
        &self,
        query_title: &HashSet<String>,
        query_artist: &[String],
        candidate: &CandidateVideo,
    ) -> ScoredCandidate {
        let title_tokens = tokenize(&candidate.title);
        let overlap = overlap_ratio(query_title, &title_tokens);
        let has_artist = !query_artist.is_empty()
            && query_artist.iter().all(|token| title_tokens.contains(token));

        let lowered = candidate.title.to_lowercase();
        let has_bonus = self.weights.bonus_terms.iter().any(|term| {
            let term = term.trim().to_lowercase();
            !term.is_empty() && lowered.contains(&term)
        });

        // pad with spaces so phrases only match on word boundaries
        let padded = format!(" {} ", title_tokens.join(" "));
        let is_excluded = self.weights.exclusion_terms.iter().any(|term| {
            let term = tokenize(term).join(" ");
            !term.is_empty() && padded.contains(&format!(" {} ", term))
        });

        let mut score = overlap - self.weights.rank_penalty * candidate.rank as f64;
        if has_artist {
            score += self.weights.artist_weight;
        }
        if has_bonus {
            score += self.weights.bonus_weight;
        }
        if is_excluded {
            score -= self.weights.exclusion_penalty;
        }

        ScoredCandidate {
            candidate: candidate.clone(),
            overlap,
            has_artist,
            has_bonus,
            is_excluded,
            score,
        }
    }
}

/// Lowercases, replaces punctuation with spaces and splits on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Fraction of distinct track title tokens that appear in the candidate title.
fn overlap_ratio(query_tokens: &HashSet<String>, title_tokens: &[String]) -> f64 {
    if query_tokens.is_empty() {
        return 0.0;
    }
    let title: HashSet<&str> = title_tokens.iter().map(String::as_str).collect();
    let shared = query_tokens
        .iter()
        .filter(|token| title.contains(token.as_str()))
        .count();
    shared as f64 / query_tokens.len() as f64
}
