use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{SearchQuery, Track};

/// Qualifier appended to every primary search.
pub const INSTRUMENTAL_QUALIFIER: &str = "instrumental";

/// Bracketed annotations such as "(Radio Edit)", "[Live at Wembley]" or "(feat. X)".
static BRACKETED_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\s*[\(\[][^\)\]]*\b(remix|mix|edit|live|version|remaster|remastered|radio|extended|acoustic|demo|mono|stereo|feat|ft|featuring|with)\b[^\)\]]*[\)\]]",
    )
    .unwrap()
});

/// Dash suffixes such as "- Remastered 2011" or "- Live".
static DASH_SUFFIX_NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+[-–—]\s+[^-–—]*\b(remix|edit|live|version|remaster|remastered|mono|stereo)\b.*$")
        .unwrap()
});

/// Unbracketed featured-artist tails. Bare "with" is left alone here so that
/// titles like "Dancing with Myself" keep their meaning.
static FEATURED_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(feat\.|feat|ft\.|ft|featuring)\s+.*$").unwrap());

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder;

impl QueryBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Builds the primary `"<title> <artist> instrumental"` query for a track.
    pub fn build(&self, track: &Track) -> SearchQuery {
        self.build_with_qualifier(track, INSTRUMENTAL_QUALIFIER)
    }

    /// Builds a query for a track with an arbitrary trailing qualifier.
    ///
    /// The result is never empty: a title that normalizes to nothing is used
    /// as-is, and the qualifier always contributes a token.
    pub fn build_with_qualifier(&self, track: &Track, qualifier: &str) -> SearchQuery {
        let mut title = normalize_title(&track.title);
        if title.is_empty() {
            title = track.title.clone();
        }

        let qualifier = if qualifier.trim().is_empty() {
            INSTRUMENTAL_QUALIFIER
        } else {
            qualifier
        };

        SearchQuery {
            text: collapse_whitespace(&format!("{} {} {}", title, track.artist, qualifier)),
            title: collapse_whitespace(&title),
            artist: primary_artist(&track.artist),
        }
    }
}

/// Strips remix/edit/live annotations and featured-artist segments from a title.
pub fn normalize_title(title: &str) -> String {
    let stripped = BRACKETED_NOISE.replace_all(title, "");
    let stripped = DASH_SUFFIX_NOISE.replace(&stripped, "");
    let stripped = FEATURED_TAIL.replace(&stripped, "");
    collapse_whitespace(&stripped)
}

/// First artist of a comma-joined artist list.
pub fn primary_artist(artists: &str) -> String {
    collapse_whitespace(artists.split(',').next().unwrap_or_default())
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
