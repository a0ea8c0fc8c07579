use instrumentalcli::errors::TransferError;
use instrumentalcli::types::{ReportEntry, TrackOutcome};
use instrumentalcli::utils::*;

// Helper function to create a report entry
fn create_entry(position: usize, title: &str, outcome: TrackOutcome) -> ReportEntry {
    ReportEntry {
        position,
        title: title.to_string(),
        artist: "Artist".to_string(),
        outcome,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA-256 is 32 bytes, 43 characters unpadded base64
    assert_eq!(challenge.len(), 43);
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_playlist_id_bare_id() {
    let id = parse_playlist_id("37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");

    // Surrounding whitespace is ignored
    let id = parse_playlist_id("  37i9dQZF1DXcBWIGoYBM5M\n").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_parse_playlist_id_uri_and_url() {
    assert_eq!(
        parse_playlist_id("spotify:playlist:0mf8qkcdAMJ6UcJC7crcys").unwrap(),
        "0mf8qkcdAMJ6UcJC7crcys"
    );
    assert_eq!(
        parse_playlist_id("https://open.spotify.com/playlist/0mf8qkcdAMJ6UcJC7crcys?si=abc123").unwrap(),
        "0mf8qkcdAMJ6UcJC7crcys"
    );
    assert_eq!(
        parse_playlist_id("https://open.spotify.com/playlist/0mf8qkcdAMJ6UcJC7crcys").unwrap(),
        "0mf8qkcdAMJ6UcJC7crcys"
    );
}

#[test]
fn test_parse_playlist_id_rejects_garbage() {
    for input in ["", "   ", "spotify:playlist:", "not a playlist", "https://open.spotify.com/playlist/?si=x"] {
        let result = parse_playlist_id(input);
        assert!(
            matches!(result, Err(TransferError::InvalidInput(_))),
            "expected invalid input for {:?}",
            input
        );
    }
}

#[test]
fn test_unescape_html() {
    assert_eq!(unescape_html("Don&#39;t Stop Me Now"), "Don't Stop Me Now");
    assert_eq!(unescape_html("Tom &amp; Jerry"), "Tom & Jerry");
    assert_eq!(unescape_html("&quot;Heroes&quot;"), "\"Heroes\"");
    assert_eq!(unescape_html("&lt;3"), "<3");

    // Escaped ampersands are decoded once only
    assert_eq!(unescape_html("&amp;#39;"), "&#39;");

    // Plain text is untouched
    assert_eq!(unescape_html("Shape of You"), "Shape of You");
}

#[test]
fn test_report_table_rows() {
    let entries = vec![
        create_entry(
            1,
            "Shape of You",
            TrackOutcome::Added {
                video_id: "abc".to_string(),
            },
        ),
        create_entry(2, "Unknown Obscure Song", TrackOutcome::NotFound),
        create_entry(
            3,
            "Broken",
            TrackOutcome::Failed {
                reason: "quota exceeded".to_string(),
            },
        ),
    ];

    let rows = report_table_rows(&entries);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].result, "added abc");
    assert_eq!(rows[1].result, "not found");
    assert_eq!(rows[2].result, "error: quota exceeded");
    assert_eq!(rows[2].title, "Broken");
}
