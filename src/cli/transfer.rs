use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res, config, info,
    management::{Provider, TokenManager},
    spotify, success,
    transfer::{DryRunWriter, MatchSelector, TrackResolver, TransferPipeline},
    types::TransferReport,
    utils, warning,
    youtube::{Privacy, YouTubeClient, YouTubePlaylistWriter},
};

/// Options of the `transfer` command.
#[derive(Debug, Clone, Default)]
pub struct TransferOptions {
    pub playlist: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub privacy: Privacy,
    pub dry_run: bool,
    pub json: bool,
}

/// Copies a Spotify playlist into a new YouTube playlist of instrumental versions.
///
/// Everything that can fail for the run as a whole (configuration, tokens,
/// reading the source playlist, creating the destination playlist) is checked
/// before the first track is searched. After that, per-track failures only
/// end up in the report.
pub async fn transfer(opts: TransferOptions) -> Res<()> {
    let playlist_ref = opts
        .playlist
        .clone()
        .or_else(config::default_playlist)
        .ok_or("No playlist given. Pass --playlist or set SPOTIFY_PLAYLIST_ID.")?;
    let playlist_id = utils::parse_playlist_id(&playlist_ref)?;

    let weights = config::match_weights()?;
    let fallback_qualifiers = config::search_fallback_qualifiers();

    let mut spotify_token = TokenManager::load(Provider::Spotify).await.map_err(|e| {
        format!(
            "Failed to load Spotify token. Please run instrumentalcli auth spotify\n Error: {}",
            e
        )
    })?;
    let youtube = YouTubeClient::from_config().await?;

    let details = spotify::playlist::playlist_details(&mut spotify_token, &playlist_id).await?;
    let tracks = spotify::playlist::playlist_tracks(&mut spotify_token, &playlist_id).await?;
    info!("Found {} tracks in '{}'.", tracks.len(), details.name);

    let title = opts
        .title
        .clone()
        .unwrap_or_else(|| format!("{} (Instrumental)", details.name));
    let description = opts.description.clone().unwrap_or_else(|| {
        format!("Instrumental versions of the Spotify playlist '{}'.", details.name)
    });

    let resolver = TrackResolver::new(&youtube, MatchSelector::new(weights))
        .with_fallback_qualifiers(fallback_qualifiers);

    let report = if opts.dry_run {
        info!("Dry run: no YouTube playlist will be created.");
        TransferPipeline::new(resolver, DryRunWriter)
            .with_progress(progress_bar())
            .run(&tracks)
            .await
    } else {
        let youtube_playlist_id = youtube
            .create_playlist(&title, &description, opts.privacy)
            .await?;
        let writer = YouTubePlaylistWriter::new(&youtube, youtube_playlist_id);
        success!(
            "Created YouTube playlist '{}': https://www.youtube.com/playlist?list={}",
            title,
            writer.playlist_id()
        );

        TransferPipeline::new(resolver, writer)
            .with_progress(progress_bar())
            .run(&tracks)
            .await
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, opts.dry_run);
    }
    Ok(())
}

fn progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }
    pb
}

fn print_report(report: &TransferReport, dry_run: bool) {
    if !report.entries.is_empty() {
        println!("{}", Table::new(utils::report_table_rows(&report.entries)));
    }

    let verb = if dry_run { "Matched" } else { "Added" };
    success!(
        "{} {} of {} tracks, {} without instrumental.",
        verb,
        report.added_videos,
        report.total_tracks,
        report.not_found
    );

    if !report.errors.is_empty() {
        warning!("The following errors occurred during processing:");
        for error in &report.errors {
            println!("- {}", error);
        }
    }
}
