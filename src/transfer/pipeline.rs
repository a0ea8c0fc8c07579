use indicatif::ProgressBar;

use crate::{
    errors::TransferError,
    transfer::{PlaylistWriter, TrackResolver, VideoSearch},
    types::{ReportEntry, ResolutionStatus, Track, TrackOutcome, TransferReport},
};

/// Runs a whole playlist through a [`TrackResolver`] and a [`PlaylistWriter`].
///
/// Tracks are handled one after another in source order. A failure on one
/// track (malformed input, search error, write error) is recorded in the
/// report and the run moves on to the next track; nothing is retried.
pub struct TransferPipeline<S, W> {
    resolver: TrackResolver<S>,
    writer: W,
    progress: ProgressBar,
}

impl<S: VideoSearch, W: PlaylistWriter> TransferPipeline<S, W> {
    pub fn new(resolver: TrackResolver<S>, writer: W) -> Self {
        Self {
            resolver,
            writer,
            progress: ProgressBar::hidden(),
        }
    }

    /// Advances `progress` once per processed track.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub async fn run(&self, tracks: &[Track]) -> TransferReport {
        let mut report = TransferReport {
            total_tracks: tracks.len(),
            ..TransferReport::default()
        };
        self.progress.set_length(tracks.len() as u64);

        for (index, track) in tracks.iter().enumerate() {
            let position = index + 1;
            self.progress
                .set_message(format!("{} - {}", track.artist, track.title));

            let outcome = match self.process(position, track).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    report
                        .errors
                        .push(format!("Error processing '{}' by '{}': {}", track.title, track.artist, e));
                    TrackOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            match &outcome {
                TrackOutcome::Added { .. } => report.added_videos += 1,
                TrackOutcome::NotFound => report.not_found += 1,
                TrackOutcome::Failed { .. } => {}
            }

            report.entries.push(ReportEntry {
                position,
                title: track.title.clone(),
                artist: track.artist.clone(),
                outcome,
            });
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        report
    }

    async fn process(&self, position: usize, track: &Track) -> Result<TrackOutcome, TransferError> {
        validate(position, track)?;

        let resolution = self.resolver.resolve(track).await?;
        match (resolution.status, resolution.video_id) {
            (ResolutionStatus::Matched, Some(video_id)) => {
                self.writer
                    .add_video(&video_id)
                    .await
                    .map_err(|source| TransferError::Write {
                        video_id: video_id.clone(),
                        source,
                    })?;
                Ok(TrackOutcome::Added { video_id })
            }
            _ => Ok(TrackOutcome::NotFound),
        }
    }
}

fn validate(position: usize, track: &Track) -> Result<(), TransferError> {
    if track.title.trim().is_empty() {
        return Err(TransferError::MalformedTrack {
            position,
            field: "title",
        });
    }
    if track.artist.trim().is_empty() {
        return Err(TransferError::MalformedTrack {
            position,
            field: "artist",
        });
    }
    Ok(())
}
