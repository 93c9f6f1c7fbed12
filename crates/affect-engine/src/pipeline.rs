//! Frame loop: source -> detector -> reducer -> aggregator.
//!
//! Frames are processed strictly one at a time. The stop flag is checked
//! between frames, so a stopped session always finalizes from a consistent
//! aggregator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use affect_common::error::AffectResult;
use affect_model::{FaceDetection, FrameResult, IndicatorReport};
use serde::Serialize;

use crate::aggregator::SessionAggregator;
use crate::reducer::reduce;
use crate::scorer::score;

/// Ordered producer of raw frames for one session.
pub trait FrameSource {
    type Frame;

    /// Next frame in presentation order. `None` is the normal end of stream.
    fn next_frame(&mut self) -> AffectResult<Option<Self::Frame>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Face-emotion detection capability.
///
/// Returns an empty list when no face is found. Errors mean the frame
/// itself could not be analyzed.
pub trait EmotionDetector<F> {
    fn detect(&mut self, frame: &F) -> AffectResult<Vec<FaceDetection>>;

    /// Detector name for logging.
    fn name(&self) -> &str;
}

impl<F, D: EmotionDetector<F> + ?Sized> EmotionDetector<F> for &mut D {
    fn detect(&mut self, frame: &F) -> AffectResult<Vec<FaceDetection>> {
        (**self).detect(frame)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Frame loop settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Skip frames the detector cannot analyze instead of aborting.
    pub skip_failed_frames: bool,

    /// Stop after reading this many frames.
    pub max_frames: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            skip_failed_frames: true,
            max_frames: None,
        }
    }
}

impl From<&affect_common::config::AnalysisDefaults> for SessionConfig {
    fn from(defaults: &affect_common::config::AnalysisDefaults) -> Self {
        Self {
            skip_failed_frames: defaults.skip_failed_frames,
            max_frames: defaults.max_frames,
        }
    }
}

/// Frame accounting for one session run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub frames_read: u64,
    pub frames_with_subject: u64,
    pub frames_without_subject: u64,
    pub frames_failed: u64,
    /// The stop flag ended the session before end of stream.
    pub interrupted: bool,
    /// `max_frames` ended the session before end of stream.
    pub truncated: bool,
}

/// Report plus frame accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub report: IndicatorReport,
    pub stats: SessionStats,
}

/// Drives a frame source and detector through a session aggregator.
pub struct SessionRunner<D> {
    detector: D,
    config: SessionConfig,
    stop_flag: Arc<AtomicBool>,
}

impl<D> SessionRunner<D> {
    pub fn new(detector: D, config: SessionConfig) -> Self {
        Self {
            detector,
            config,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Ask the running session to stop before its next frame.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Get the stop flag for external coordination.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn into_detector(self) -> D {
        self.detector
    }

    /// Run the session until end of stream, stop, or `max_frames`.
    ///
    /// Detector failures are skipped (or abort the session when
    /// `skip_failed_frames` is off). Frame source failures always abort.
    pub fn run<S>(&mut self, source: &mut S) -> AffectResult<SessionOutcome>
    where
        S: FrameSource,
        D: EmotionDetector<S::Frame>,
    {
        tracing::info!(
            source = %source.name(),
            detector = %self.detector.name(),
            "Session analysis started"
        );

        let mut aggregator = SessionAggregator::new();
        let mut stats = SessionStats::default();

        loop {
            if self.stop_flag.load(Ordering::Relaxed) {
                tracing::info!(frames = stats.frames_read, "Session stopped by caller");
                stats.interrupted = true;
                break;
            }
            if self
                .config
                .max_frames
                .is_some_and(|max| stats.frames_read >= max)
            {
                tracing::info!(frames = stats.frames_read, "Frame limit reached");
                stats.truncated = true;
                break;
            }

            let Some(frame) = source.next_frame()? else {
                break;
            };
            let index = stats.frames_read;
            stats.frames_read += 1;

            let detections = match self.detector.detect(&frame) {
                Ok(detections) => detections,
                Err(e) if self.config.skip_failed_frames => {
                    tracing::warn!(frame = index, error = %e, "Skipping frame after detector failure");
                    stats.frames_failed += 1;
                    continue;
                }
                Err(e) => {
                    tracing::error!(frame = index, error = %e, "Detector failed, aborting session");
                    return Err(e);
                }
            };

            let result = reduce(&detections);
            match result.dominant() {
                Some(dominant) => {
                    tracing::debug!(frame = index, faces = detections.len(), %dominant, "Primary subject");
                    stats.frames_with_subject += 1;
                }
                None => {
                    tracing::trace!(frame = index, "No subject");
                    stats.frames_without_subject += 1;
                }
            }
            aggregator.observe(&result);
        }

        let report = aggregator.finalize();
        tracing::info!(
            frames = stats.frames_read,
            with_subject = stats.frames_with_subject,
            failed = stats.frames_failed,
            candidate_present = report.candidate_present,
            stress_level = report.stress_level,
            "Session analysis finished"
        );

        Ok(SessionOutcome { report, stats })
    }
}

/// Analyze a single frame. Detector failures propagate to the caller.
pub fn analyze_snapshot<F, D>(detector: &mut D, frame: &F) -> AffectResult<IndicatorReport>
where
    D: EmotionDetector<F> + ?Sized,
{
    let detections = detector.detect(frame)?;
    tracing::debug!(
        detector = %detector.name(),
        faces = detections.len(),
        "Snapshot detections"
    );
    Ok(score(&detections))
}

/// Restore presentation order for results produced out of order.
///
/// Workers that detect frames in parallel hand back `(frame_index, result)`
/// pairs in completion order; these must be re-serialized before being
/// observed.
pub fn ordered_results(
    results: impl IntoIterator<Item = (u64, FrameResult)>,
) -> impl Iterator<Item = FrameResult> {
    let mut results: Vec<(u64, FrameResult)> = results.into_iter().collect();
    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result)
}
