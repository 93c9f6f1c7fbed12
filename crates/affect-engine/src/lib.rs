//! Affect Engine: Video Emotion Aggregation
//!
//! Turns per-frame face detections into interpretable affect indicators:
//! - **Frame Reducer:** Pick the primary subject (largest face) in a frame
//! - **Session Aggregator:** Count dominant emotions across a video session
//! - **Single-Frame Scorer:** Score one frame into an indicator report
//! - **Session Runner:** Drive an injected frame source and detector frame by frame
//!
//! Reduction, aggregation, and scoring are pure computation. The only I/O
//! happens behind the [`FrameSource`] and [`EmotionDetector`] traits, which
//! callers implement.

pub mod aggregator;
pub mod feedback;
pub mod indicators;
pub mod pipeline;
pub mod reducer;
pub mod replay;
pub mod scorer;

pub use aggregator::SessionAggregator;
pub use pipeline::{
    analyze_snapshot, EmotionDetector, FrameSource, SessionConfig, SessionOutcome, SessionRunner,
    SessionStats,
};
pub use reducer::reduce;
pub use scorer::score;
