//! Replay a recorded session through the aggregator.

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use affect_common::config::AnalysisDefaults;
use affect_engine::feedback::summarize;
use affect_engine::pipeline::{SessionConfig, SessionRunner, SessionStats};
use affect_engine::replay::{RecordedDetector, RecordedFrames};
use affect_model::IndicatorReport;
use serde::Serialize;

/// Output with frame accounting, printed with `--stats`.
#[derive(Serialize)]
struct SessionOutput<'a> {
    analyzed_at: String,
    source: String,
    report: &'a IndicatorReport,
    stats: &'a SessionStats,
}

/// Merge command-line overrides into the configured analysis defaults.
pub fn session_config(
    defaults: &AnalysisDefaults,
    max_frames: Option<u64>,
    strict: bool,
) -> anyhow::Result<SessionConfig> {
    let mut config = SessionConfig::from(defaults);
    if let Some(max) = max_frames {
        anyhow::ensure!(max > 0, "--max-frames must be at least 1");
        config.max_frames = Some(max);
    }
    if strict {
        config.skip_failed_frames = false;
    }
    Ok(config)
}

pub async fn run(
    path: PathBuf,
    config: SessionConfig,
    feedback: bool,
    with_stats: bool,
) -> anyhow::Result<()> {
    let mut frames = RecordedFrames::load(&path)
        .map_err(|e| anyhow::anyhow!("Failed to load session recording: {e}"))?;
    eprintln!(
        "Replaying {} frames from {}",
        frames.remaining(),
        path.display()
    );

    let mut runner = SessionRunner::new(RecordedDetector, config);

    // Ctrl-C stops between frames; the partial report is still printed.
    let stop_flag = runner.stop_flag();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing current frame");
            stop_flag.store(true, Ordering::SeqCst);
        }
    });

    let outcome = tokio::task::spawn_blocking(move || runner.run(&mut frames)).await??;
    interrupt.abort();

    if outcome.stats.interrupted {
        eprintln!(
            "Interrupted after {} frames; report covers frames read so far.",
            outcome.stats.frames_read
        );
    }

    if with_stats {
        let output = SessionOutput {
            analyzed_at: chrono::Utc::now().to_rfc3339(),
            source: path.display().to_string(),
            report: &outcome.report,
            stats: &outcome.stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    }

    if feedback {
        eprintln!("\n{}", summarize(&outcome.report));
    }

    Ok(())
}
