//! Score a single recorded frame.

use std::path::PathBuf;

use affect_engine::feedback::summarize;
use affect_engine::pipeline::analyze_snapshot;
use affect_engine::replay::RecordedDetector;
use affect_model::parse_snapshot;

pub fn run(path: PathBuf, feedback: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Snapshot file not found: {}", path.display()))?;

    let faces = parse_snapshot(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse snapshot: {e}"))?;
    tracing::info!(faces = faces.len(), "Scoring snapshot");

    let report = analyze_snapshot(&mut RecordedDetector, &faces)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if feedback {
        eprintln!("\n{}", summarize(&report));
    }

    Ok(())
}
