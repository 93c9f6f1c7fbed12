//! Affect Model
//!
//! Defines the data contracts shared by the affect engine and its callers:
//! - **Emotions:** The fixed emotion vocabulary and per-face probability distributions
//! - **Detections:** Face bounding regions and per-frame reduction results
//! - **Reports:** The indicator report handed to report consumers
//! - **Records:** Recorded detector output for snapshot and session replay
//!
//! Bounding regions are in integer pixels as reported by the face detector,
//! so area comparisons are exact.

pub mod detection;
pub mod emotion;
pub mod record;
pub mod report;

pub use detection::*;
pub use emotion::*;
pub use record::*;
pub use report::*;
