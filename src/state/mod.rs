/// State management module
///
/// This module owns the display state the UI re-renders from:
/// - The current analysis result and its run-token guard (analysis.rs)
///
/// State is replaced wholesale per analysis run; there is no
/// incremental mutation of a displayed result.

pub mod analysis;
