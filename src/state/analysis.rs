/// Display state for the current analysis
///
/// Two display slots (preview image, summary info) plus the retained
/// composite pixels for export, all owned by the single UI component
/// and replaced together through one entry point per analysis run.
///
/// A run token closes the race between overlapping analyses: each
/// file selection bumps the token, completions carry the token they
/// started with, and stale completions are discarded without touching
/// the slots.

use iced::widget::image::Handle;

use crate::document::flatten::DocumentSummary;

/// Everything one successful analysis produces
#[derive(Debug, Clone)]
pub struct Analysis {
    pub summary: DocumentSummary,
    pub preview: Handle,
    pub composite: CompositePixels,
}

/// The raw composite, kept around so export does not re-parse
#[derive(Debug, Clone)]
pub struct CompositePixels {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// The UI's display state
#[derive(Debug, Default)]
pub struct AnalysisState {
    /// Token of the most recently started run
    run: u64,
    preview: Option<Handle>,
    summary: Option<DocumentSummary>,
    composite: Option<CompositePixels>,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new analysis run and return its token
    pub fn begin_run(&mut self) -> u64 {
        self.run += 1;
        self.run
    }

    /// True if `run` is the most recently started run
    pub fn is_current(&self, run: u64) -> bool {
        run == self.run
    }

    /// Apply a completed analysis
    ///
    /// Returns false (and leaves the slots untouched) when the result
    /// is stale, i.e. a newer run has started since.
    pub fn apply(&mut self, run: u64, analysis: Analysis) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.preview = Some(analysis.preview);
        self.summary = Some(analysis.summary);
        self.composite = Some(analysis.composite);
        true
    }

    /// Clear both display slots (and the retained composite)
    ///
    /// Called before notifying the user of a failure, so an error
    /// never leaves a half-updated view behind.
    pub fn clear(&mut self) {
        self.preview = None;
        self.summary = None;
        self.composite = None;
    }

    pub fn preview(&self) -> Option<&Handle> {
        self.preview.as_ref()
    }

    pub fn summary(&self) -> Option<&DocumentSummary> {
        self.summary.as_ref()
    }

    pub fn composite(&self) -> Option<&CompositePixels> {
        self.composite.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(width: u32) -> Analysis {
        let pixels = vec![0u8; width as usize * 4];
        Analysis {
            summary: DocumentSummary {
                width,
                height: 1,
                color_mode: "Rgb".to_string(),
                records: Vec::new(),
            },
            preview: Handle::from_rgba(width, 1, pixels.clone()),
            composite: CompositePixels {
                width,
                height: 1,
                pixels,
            },
        }
    }

    #[test]
    fn test_run_tokens_are_monotonic() {
        let mut state = AnalysisState::new();
        let first = state.begin_run();
        let second = state.begin_run();
        assert!(second > first);
    }

    #[test]
    fn test_current_run_is_applied() {
        let mut state = AnalysisState::new();
        let run = state.begin_run();

        assert!(state.apply(run, analysis(10)));
        assert_eq!(state.summary().unwrap().width, 10);
        assert!(state.preview().is_some());
        assert!(state.composite().is_some());
    }

    #[test]
    fn test_stale_run_is_discarded() {
        let mut state = AnalysisState::new();
        let stale = state.begin_run();
        let current = state.begin_run();

        // The newer run lands first
        assert!(state.apply(current, analysis(20)));
        // The superseded run must not overwrite it
        assert!(!state.apply(stale, analysis(10)));
        assert_eq!(state.summary().unwrap().width, 20);
    }

    #[test]
    fn test_clear_empties_both_display_slots() {
        let mut state = AnalysisState::new();
        let run = state.begin_run();
        state.apply(run, analysis(10));

        state.clear();

        assert!(state.preview().is_none());
        assert!(state.summary().is_none());
        assert!(state.composite().is_none());
    }

    #[test]
    fn test_new_state_displays_nothing() {
        let state = AnalysisState::new();
        assert!(state.preview().is_none());
        assert!(state.summary().is_none());
    }
}
