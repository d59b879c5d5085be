/// Error type for the analysis pipeline
///
/// Every failure in the pipeline (file read, decode, composite,
/// export) collapses into one of these variants. Third-party errors
/// are captured as display strings so the enum stays `Clone` and can
/// travel inside an iced message.
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AnalyzeError {
    /// Reading the selected file from disk failed
    #[error("failed to read file: {0}")]
    Read(String),

    /// The parser rejected the bytes (corrupt file, unsupported
    /// variant, or an internal parser failure - not distinguished)
    #[error("failed to decode document: {0}")]
    Decode(String),

    /// The composite buffer does not match width x height x 4
    #[error("composite buffer is {actual} bytes, expected {expected}")]
    CompositeSize { expected: usize, actual: usize },

    /// Writing the exported PNG failed
    #[error("failed to export composite: {0}")]
    Export(String),

    /// A background task panicked or was cancelled
    #[error("task join error: {0}")]
    Task(String),
}
