use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::path::PathBuf;

mod document;
mod error;
mod state;
mod ui;

use document::{composite, export, flatten, parser};
use error::AnalyzeError;
use state::analysis::{Analysis, AnalysisState, CompositePixels};

/// Main application state
struct PsdInspector {
    /// The current analysis result (preview + info slots)
    analysis: AnalysisState,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Open Document" button
    OpenDocument,
    /// Background analysis finished for the given run token
    AnalysisComplete {
        run: u64,
        result: Result<Analysis, AnalyzeError>,
    },
    /// User clicked the "Export PNG" button
    ExportComposite,
    /// Background export finished
    ExportComplete(Result<PathBuf, AnalyzeError>),
}

impl PsdInspector {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🔎 PSD Inspector ready");
        (
            PsdInspector {
                analysis: AnalysisState::new(),
                status: "Ready. Open a document to begin.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenDocument => {
                // Native file picker; the filter is a hint, not enforced -
                // the parser rejects anything that isn't a real document
                let file = FileDialog::new()
                    .set_title("Select a Photoshop Document")
                    .add_filter("Photoshop document", &["psd", "psb"])
                    .pick_file();

                if let Some(path) = file {
                    let run = self.analysis.begin_run();
                    self.status = format!("Analyzing {}...", path.display());

                    return Task::perform(analyze_document(path, run), |(run, result)| {
                        Message::AnalysisComplete { run, result }
                    });
                }

                Task::none()
            }
            Message::AnalysisComplete { run, result } => {
                // A newer file selection supersedes this run entirely
                if !self.analysis.is_current(run) {
                    println!("⏭️  Discarding superseded analysis (run {})", run);
                    return Task::none();
                }

                match result {
                    Ok(analysis) => {
                        self.status = format!(
                            "✅ {}x{} px, {} items",
                            analysis.summary.width,
                            analysis.summary.height,
                            analysis.summary.records.len()
                        );
                        self.analysis.apply(run, analysis);
                    }
                    Err(e) => {
                        eprintln!("❌ Analysis failed: {}", e);

                        // Clear both panels first so no half-updated
                        // view survives, then raise the single alert
                        self.analysis.clear();
                        self.status = "Analysis failed.".to_string();

                        MessageDialog::new()
                            .set_level(MessageLevel::Error)
                            .set_title("PSD Inspector")
                            .set_description("Parsing failed. The file could not be analyzed.")
                            .show();
                    }
                }

                Task::none()
            }
            Message::ExportComposite => {
                if let Some(composite) = self.analysis.composite() {
                    let file = FileDialog::new()
                        .set_title("Export Composite as PNG")
                        .add_filter("PNG image", &["png"])
                        .set_file_name("composite.png")
                        .save_file();

                    if let Some(path) = file {
                        self.status = format!("Exporting to {}...", path.display());

                        return Task::perform(
                            export::export_png(
                                path,
                                composite.width,
                                composite.height,
                                composite.pixels.clone(),
                            ),
                            Message::ExportComplete,
                        );
                    }
                }

                Task::none()
            }
            Message::ExportComplete(result) => {
                match result {
                    Ok(path) => {
                        self.status = format!("✅ Exported {}", path.display());
                    }
                    Err(e) => {
                        eprintln!("❌ Export failed: {}", e);
                        self.status = format!("Export failed: {}", e);
                    }
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let toolbar = row![
            button("Open Document...")
                .on_press(Message::OpenDocument)
                .padding(10),
            button("Export PNG")
                .on_press_maybe(self.analysis.composite().map(|_| Message::ExportComposite))
                .padding(10),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        let body: Element<Message> =
            match (self.analysis.preview(), self.analysis.summary()) {
                (Some(handle), Some(summary)) => row![
                    ui::preview::preview_pane(handle),
                    container(ui::info::info_panel(summary))
                        .width(Length::FillPortion(1))
                        .height(Length::Fill),
                ]
                .spacing(10)
                .into(),
                _ => container(
                    text("No document loaded. Open a .psd or .psb file to inspect its layers.")
                        .size(16),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
            };

        column![toolbar, body].spacing(20).padding(20).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "PSD Inspector",
        PsdInspector::update,
        PsdInspector::view,
    )
    .theme(PsdInspector::theme)
    .centered()
    .run_with(PsdInspector::new)
}

/// One analysis run, tagged with its token so stale completions can
/// be told apart from the current one
async fn analyze_document(path: PathBuf, run: u64) -> (u64, Result<Analysis, AnalyzeError>) {
    (run, run_analysis(path).await)
}

/// The full pipeline: read bytes, parse, composite, flatten
async fn run_analysis(path: PathBuf) -> Result<Analysis, AnalyzeError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AnalyzeError::Read(e.to_string()))?;

    // Spawn blocking because decoding and compositing are CPU-intensive
    tokio::task::spawn_blocking(move || analyze_bytes(&bytes))
        .await
        .map_err(|e| AnalyzeError::Task(e.to_string()))?
}

/// Blocking body of the pipeline
fn analyze_bytes(bytes: &[u8]) -> Result<Analysis, AnalyzeError> {
    let parsed = parser::ParsedPsd::parse(bytes)?;
    let document = parsed.document();
    let pixels = parsed.composite();

    let preview = composite::preview_handle(document.width, document.height, pixels.clone())?;
    let summary = flatten::summarize(&document);

    println!(
        "📄 Parsed document: {}x{} px, {} items",
        summary.width,
        summary.height,
        summary.records.len()
    );

    Ok(Analysis {
        summary,
        preview,
        composite: CompositePixels {
            width: document.width,
            height: document.height,
            pixels,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let result = run_analysis(PathBuf::from("/nonexistent/file.psd")).await;
        assert!(matches!(result, Err(AnalyzeError::Read(_))));
    }

    #[tokio::test]
    async fn test_garbage_file_is_a_decode_error() {
        let path = std::env::temp_dir().join("psd-inspector-garbage-test.psd");
        std::fs::write(&path, b"this is not a photoshop document").unwrap();

        let result = run_analysis(path.clone()).await;
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(AnalyzeError::Decode(_))));
    }

    #[tokio::test]
    async fn test_pipeline_result_carries_its_run_token() {
        let (run, result) = analyze_document(PathBuf::from("/nonexistent/file.psd"), 7).await;
        assert_eq!(run, 7);
        assert!(result.is_err());
    }
}
