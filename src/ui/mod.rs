/// UI helper module
///
/// View-layer builders kept out of the application shell:
/// - Composite preview pane (preview.rs)
/// - Summary heading and layer-list panel (info.rs)

pub mod info;
pub mod preview;
