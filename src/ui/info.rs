/// Info panel: summary heading plus one line per display record
///
/// The line templates are pure functions of a record so they can be
/// tested without a renderer. Conditional suffixes (embedded text,
/// guide count, slice count) are omitted entirely when their source
/// field is absent or empty - never shown as zero.

use iced::widget::{scrollable, text, Column};
use iced::Element;

use crate::document::flatten::{DisplayRecord, DocumentSummary, GroupRecord, LeafRecord};
use crate::Message;

/// Build the scrollable info panel for an analyzed document
pub fn info_panel(summary: &DocumentSummary) -> Element<'static, Message> {
    let mut rows = Column::new().spacing(4);

    rows = rows.push(text(summary_heading(summary)).size(18));
    for record in &summary.records {
        rows = rows.push(text(record_line(record)).size(14));
    }

    scrollable(rows.padding(10)).into()
}

/// One-line document summary: geometry, color mode, record count
pub fn summary_heading(summary: &DocumentSummary) -> String {
    format!(
        "{}x{} px | {} | {} items",
        summary.width,
        summary.height,
        summary.color_mode,
        summary.records.len()
    )
}

/// The fixed textual template for one record
pub fn record_line(record: &DisplayRecord) -> String {
    match record {
        DisplayRecord::Group(group) => group_line(group),
        DisplayRecord::Leaf(leaf) => leaf_line(leaf),
    }
}

/// Groups show just a folder marker and their name
fn group_line(group: &GroupRecord) -> String {
    format!("📁 {}", group.name)
}

fn leaf_line(leaf: &LeafRecord) -> String {
    let mut line = format!(
        "{} [{}x{}] at ({}, {}) | opacity: {}% | {} | blend: {} | {}",
        leaf.name,
        leaf.width,
        leaf.height,
        leaf.left,
        leaf.top,
        leaf.opacity,
        if leaf.visible { "visible" } else { "hidden" },
        leaf.blend_mode,
        if leaf.clipped { "clipped" } else { "unclipped" },
    );

    if let Some(content) = &leaf.text {
        line.push_str(&format!(" | text: \"{}\"", content));
    }
    if !leaf.guides.is_empty() {
        line.push_str(&format!(" | guides: {}", leaf.guides.len()));
    }
    if !leaf.slices.is_empty() {
        line.push_str(&format!(" | slices: {}", leaf.slices.len()));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Bounds, Guide, Orientation, Slice};

    fn plain_leaf() -> LeafRecord {
        LeafRecord {
            name: "Background".to_string(),
            width: 640,
            height: 480,
            top: 5,
            left: -3,
            opacity: 80,
            visible: true,
            blend_mode: "Normal".to_string(),
            clipped: false,
            text: None,
            guides: Vec::new(),
            slices: Vec::new(),
        }
    }

    #[test]
    fn test_leaf_line_fixed_fields() {
        let line = leaf_line(&plain_leaf());
        assert_eq!(
            line,
            "Background [640x480] at (-3, 5) | opacity: 80% | visible | blend: Normal | unclipped"
        );
    }

    #[test]
    fn test_hidden_clipped_labels() {
        let mut leaf = plain_leaf();
        leaf.visible = false;
        leaf.clipped = true;
        let line = leaf_line(&leaf);
        assert!(line.contains("| hidden |"));
        assert!(line.ends_with("| clipped"));
    }

    #[test]
    fn test_no_guides_means_no_guide_suffix() {
        let line = leaf_line(&plain_leaf());
        assert!(!line.contains("guides"));
        assert!(!line.contains("slices"));
        assert!(!line.contains("text:"));
    }

    #[test]
    fn test_two_guides_show_a_count_of_two() {
        let mut leaf = plain_leaf();
        leaf.guides = vec![
            Guide {
                position: 10.0,
                orientation: Orientation::Horizontal,
            },
            Guide {
                position: 20.0,
                orientation: Orientation::Vertical,
            },
        ];
        assert!(leaf_line(&leaf).ends_with("| guides: 2"));
    }

    #[test]
    fn test_slice_suffix_shows_count() {
        let mut leaf = plain_leaf();
        leaf.slices = vec![Slice {
            name: "hero".to_string(),
            bounds: Bounds {
                top: 0,
                left: 0,
                bottom: 32,
                right: 32,
            },
        }];
        assert!(leaf_line(&leaf).ends_with("| slices: 1"));
    }

    #[test]
    fn test_text_suffix_quotes_the_content() {
        let mut leaf = plain_leaf();
        leaf.text = Some("Hello".to_string());
        assert!(leaf_line(&leaf).contains(" | text: \"Hello\""));
    }

    #[test]
    fn test_group_line_is_marker_and_name() {
        let group = GroupRecord {
            name: "Header".to_string(),
            open: Some(true),
            guides: Vec::new(),
            slices: Vec::new(),
        };
        assert_eq!(group_line(&group), "📁 Header");
    }

    #[test]
    fn test_summary_heading() {
        let summary = DocumentSummary {
            width: 1024,
            height: 768,
            color_mode: "Rgb".to_string(),
            records: vec![DisplayRecord::Leaf(plain_leaf())],
        };
        assert_eq!(summary_heading(&summary), "1024x768 px | Rgb | 1 items");
    }
}
