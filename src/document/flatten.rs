/// Layer-tree flattener
///
/// Walks the node tree in pre-order (parent before children) and
/// produces the flat, ordered list of display records the info panel
/// renders. The walk uses an explicit stack instead of recursion so a
/// pathologically deep document cannot exhaust the call stack.

use super::{Document, Guide, Node, Slice};

/// Everything the info panel needs for one analyzed document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub width: u32,
    pub height: u32,
    pub color_mode: String,
    /// Display records in pre-order traversal order. Flat: nesting
    /// depth is not retained.
    pub records: Vec<DisplayRecord>,
}

/// One rendered row of the layer list
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRecord {
    Group(GroupRecord),
    Leaf(LeafRecord),
}

/// Display projection of a group node (no pixel geometry)
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRecord {
    pub name: String,
    pub open: Option<bool>,
    pub guides: Vec<Guide>,
    pub slices: Vec<Slice>,
}

/// Display projection of a leaf layer, all fields copied exactly
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRecord {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub top: i32,
    pub left: i32,
    pub opacity: u8,
    pub visible: bool,
    pub blend_mode: String,
    pub clipped: bool,
    pub text: Option<String>,
    pub guides: Vec<Guide>,
    pub slices: Vec<Slice>,
}

/// Build the summary for a parsed document
pub fn summarize(document: &Document) -> DocumentSummary {
    DocumentSummary {
        width: document.width,
        height: document.height,
        color_mode: document.color_mode.clone(),
        records: flatten(&document.children),
    }
}

/// Flatten a node tree into display records, pre-order
///
/// Every node produces exactly one record. A Group record is emitted
/// before any of its descendants' records, and all descendants come
/// before any sibling of the group. Runs to completion in one
/// synchronous pass.
pub fn flatten(children: &[Node]) -> Vec<DisplayRecord> {
    let mut records = Vec::new();
    // Children are pushed in reverse so the stack pops them in order
    let mut stack: Vec<&Node> = children.iter().rev().collect();

    while let Some(node) = stack.pop() {
        match node {
            Node::Layer(layer) => {
                records.push(DisplayRecord::Leaf(LeafRecord {
                    name: layer.name.clone(),
                    width: layer.width,
                    height: layer.height,
                    top: layer.top,
                    left: layer.left,
                    opacity: layer.opacity,
                    visible: layer.visible,
                    blend_mode: layer.blend_mode.clone(),
                    clipped: layer.clipped,
                    text: layer.text.clone(),
                    guides: layer.guides.clone(),
                    slices: layer.slices.clone(),
                }));
            }
            Node::Group(group) => {
                records.push(DisplayRecord::Group(GroupRecord {
                    name: group.name.clone(),
                    open: group.open,
                    guides: group.guides.clone(),
                    slices: group.slices.clone(),
                }));
                stack.extend(group.children.iter().rev());
            }
        }
    }

    records
}
