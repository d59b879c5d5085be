/// Document model and analysis steps
///
/// This module handles everything between raw file bytes and the
/// display state:
/// - Adapting the external parser crate into the node tree (parser.rs)
/// - Flattening the tree into ordered display records (flatten.rs)
/// - Turning the composite buffer into a drawable handle (composite.rs)
/// - Exporting the composite as a PNG (export.rs)

pub mod composite;
pub mod export;
pub mod flatten;
pub mod parser;

/// A parsed layered document: overall geometry, color mode label,
/// and the root-level node tree. Owned data, fully copied out of the
/// parser - mutating this never touches parser internals.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Color mode label (e.g. "Rgb", "Cmyk", "Grayscale")
    pub color_mode: String,
    /// Root-level children in the document's own order
    pub children: Vec<Node>,
}

/// One node of the layer tree
///
/// A tagged sum type rather than one struct with many optional
/// members, so the Leaf-vs-Group field sets are compile-time checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf layer holding pixel content and paint attributes
    Layer(LayerNode),
    /// A container of child layers/groups, no pixel content of its own
    Group(GroupNode),
}

/// A leaf layer: geometry plus paint attributes
#[derive(Debug, Clone, PartialEq)]
pub struct LayerNode {
    pub name: String,
    /// Layer bounds width in pixels
    pub width: u32,
    /// Layer bounds height in pixels
    pub height: u32,
    /// Vertical offset of the layer's top edge from the canvas origin
    pub top: i32,
    /// Horizontal offset of the layer's left edge from the canvas origin
    pub left: i32,
    /// Opacity in percent (0-100)
    pub opacity: u8,
    pub visible: bool,
    /// Blend mode label (e.g. "Normal", "Multiply")
    pub blend_mode: String,
    /// Whether this layer is clipped to the layer beneath it
    pub clipped: bool,
    /// Embedded text content, present only for text layers
    pub text: Option<String>,
    pub guides: Vec<Guide>,
    pub slices: Vec<Slice>,
}

/// A group: a named container with no pixel geometry of its own
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub name: String,
    /// Open/collapsed flag as authored; None when the parser does not
    /// surface it
    pub open: Option<bool>,
    pub guides: Vec<Guide>,
    pub slices: Vec<Slice>,
    /// Children in the group's own order
    pub children: Vec<Node>,
}

/// A ruler guide line authored in the document
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    /// Offset in pixels along the guide's axis
    pub position: f32,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A named rectangular region of interest defined within the document
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub name: String,
    pub bounds: Bounds,
}

/// Pixel-space rectangle, edges inclusive of the document's own
/// convention (copied through untouched)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}
