/// External-parser adapter
///
/// This module is the only place that talks to the `psd` crate. It
/// decodes the selected file's bytes, exposes the document header and
/// the flattened composite, and copies the crate's flat layer/group
/// view into the owned `Document` node tree everything downstream
/// works on. Any replacement parser only has to reproduce the
/// `ParsedPsd` surface to be a drop-in substitute.

use std::collections::HashMap;

use psd::Psd;

use super::{Document, GroupNode, LayerNode, Node};
use crate::error::AnalyzeError;

/// A decoded document, still backed by the parser crate
#[derive(Debug)]
pub struct ParsedPsd {
    psd: Psd,
}

impl ParsedPsd {
    /// Decode a raw byte buffer
    ///
    /// Any parser failure (corrupt file, unsupported variant, internal
    /// bug) collapses into `AnalyzeError::Decode`; the caller surfaces
    /// them all the same way.
    pub fn parse(bytes: &[u8]) -> Result<Self, AnalyzeError> {
        let psd = Psd::from_bytes(bytes)
            .map_err(|e| AnalyzeError::Decode(e.to_string()))?;
        Ok(ParsedPsd { psd })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.psd.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.psd.height()
    }

    /// Human-readable color mode label (e.g. "Rgb")
    pub fn color_mode_label(&self) -> String {
        format!("{:?}", self.psd.color_mode())
    }

    /// The full-canvas composite as a flat RGBA buffer
    /// (length = width * height * 4)
    pub fn composite(&self) -> Vec<u8> {
        self.psd.rgba()
    }

    /// Copy the parser's layer/group view into an owned node tree
    ///
    /// The psd crate exposes layers as one flat list and groups as a
    /// table keyed by id, with parent ids linking both upward. The
    /// interleaved sibling order of subgroups vs. layers is not
    /// recoverable from that view, so each container lists its
    /// subgroups first (in the order the decoder assigned their ids)
    /// followed by its layers (document order).
    ///
    /// The psd crate does not surface guides, slices, embedded text,
    /// or the group open flag; those fields stay empty here and are
    /// filled by richer parser adapters.
    pub fn document(&self) -> Document {
        let groups = self.psd.groups();

        // Subgroup ids per parent, ascending id within each parent
        let mut subgroups_of: HashMap<Option<u32>, Vec<u32>> = HashMap::new();
        let mut ids: Vec<u32> = groups.keys().copied().collect();
        ids.sort_unstable();
        for &id in &ids {
            let parent = groups[&id].parent_id();
            subgroups_of.entry(parent).or_default().push(id);
        }

        // Layers per parent, document order preserved
        let mut layers_of: HashMap<Option<u32>, Vec<LayerNode>> = HashMap::new();
        for layer in self.psd.layers() {
            layers_of
                .entry(layer.parent_id())
                .or_default()
                .push(convert_layer(layer));
        }

        Document {
            width: self.width(),
            height: self.height(),
            color_mode: self.color_mode_label(),
            children: build_children(None, &subgroups_of, &mut layers_of, groups),
        }
    }
}

/// Assemble the children of one container
///
/// Recursion depth equals group nesting depth, which Photoshop caps
/// at 10 levels, so plain recursion is safe here.
fn build_children(
    parent: Option<u32>,
    subgroups_of: &HashMap<Option<u32>, Vec<u32>>,
    layers_of: &mut HashMap<Option<u32>, Vec<LayerNode>>,
    groups: &HashMap<u32, psd::PsdGroup>,
) -> Vec<Node> {
    let mut children = Vec::new();

    if let Some(subgroup_ids) = subgroups_of.get(&parent) {
        for &id in subgroup_ids {
            let group = &groups[&id];
            children.push(Node::Group(GroupNode {
                name: group.name().to_string(),
                open: None,
                guides: Vec::new(),
                slices: Vec::new(),
                children: build_children(Some(id), subgroups_of, layers_of, groups),
            }));
        }
    }

    if let Some(layers) = layers_of.remove(&parent) {
        children.extend(layers.into_iter().map(Node::Layer));
    }

    children
}

/// Copy one layer's attributes into an owned node
fn convert_layer(layer: &psd::PsdLayer) -> LayerNode {
    let top = layer.layer_top();
    let left = layer.layer_left();
    LayerNode {
        name: layer.name().to_string(),
        width: (layer.layer_right() - left).max(0) as u32,
        height: (layer.layer_bottom() - top).max(0) as u32,
        top,
        left,
        opacity: scale_opacity(layer.opacity()),
        visible: layer.visible(),
        blend_mode: format!("{:?}", layer.blend_mode()),
        clipped: layer.is_clipping_mask(),
        text: None,
        guides: Vec::new(),
        slices: Vec::new(),
    }
}

/// Normalize the parser's 0-255 opacity to the 0-100 percent the
/// display contract uses, rounding to nearest
fn scale_opacity(raw: u8) -> u8 {
    ((u16::from(raw) * 100 + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = ParsedPsd::parse(b"definitely not a photoshop document");
        assert!(matches!(result, Err(AnalyzeError::Decode(_))));
    }

    #[test]
    fn test_empty_bytes_are_rejected() {
        assert!(ParsedPsd::parse(&[]).is_err());
    }

    #[test]
    fn test_opacity_scaling_endpoints() {
        assert_eq!(scale_opacity(0), 0);
        assert_eq!(scale_opacity(255), 100);
    }

    #[test]
    fn test_opacity_scaling_midpoint() {
        assert_eq!(scale_opacity(128), 50);
    }
}
