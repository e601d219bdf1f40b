//! Render-tree output types.

use css_box::{Bounds, Layout};
use css_compositing::Composite;
use css_paint::Paint;
use serde::Serialize;

use crate::{Element, Viewport};

/// Everything computed for one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderNode {
    pub element: Element,
    pub layout: Layout,
    pub paint: Paint,
    pub composite: Composite,
    pub bounds: Bounds,
    pub z_index: Option<i32>,
    pub stacking_context: bool,
}

/// A stacking-context member: its document position and z-index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct StackingContextEntry {
    /// Index into [`PageRender::elements`].
    pub index: usize,
    pub z_index: Option<i32>,
}

/// A rendered page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageRender {
    /// One node per input element, in input order.
    pub elements: Vec<RenderNode>,
    /// Stacking-context members, by z-index then document order.
    pub stacking_contexts: Vec<StackingContextEntry>,
    pub viewport: Viewport,
}

/// Collect nodes that establish a stacking context, ordered by z-index
/// ascending (missing counts as zero) and then document order.
pub fn stacking_contexts(nodes: &[RenderNode]) -> Vec<StackingContextEntry> {
    let mut entries: Vec<StackingContextEntry> = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.stacking_context)
        .map(|(index, node)| StackingContextEntry {
            index,
            z_index: node.z_index,
        })
        .collect();
    entries.sort_by_key(|entry| entry.z_index.unwrap_or(0));
    entries
}
