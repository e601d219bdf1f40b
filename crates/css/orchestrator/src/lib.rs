//! Render-tree builder.
//!
//! Takes a flat list of parsed elements and a rule set, runs the cascade for
//! each element, and produces per-element render nodes (layout, paint,
//! composite and bounds) plus a page-level stacking-context list. Rendered
//! nodes are kept in a shared [`RenderCache`] until it is cleared.

#![forbid(unsafe_code)]

mod builder;
mod cache;
mod config;
mod element;
mod json;
mod render_node;

pub use builder::{RenderTreeBuilder, StyleSource};
pub use cache::{CacheKey, RenderCache, cache_key};
pub use config::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, RenderConfig, Viewport};
pub use element::Element;
pub use render_node::{PageRender, RenderNode, StackingContextEntry, stacking_contexts};

pub use css_cascade::{Declaration, Origin, ResolvedStyle, ResolvedValue, StyleRule};
pub use css_selectors::{RawSelector, SelectorKind, Specificity};
