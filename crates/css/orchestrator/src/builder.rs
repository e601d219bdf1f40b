//! Render-tree construction: cascade, then layout, paint, composite and bounds.

use std::collections::BTreeMap;
use std::sync::Arc;

use css_box::{compute_bounds, compute_layout};
use css_cascade::{
    CascadeOptions, ResolvedStyle, StyleRule, complete_style, drop_outranked_longhands, resolve,
};
use css_compositing::compute_composite;
use css_paint::compute_paint;
use log::{debug, trace};

use crate::cache::{CacheKey, cache_key};
use crate::render_node::stacking_contexts;
use crate::{Element, PageRender, RenderCache, RenderConfig, RenderNode};

/// Where an element's style comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleSource<'rules> {
    /// Run the cascade over these rules.
    Rules(&'rules [StyleRule]),
    /// Use an already resolved style; defaulting still applies, and longhands
    /// outranked by their shorthand are dropped.
    Resolved(ResolvedStyle),
}

/// Builds render nodes and pages.
///
/// All methods take `&self`; the builder can be shared across threads and the
/// cache can be shared across builders.
#[derive(Debug)]
pub struct RenderTreeBuilder {
    config: RenderConfig,
    cascade: CascadeOptions,
    cache: Arc<RenderCache>,
}

impl Default for RenderTreeBuilder {
    #[inline]
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl RenderTreeBuilder {
    /// A builder with its own empty cache.
    #[inline]
    pub fn new(config: RenderConfig) -> Self {
        Self::with_cache(config, Arc::new(RenderCache::new()))
    }

    /// A builder writing into a caller-provided cache.
    #[inline]
    pub fn with_cache(config: RenderConfig, cache: Arc<RenderCache>) -> Self {
        let cascade = config.cascade_options();
        Self {
            config,
            cascade,
            cache,
        }
    }

    #[inline]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub const fn cache(&self) -> &Arc<RenderCache> {
        &self.cache
    }

    /// Resolve an element's style without rendering it.
    pub fn resolve_style(
        &self,
        element: &Element,
        source: &StyleSource<'_>,
        parent: Option<&ResolvedStyle>,
    ) -> ResolvedStyle {
        match source {
            StyleSource::Rules(rules) => resolve(element, rules, &self.cascade, parent),
            StyleSource::Resolved(style) => complete_style(
                drop_outranked_longhands(style.clone()),
                &self.cascade,
                parent,
            ),
        }
    }

    /// Render a single element.
    #[inline]
    pub fn render_element(&self, element: &Element, source: &StyleSource<'_>) -> RenderNode {
        self.render_element_with_parent(element, source, None)
    }

    /// Render a single element, inheriting from `parent` when inheritance is enabled.
    ///
    /// Repeated calls with identical inputs return the cached node.
    pub fn render_element_with_parent(
        &self,
        element: &Element,
        source: &StyleSource<'_>,
        parent: Option<&ResolvedStyle>,
    ) -> RenderNode {
        let inputs = (element, source, parent, &self.config);
        if let Some(cached) = self.cache.get(&inputs) {
            trace!(
                "render cache hit for <{}> ({:#018x})",
                element.tag_name,
                cache_key(&inputs)
            );
            return cached;
        }
        let style = self.resolve_style(element, source, parent);
        let node = render_resolved(element, &style);
        debug!(
            "rendered <{}>: {} properties, stacking_context={}",
            element.tag_name,
            style.len(),
            node.stacking_context
        );
        self.cache.put(&inputs, node.clone());
        node
    }

    /// Render every element against one rule set and assemble the page.
    pub fn render_page(&self, elements: &[Element], rules: &[StyleRule]) -> PageRender {
        let source = StyleSource::Rules(rules);
        let nodes: Vec<RenderNode> = elements
            .iter()
            .map(|element| self.render_element(element, &source))
            .collect();
        let stacking = stacking_contexts(&nodes);
        debug!(
            "rendered page: {} elements, {} rules, {} stacking contexts",
            nodes.len(),
            rules.len(),
            stacking.len()
        );
        PageRender {
            elements: nodes,
            stacking_contexts: stacking,
            viewport: self.config.viewport(),
        }
    }

    /// Current cache contents.
    #[inline]
    pub fn get_rendered_styles(&self) -> BTreeMap<CacheKey, RenderNode> {
        self.cache.snapshot()
    }

    #[inline]
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("render cache cleared");
    }
}

/// Run layout, paint, composite and bounds over a resolved style.
fn render_resolved(element: &Element, style: &ResolvedStyle) -> RenderNode {
    let layout = compute_layout(style);
    let paint = compute_paint(style);
    let composite = compute_composite(style);
    let bounds = compute_bounds(&layout);
    RenderNode {
        element: element.clone(),
        z_index: composite.z_index,
        stacking_context: composite.stacking_context,
        layout,
        paint,
        composite,
        bounds,
    }
}
