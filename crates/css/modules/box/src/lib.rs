//! CSS Box Model Module Level 3 — Box dimensions, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Produces a [`Layout`] description from a resolved style and aggregates it
//! into [`Bounds`]. No flow or placement algorithm runs here: positions are
//! always the origin and only `px` amounts contribute to sizes.

#![forbid(unsafe_code)]

mod bounds;
mod layout;

pub use bounds::{Bounds, compute_bounds};
pub use layout::{BoxModel, Dimensions, FlowFlags, Layout, compute_layout};
