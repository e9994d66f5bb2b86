//! Visual-model building and rendering for the ontology explorer.
//!
//! Consumes the structures extracted by `ontoviz-ontology` and produces the
//! output artifacts: a domain-summary raster chart, a full-graph raster
//! chart, a self-contained HTML explorer, and a JSON summary sidecar.
//!
//! The curated domain tables (buckets, arrows, standards, color rules) live
//! in an explicit [`VizProfile`] passed into classification and rendering,
//! so they can be substituted in tests without touching any logic.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod html;
pub mod layout;
pub mod model;
pub mod profile;
pub mod raster;
pub mod summary;
pub mod writer;

pub use classify::{bucket_of_label, classify_color, ClassFacts, ColorRule, RuleMatcher};
pub use html::render_html;
pub use layout::{layout_full_graph, LayoutUnavailable};
pub use model::{EdgeVisual, NodeVisual, Rgb, VisualModel};
pub use profile::{BucketArrow, DomainBucket, Standard, VizProfile};
pub use raster::{render_domain_chart, render_full_graph};
pub use summary::Summary;
