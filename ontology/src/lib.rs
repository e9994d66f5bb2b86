//! Ontology graph loading and descriptive extraction.
//!
//! This crate is the read-only half of the visualization pipeline: it parses
//! a Turtle ontology into an in-memory [`TripleStore`] and derives the
//! structures the renderers consume: resolved labels, the class hierarchy,
//! and domain/range-resolved object-property relationships. It performs no
//! inference, consistency checking, or query answering; everything here is a
//! single pass over already-asserted triples.
//!
//! # Entry Point
//!
//! ```no_run
//! use ontoviz_ontology::{ClassHierarchy, TripleStore, extract_relationships};
//!
//! let store = TripleStore::load("actuarial-ontology.ttl".as_ref())?;
//! let hierarchy = ClassHierarchy::extract(&store);
//! let relationships = extract_relationships(&store);
//! # Ok::<(), ontoviz_ontology::ParseError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod hierarchy;
pub mod label;
pub mod relations;
pub mod store;
pub mod term;
pub mod vocab;

pub use error::ParseError;
pub use hierarchy::ClassHierarchy;
pub use label::resolve_label;
pub use relations::{extract_relationships, object_property_count, Labeled, Relationship};
pub use store::TripleStore;
pub use term::{Term, Triple};
