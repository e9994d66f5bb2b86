//! Error taxonomy for ontology loading.
//!
//! Parsing is the only fatal failure in the pipeline: a missing or malformed
//! input file aborts the run. Missing annotations (labels, domains, ranges)
//! are never errors; they are resolved by the documented fallback policies
//! in [`crate::label`] and [`crate::relations`].

use std::path::PathBuf;

use thiserror::Error;

/// A fatal failure while loading the ontology file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input file could not be read.
    #[error("cannot read ontology file {path}: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not well-formed Turtle.
    #[error("malformed Turtle in {path}: {message}")]
    Syntax {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}
