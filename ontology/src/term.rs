//! RDF term and triple types.
//!
//! Terms are owned strings: IRIs keep their full text, literals keep only
//! their lexical form (language tags and datatypes are irrelevant to a
//! purely visual tool and are discarded at parse time).

/// A single RDF term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A full IRI, e.g. `http://actuarialnotes.com/ontology/actuarial#Risk`.
    Iri(String),
    /// The lexical form of a literal.
    Literal(String),
    /// A blank node identifier.
    Blank(String),
}

impl Term {
    /// Returns the IRI text if this term is an IRI.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the lexical form if this term is a literal.
    #[must_use]
    pub fn lexical(&self) -> Option<&str> {
        match self {
            Term::Literal(text) => Some(text),
            _ => None,
        }
    }
}

/// One (subject, predicate, object) fact; immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// Subject term.
    pub subject: Term,
    /// Predicate term (always an IRI in well-formed input).
    pub predicate: Term,
    /// Object term.
    pub object: Term,
}
