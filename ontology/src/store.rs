//! In-memory triple store backed by the sophia Turtle parser.

use std::fs;
use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as SophiaTriple;
use sophia_turtle::parser::turtle;

use crate::error::ParseError;
use crate::term::{Term, Triple};

/// The loaded graph: an owning collection of triples in document order.
///
/// Query helpers scan linearly; ontologies of this kind are a few thousand
/// triples at most, so no indexing is warranted.
#[derive(Debug, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
}

impl TripleStore {
    /// Loads and parses a Turtle file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file cannot be read and
    /// [`ParseError::Syntax`] if it is not well-formed Turtle.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|message| ParseError::Syntax {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses a Turtle document from a string.
    ///
    /// # Errors
    ///
    /// Returns the parser diagnostic if the document is malformed.
    pub fn parse(content: &str) -> Result<Self, String> {
        let mut triples = Vec::new();
        turtle::parse_str(content)
            .for_each_triple(|t| {
                triples.push(Triple {
                    subject: convert_term(t.s()),
                    predicate: convert_term(t.p()),
                    object: convert_term(t.o()),
                });
            })
            .map_err(|e| e.to_string())?;
        Ok(Self { triples })
    }

    /// Number of loaded triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the store holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// All triples in document order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// IRI subjects of triples matching `(?, predicate, object)`, in
    /// document order.
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &'a str,
        object: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.triples.iter().filter_map(move |t| {
            if t.predicate.as_iri() == Some(predicate) && t.object.as_iri() == Some(object) {
                t.subject.as_iri()
            } else {
                None
            }
        })
    }

    /// Object terms of triples matching `(subject, predicate, ?)`, in
    /// document order.
    pub fn objects_of<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples.iter().filter_map(move |t| {
            if t.subject.as_iri() == Some(subject) && t.predicate.as_iri() == Some(predicate) {
                Some(&t.object)
            } else {
                None
            }
        })
    }
}

/// Converts a sophia term into the owned representation.
fn convert_term<T: SophiaTerm>(term: T) -> Term {
    match term.kind() {
        TermKind::Iri => Term::Iri(
            term.iri()
                .map(|iri| iri.as_str().to_string())
                .unwrap_or_default(),
        ),
        TermKind::Literal => Term::Literal(
            term.lexical_form()
                .map(|form| form.to_string())
                .unwrap_or_default(),
        ),
        _ => Term::Blank(
            term.bnode_id()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
        ),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::vocab;

    const SMALL: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

        ao:Risk a owl:Class ; rdfs:label "Risk" .
        ao:Claim a owl:Class .
    "#;

    #[test]
    fn parses_turtle_into_triples() {
        let store = TripleStore::parse(SMALL).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn subjects_with_finds_classes_in_order() {
        let store = TripleStore::parse(SMALL).unwrap();
        let classes: Vec<&str> = store
            .subjects_with(vocab::RDF_TYPE, vocab::OWL_CLASS)
            .collect();
        assert_eq!(
            classes,
            vec![
                "http://actuarialnotes.com/ontology/actuarial#Risk",
                "http://actuarialnotes.com/ontology/actuarial#Claim",
            ]
        );
    }

    #[test]
    fn objects_of_returns_literals() {
        let store = TripleStore::parse(SMALL).unwrap();
        let labels: Vec<&Term> = store
            .objects_of(
                "http://actuarialnotes.com/ontology/actuarial#Risk",
                vocab::RDFS_LABEL,
            )
            .collect();
        assert_eq!(labels, vec![&Term::Literal("Risk".to_string())]);
    }

    #[test]
    fn malformed_turtle_is_an_error() {
        assert!(TripleStore::parse("this is not turtle @@").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TripleStore::load(Path::new("/nonexistent/onto.ttl")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
