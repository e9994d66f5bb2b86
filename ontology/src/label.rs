//! Label resolution.

use crate::store::TripleStore;
use crate::vocab;

/// Resolves the display label for an entity.
///
/// Policy: the first `rdfs:label` literal in document order wins; when no
/// label is asserted, the fallback is the substring after the last `#`
/// (or, failing that, the last `/`) of the IRI. Always returns a string,
/// so a missing annotation is not an error.
#[must_use]
pub fn resolve_label(store: &TripleStore, iri: &str) -> String {
    store
        .objects_of(iri, vocab::RDFS_LABEL)
        .find_map(|object| object.lexical())
        .map(str::to_string)
        .unwrap_or_else(|| local_name(iri).to_string())
}

/// The part of an IRI after its last namespace separator.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    match iri.rsplit_once('#') {
        Some((_, local)) => local,
        None => iri.rsplit_once('/').map_or(iri, |(_, local)| local),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const LABELED: &str = r#"
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

        ao:Risk rdfs:label "Risk"@en .
        ao:Risk rdfs:label "Risiko"@de .
    "#;

    #[test]
    fn explicit_label_wins() {
        let store = TripleStore::parse(LABELED).unwrap();
        let label = resolve_label(&store, "http://actuarialnotes.com/ontology/actuarial#Risk");
        assert_eq!(label, "Risk");
    }

    #[test]
    fn resolution_is_idempotent() {
        let store = TripleStore::parse(LABELED).unwrap();
        let iri = "http://actuarialnotes.com/ontology/actuarial#Risk";
        assert_eq!(resolve_label(&store, iri), resolve_label(&store, iri));
    }

    #[test]
    fn fallback_strips_fragment() {
        let store = TripleStore::parse("").unwrap();
        assert_eq!(
            resolve_label(&store, "http://example.com/onto#LossEvent"),
            "LossEvent"
        );
    }

    #[test]
    fn fallback_strips_path_when_no_fragment() {
        assert_eq!(local_name("http://example.com/onto/Claim"), "Claim");
        assert_eq!(local_name("Claim"), "Claim");
    }
}
