//! Object-property relationship extraction.

use crate::label::resolve_label;
use crate::store::TripleStore;
use crate::vocab;

/// An entity together with its resolved display label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Labeled {
    /// Resolved display label. Ordered first so relationship lists sort by
    /// label, matching how they are shown.
    pub label: String,
    /// Full IRI.
    pub iri: String,
}

/// One domain → property → range tuple derived from an object property.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Relationship {
    /// The declared source class.
    pub domain: Labeled,
    /// The object property itself.
    pub property: Labeled,
    /// The declared target class.
    pub range: Labeled,
}

/// Extracts one relationship per object property that declares both a
/// domain and a range.
///
/// The first `rdfs:domain` and `rdfs:range` object in document order are
/// used; properties missing either assertion are silently excluded. That
/// filtering is a property of the system, not an error path.
#[must_use]
pub fn extract_relationships(store: &TripleStore) -> Vec<Relationship> {
    let mut relationships = Vec::new();
    for property in store.subjects_with(vocab::RDF_TYPE, vocab::OWL_OBJECT_PROPERTY) {
        let domain = store
            .objects_of(property, vocab::RDFS_DOMAIN)
            .find_map(|object| object.as_iri());
        let range = store
            .objects_of(property, vocab::RDFS_RANGE)
            .find_map(|object| object.as_iri());
        let (Some(domain), Some(range)) = (domain, range) else {
            continue;
        };
        relationships.push(Relationship {
            domain: labeled(store, domain),
            property: labeled(store, property),
            range: labeled(store, range),
        });
    }
    relationships
}

/// Number of declared object properties, whether or not their domain and
/// range resolve. The chart's statistics line counts all of them.
#[must_use]
pub fn object_property_count(store: &TripleStore) -> usize {
    store
        .subjects_with(vocab::RDF_TYPE, vocab::OWL_OBJECT_PROPERTY)
        .count()
}

fn labeled(store: &TripleStore, iri: &str) -> Labeled {
    Labeled {
        label: resolve_label(store, iri),
        iri: iri.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn property_with_domain_and_range_yields_one_tuple() {
        let ttl = r#"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

            ao:covers a owl:ObjectProperty ;
                rdfs:label "covers" ;
                rdfs:domain ao:InsurancePolicy ;
                rdfs:range ao:Risk .
            ao:InsurancePolicy rdfs:label "Insurance Policy" .
        "#;
        let store = TripleStore::parse(ttl).unwrap();
        let relationships = extract_relationships(&store);
        assert_eq!(relationships.len(), 1);
        let rel = &relationships[0];
        assert_eq!(rel.domain.label, "Insurance Policy");
        assert_eq!(rel.property.label, "covers");
        assert_eq!(rel.range.label, "Risk");
    }

    #[test]
    fn property_missing_range_is_dropped() {
        let ttl = r#"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

            ao:assesses a owl:ObjectProperty ;
                rdfs:domain ao:Actuary .
        "#;
        let store = TripleStore::parse(ttl).unwrap();
        assert!(extract_relationships(&store).is_empty());
        assert_eq!(object_property_count(&store), 1);
    }

    #[test]
    fn property_missing_domain_is_dropped() {
        let ttl = r#"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

            ao:assesses a owl:ObjectProperty ;
                rdfs:range ao:Risk .
        "#;
        let store = TripleStore::parse(ttl).unwrap();
        assert!(extract_relationships(&store).is_empty());
    }
}
