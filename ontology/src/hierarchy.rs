//! Class hierarchy extraction.
//!
//! Builds the set of declared classes and the parent → children adjacency
//! restricted to that set. A subclass assertion is retained only when both
//! endpoints are declared classes; everything else is dropped without
//! comment. The result is a DAG, not a tree: a class asserted under two
//! parents appears under both.

use std::collections::{BTreeMap, BTreeSet};

use crate::store::TripleStore;
use crate::vocab;

/// The extracted class hierarchy.
#[derive(Debug, Default)]
pub struct ClassHierarchy {
    /// All IRIs declared as `owl:Class`.
    pub classes: BTreeSet<String>,
    /// Parent IRI → direct child IRIs, in assertion order.
    pub children: BTreeMap<String, Vec<String>>,
}

impl ClassHierarchy {
    /// Scans the store for class declarations and subclass assertions.
    #[must_use]
    pub fn extract(store: &TripleStore) -> Self {
        let classes: BTreeSet<String> = store
            .subjects_with(vocab::RDF_TYPE, vocab::OWL_CLASS)
            .map(str::to_string)
            .collect();

        let mut children: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for triple in store.triples() {
            if triple.predicate.as_iri() != Some(vocab::RDFS_SUBCLASS_OF) {
                continue;
            }
            let (Some(child), Some(parent)) = (triple.subject.as_iri(), triple.object.as_iri())
            else {
                continue;
            };
            if classes.contains(child) && classes.contains(parent) {
                children
                    .entry(parent.to_string())
                    .or_default()
                    .push(child.to_string());
            }
        }

        Self { classes, children }
    }

    /// Classes with no declared parent inside the class set, each exactly
    /// once regardless of duplicate declarations.
    #[must_use]
    pub fn roots(&self) -> Vec<&str> {
        let has_parent: BTreeSet<&str> = self
            .children
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        self.classes
            .iter()
            .map(String::as_str)
            .filter(|class| !has_parent.contains(class))
            .collect()
    }

    /// Number of distinct classes that have at least one child.
    #[must_use]
    pub fn parent_count(&self) -> usize {
        self.children.len()
    }

    /// Direct children of a parent, or an empty slice.
    #[must_use]
    pub fn children_of(&self, parent: &str) -> &[String] {
        self.children.get(parent).map_or(&[], Vec::as_slice)
    }
}

/// The first `ao:ufoCategory` literal asserted on a class, if any.
///
/// The category is a foundational-ontology tag (kind, role, phase, moment)
/// used only for coloring; its absence is not an error.
#[must_use]
pub fn ufo_category(store: &TripleStore, iri: &str) -> Option<String> {
    store
        .objects_of(iri, vocab::AO_UFO_CATEGORY)
        .find_map(|object| object.lexical())
        .map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const DIAMOND: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

        ao:A a owl:Class .
        ao:B a owl:Class .
        ao:C a owl:Class .
        ao:B rdfs:subClassOf ao:A .
        ao:C rdfs:subClassOf ao:A .
        ao:C rdfs:subClassOf ao:B .
    "#;

    fn iri(local: &str) -> String {
        format!("http://actuarialnotes.com/ontology/actuarial#{local}")
    }

    #[test]
    fn diamond_hierarchy_preserves_multiple_inheritance() {
        let store = TripleStore::parse(DIAMOND).unwrap();
        let hierarchy = ClassHierarchy::extract(&store);
        assert_eq!(hierarchy.children_of(&iri("A")), [iri("B"), iri("C")]);
        assert_eq!(hierarchy.children_of(&iri("B")), [iri("C")]);
        assert_eq!(hierarchy.roots(), vec![iri("A")]);
        assert_eq!(hierarchy.parent_count(), 2);
    }

    #[test]
    fn assertions_outside_class_set_contribute_no_edge() {
        let ttl = r#"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

            ao:A a owl:Class .
            ao:Ghost rdfs:subClassOf ao:A .
            ao:A rdfs:subClassOf ao:Phantom .
        "#;
        let store = TripleStore::parse(ttl).unwrap();
        let hierarchy = ClassHierarchy::extract(&store);
        assert!(hierarchy.children.is_empty());
        assert_eq!(hierarchy.roots(), vec![iri("A")]);
    }

    #[test]
    fn duplicate_declarations_yield_one_root() {
        let ttl = r#"
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

            ao:A a owl:Class .
            ao:A a owl:Class .
        "#;
        let store = TripleStore::parse(ttl).unwrap();
        let hierarchy = ClassHierarchy::extract(&store);
        assert_eq!(hierarchy.roots(), vec![iri("A")]);
    }

    #[test]
    fn ufo_category_reads_annotation() {
        let ttl = r#"
            @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .
            ao:Actuary ao:ufoCategory "role" .
        "#;
        let store = TripleStore::parse(ttl).unwrap();
        assert_eq!(
            ufo_category(&store, &iri("Actuary")),
            Some("role".to_string())
        );
        assert_eq!(ufo_category(&store, &iri("Risk")), None);
    }
}
