//! End-to-end pipeline test over the bundled fixture ontology: load,
//! extract, lay out, and render every output artifact.

use std::collections::BTreeSet;
use std::path::Path;

use ontoviz_ontology::{
    extract_relationships, object_property_count, resolve_label, ClassHierarchy, TripleStore,
};
use ontoviz_render::{
    layout_full_graph, render_domain_chart, render_full_graph, render_html, writer, Summary,
    VizProfile,
};

fn fixture_store() -> TripleStore {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/actuarial-mini.ttl");
    TripleStore::load(&path).unwrap()
}

#[test]
fn fixture_extracts_expected_structures() {
    let store = fixture_store();
    let hierarchy = ClassHierarchy::extract(&store);
    assert_eq!(hierarchy.classes.len(), 6);
    assert_eq!(hierarchy.roots().len(), 1);
    assert_eq!(hierarchy.parent_count(), 3);

    let relationships = extract_relationships(&store);
    // "administers" has no range and must be dropped.
    assert_eq!(relationships.len(), 2);
    assert_eq!(object_property_count(&store), 3);
}

#[test]
fn all_artifacts_are_written() {
    let store = fixture_store();
    let hierarchy = ClassHierarchy::extract(&store);
    let relationships = extract_relationships(&store);
    let profile = VizProfile::actuarial();
    let class_labels: BTreeSet<String> = hierarchy
        .classes
        .iter()
        .map(|class| resolve_label(&store, class))
        .collect();
    let summary = Summary::derive(
        &hierarchy,
        &relationships,
        object_property_count(&store),
        &class_labels,
        &profile,
    );

    let dir = tempfile::tempdir().unwrap();

    let image = dir.path().join("domain.png");
    render_domain_chart(&profile, &summary, &image, 30).unwrap();
    assert!(image.metadata().unwrap().len() > 0);

    let graph_image = dir.path().join("graph.png");
    let model = layout_full_graph(&store, &hierarchy, &relationships, &profile, 42);
    render_full_graph(&model, &profile.title, &graph_image, 30).unwrap();
    assert!(graph_image.exists());

    let html = render_html(&profile, &summary, &store, &hierarchy, &relationships);
    let html_path = dir.path().join("explorer.html");
    writer::write(&html_path, &html).unwrap();
    let written = std::fs::read_to_string(&html_path).unwrap();
    assert!(written.contains("Insurance Policy"));
    assert!(written.contains("covers"));
    assert!(!written.contains("administers"));
}

#[test]
fn full_graph_model_is_deterministic_for_a_seed() {
    let store = fixture_store();
    let hierarchy = ClassHierarchy::extract(&store);
    let relationships = extract_relationships(&store);
    let profile = VizProfile::actuarial();

    let first = layout_full_graph(&store, &hierarchy, &relationships, &profile, 42);
    let second = layout_full_graph(&store, &hierarchy, &relationships, &profile, 42);
    assert_eq!(first.nodes.len(), second.nodes.len());
    for (a, b) in first.nodes.iter().zip(&second.nodes) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.pos, b.pos);
    }
}

#[test]
fn summary_sidecar_counts_fixture_concepts() {
    let store = fixture_store();
    let hierarchy = ClassHierarchy::extract(&store);
    let relationships = extract_relationships(&store);
    let profile = VizProfile::actuarial();
    let class_labels: BTreeSet<String> = hierarchy
        .classes
        .iter()
        .map(|class| resolve_label(&store, class))
        .collect();
    let summary = Summary::derive(
        &hierarchy,
        &relationships,
        object_property_count(&store),
        &class_labels,
        &profile,
    );

    let json = summary.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["classes"], 6);
    assert_eq!(value["relationships"], 2);
    assert_eq!(value["object_properties"], 3);

    // "Risk" and "Quantitative Risk" are curated Risk Concepts members.
    let buckets = value["buckets"].as_array().unwrap();
    let risk = buckets
        .iter()
        .find(|bucket| bucket["name"] == "Risk Concepts")
        .unwrap();
    assert_eq!(risk["present"], 2);
}
