//! Self-contained HTML explorer.
//!
//! One complete document with inlined styling and no external resource
//! references: a stats strip, the curated domain grid, the class hierarchy
//! as a nested list, the resolved relationship list, and the standards
//! legend. All interpolated text is HTML-escaped.

use ontoviz_ontology::{resolve_label, ClassHierarchy, Relationship, TripleStore};

use crate::profile::VizProfile;
use crate::summary::Summary;

/// Relationship rows shown in the document, after sorting.
pub const MAX_RELATIONSHIPS: usize = 20;

/// Renders the complete explorer document.
#[must_use]
pub fn render_html(
    profile: &VizProfile,
    summary: &Summary,
    store: &TripleStore,
    hierarchy: &ClassHierarchy,
    relationships: &[Relationship],
) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Interactive Explorer</title>
<style>
{css}</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>{title}</h1>
<p>{subtitle}</p>
</div>
{stats}
<div class="content">
<div class="section">
<h2>Domain Structure</h2>
<div class="domains">
{domains}</div>
</div>
<div class="section">
<h2>Class Hierarchy</h2>
{tree}</div>
<div class="section">
<h2>Key Relationships</h2>
<div class="relationships">
{relationships}</div>
</div>
{legend}</div>
</div>
</body>
</html>
"##,
        title = escape_html(&profile.title),
        subtitle = escape_html(&profile.subtitle),
        css = include_str!("../static/explorer.css"),
        stats = render_stats(summary),
        domains = render_domains(profile, summary),
        tree = render_tree(store, hierarchy),
        relationships = render_relationships(relationships),
        legend = render_legend(profile),
    )
}

fn render_stats(summary: &Summary) -> String {
    let stat = |number: usize, label: &str| {
        format!(
            "<div class=\"stat\">\n<div class=\"stat-number\">{number}</div>\n<div class=\"stat-label\">{label}</div>\n</div>\n"
        )
    };
    format!(
        "<div class=\"stats\">\n{}{}{}</div>\n",
        stat(summary.classes, "Classes"),
        stat(summary.relationships, "Relationships"),
        stat(summary.parent_classes, "Parent Classes"),
    )
}

fn render_domains(profile: &VizProfile, summary: &Summary) -> String {
    let mut html = String::new();
    for bucket in &profile.buckets {
        let present = summary
            .buckets
            .iter()
            .find(|presence| presence.name == bucket.name)
            .map_or(0, |presence| presence.present);
        html.push_str(&format!(
            "<div class=\"domain\" style=\"border-color: {color};\">\n<div class=\"domain-title\" style=\"color: {color};\">{name}</div>\n<div class=\"domain-desc\">{desc}</div>\n<div class=\"domain-count\">{present} of {curated} concepts in ontology</div>\n<div class=\"concept-list\">\n",
            color = escape_html(&bucket.color),
            name = escape_html(&bucket.name),
            desc = escape_html(&bucket.description),
            present = present,
            curated = bucket.concepts.len(),
        ));
        for concept in &bucket.concepts {
            html.push_str(&format!(
                "<div class=\"concept\" style=\"border-color: {color}; color: {color};\">{concept}</div>\n",
                color = escape_html(&bucket.color),
                concept = escape_html(concept),
            ));
        }
        html.push_str("</div>\n</div>\n");
    }
    html
}

/// Depth-first nested list over the class DAG. Children are sorted
/// alphabetically by label. A class reached through several parents is
/// rendered once per distinct parent path; the ancestor guard only skips a
/// class already on the current path, so a cyclic assertion cannot recurse
/// forever.
fn render_tree(store: &TripleStore, hierarchy: &ClassHierarchy) -> String {
    let mut roots: Vec<&str> = hierarchy.roots();
    roots.sort_by_key(|iri| resolve_label(store, iri));

    if roots.is_empty() {
        return "<p>No root classes found.</p>\n".to_string();
    }

    let mut html = String::from("<div class=\"tree\">\n<ul>\n");
    let mut path: Vec<String> = Vec::new();
    for root in roots {
        render_tree_node(&mut html, store, hierarchy, root, &mut path);
    }
    html.push_str("</ul>\n</div>\n");
    html
}

fn render_tree_node(
    html: &mut String,
    store: &TripleStore,
    hierarchy: &ClassHierarchy,
    iri: &str,
    path: &mut Vec<String>,
) {
    if path.iter().any(|ancestor| ancestor == iri) {
        return;
    }
    let label = resolve_label(store, iri);
    html.push_str(&format!("<li>{}", escape_html(&label)));

    let mut children: Vec<&str> = hierarchy.children_of(iri).iter().map(String::as_str).collect();
    children.sort_by_key(|child| resolve_label(store, child));
    if !children.is_empty() {
        html.push_str("\n<ul>\n");
        path.push(iri.to_string());
        for child in children {
            render_tree_node(html, store, hierarchy, child, path);
        }
        path.pop();
        html.push_str("</ul>\n");
    }
    html.push_str("</li>\n");
}

fn render_relationships(relationships: &[Relationship]) -> String {
    let mut sorted = relationships.to_vec();
    sorted.sort();
    let mut html = String::new();
    for rel in sorted.iter().take(MAX_RELATIONSHIPS) {
        html.push_str(&format!(
            "<div class=\"relationship\">\n<div class=\"rel-domain\">{domain}</div>\n<div class=\"rel-arrow\">\u{2192}</div>\n<div class=\"rel-prop\">{prop}</div>\n<div class=\"rel-arrow\">\u{2192}</div>\n<div class=\"rel-range\">{range}</div>\n</div>\n",
            domain = escape_html(&rel.domain.label),
            prop = escape_html(&rel.property.label),
            range = escape_html(&rel.range.label),
        ));
    }
    html
}

fn render_legend(profile: &VizProfile) -> String {
    let mut html = String::from(
        "<div class=\"legend\">\n<h3>Standards &amp; Alignment</h3>\n<div class=\"legend-items\">\n",
    );
    for standard in &profile.standards {
        html.push_str(&format!(
            "<div class=\"legend-item\">\n<div class=\"legend-color\" style=\"background: {color};\"></div>\n<div class=\"legend-text\">\n<strong>{name}</strong>\n{desc}\n</div>\n</div>\n",
            color = escape_html(&standard.color),
            name = escape_html(&standard.name),
            desc = escape_html(&standard.description),
        ));
    }
    html.push_str("</div>\n</div>\n");
    html
}

/// Escapes HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
