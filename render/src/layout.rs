//! Layout strategies.
//!
//! The grid layout is pure arithmetic: six fixed regions in a 3×2 grid
//! with evenly spaced concept slots. The full-graph layout builds a
//! petgraph digraph and tries a layered hierarchical placement seeded
//! from the root set; when there are no roots to layer from it fails
//! over to a deterministic force-directed placement.

use std::collections::BTreeMap;

use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use ontoviz_ontology::hierarchy::ufo_category;
use ontoviz_ontology::{resolve_label, ClassHierarchy, Relationship, TripleStore};

use crate::classify::{classify_color, ClassFacts};
use crate::model::{EdgeVisual, NodeVisual, VisualModel};
use crate::profile::VizProfile;

/// The preferred layout cannot be applied to this graph.
///
/// Recoverable by design: the caller falls back to the force-directed
/// placement instead of aborting the run.
#[derive(Debug, Error)]
pub enum LayoutUnavailable {
    /// Hierarchical layering needs at least one root class to start from.
    #[error("hierarchical layout needs a non-empty root set")]
    NoRoots,
}

/// A rectangular region in normalized page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Region {
    /// Center of the region.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

const BOX_W: f64 = 0.28;
const BOX_H: f64 = 0.26;
const X_MARGIN: f64 = 0.05;
const X_GAP: f64 = 0.03;

/// Maximum concepts shown per bucket in the grid views.
pub const MAX_CONCEPTS_PER_BUCKET: usize = 7;

/// The six fixed regions of the domain-summary grid: three columns, two
/// rows, in bucket table order.
#[must_use]
pub fn grid_regions() -> [Region; 6] {
    let col = |i: f64| X_MARGIN + i * (BOX_W + X_GAP);
    let region = |x: f64, y: f64| Region {
        x,
        y,
        w: BOX_W,
        h: BOX_H,
    };
    [
        region(col(0.0), 0.66),
        region(col(1.0), 0.66),
        region(col(2.0), 0.66),
        region(col(0.0), 0.34),
        region(col(1.0), 0.34),
        region(col(2.0), 0.34),
    ]
}

/// Vertical slot centers for `n` concepts inside a region, top to bottom,
/// capped at [`MAX_CONCEPTS_PER_BUCKET`].
#[must_use]
pub fn concept_slots(region: Region, n: usize) -> Vec<f64> {
    let n = n.min(MAX_CONCEPTS_PER_BUCKET);
    let start = region.y + region.h - 0.09;
    let spacing = (region.h - 0.11) / n.max(1) as f64;
    (0..n).map(|i| start - i as f64 * spacing).collect()
}

/// Builds the full-graph visual model: one node per declared class,
/// hierarchy edges plus labeled relationship edges, hierarchical layout
/// when possible, seeded force-directed placement otherwise.
#[must_use]
pub fn layout_full_graph(
    store: &TripleStore,
    hierarchy: &ClassHierarchy,
    relationships: &[Relationship],
    profile: &VizProfile,
    seed: u64,
) -> VisualModel {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut index: BTreeMap<&str, NodeIndex> = BTreeMap::new();
    for class in &hierarchy.classes {
        index.insert(class.as_str(), graph.add_node(class.as_str()));
    }
    for (parent, children) in &hierarchy.children {
        for child in children {
            if let (Some(&p), Some(&c)) = (index.get(parent.as_str()), index.get(child.as_str())) {
                graph.add_edge(p, c, ());
            }
        }
    }

    let roots: Vec<&str> = hierarchy.roots();
    let positions = match hierarchical_positions(hierarchy, store, &roots) {
        Ok(positions) => positions,
        Err(LayoutUnavailable::NoRoots) => force_directed_positions(&graph, &index, seed),
    };

    let root_set: std::collections::BTreeSet<&str> = roots.into_iter().collect();
    let mut nodes = Vec::with_capacity(hierarchy.classes.len());
    for class in &hierarchy.classes {
        let label = resolve_label(store, class);
        let category = ufo_category(store, class);
        let color = classify_color(
            profile,
            ClassFacts {
                label: &label,
                is_root: root_set.contains(class.as_str()),
                ufo_category: category.as_deref(),
            },
        );
        let pos = positions.get(class.as_str()).copied().unwrap_or((0.5, 0.5));
        nodes.push(NodeVisual {
            id: class.clone(),
            label,
            pos,
            color,
        });
    }

    let mut edges = Vec::new();
    for (parent, children) in &hierarchy.children {
        for child in children {
            edges.push(EdgeVisual {
                from: parent.clone(),
                to: child.clone(),
                label: None,
            });
        }
    }
    for rel in relationships {
        // Relationship endpoints outside the class set have nowhere to
        // attach; they stay in the HTML list but not in the graph view.
        if hierarchy.classes.contains(&rel.domain.iri) && hierarchy.classes.contains(&rel.range.iri)
        {
            edges.push(EdgeVisual {
                from: rel.domain.iri.clone(),
                to: rel.range.iri.clone(),
                label: Some(rel.property.label.clone()),
            });
        }
    }

    VisualModel { nodes, edges }
}

/// Layered placement: BFS from the sorted root set assigns each class the
/// depth of its first (shallowest) visit; classes unreachable from any
/// root land in one extra bottom layer.
fn hierarchical_positions(
    hierarchy: &ClassHierarchy,
    store: &TripleStore,
    roots: &[&str],
) -> Result<BTreeMap<String, (f64, f64)>, LayoutUnavailable> {
    if roots.is_empty() {
        return Err(LayoutUnavailable::NoRoots);
    }

    let mut depth: BTreeMap<&str, usize> = BTreeMap::new();
    let mut queue: std::collections::VecDeque<(&str, usize)> =
        roots.iter().map(|r| (*r, 0)).collect();
    while let Some((class, d)) = queue.pop_front() {
        if depth.contains_key(class) {
            continue;
        }
        depth.insert(class, d);
        for child in hierarchy.children_of(class) {
            queue.push_back((child.as_str(), d + 1));
        }
    }

    let orphan_layer = depth.values().copied().max().unwrap_or(0) + 1;
    for class in &hierarchy.classes {
        depth.entry(class.as_str()).or_insert(orphan_layer);
    }

    let max_depth = depth.values().copied().max().unwrap_or(0);
    let mut layers: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (class, d) in &depth {
        layers.entry(*d).or_default().push(*class);
    }

    let mut positions = BTreeMap::new();
    for (d, mut layer) in layers {
        layer.sort_by_key(|class| resolve_label(store, class));
        let y = 0.92 - 0.84 * d as f64 / (max_depth.max(1)) as f64;
        let count = layer.len();
        for (i, class) in layer.into_iter().enumerate() {
            let x = (i + 1) as f64 / (count + 1) as f64;
            positions.insert(class.to_string(), (x, y));
        }
    }
    Ok(positions)
}

/// Fruchterman–Reingold placement with seeded initial positions; a fixed
/// seed gives a byte-identical layout, which keeps output reproducible.
fn force_directed_positions(
    graph: &DiGraph<&str, ()>,
    index: &BTreeMap<&str, NodeIndex>,
    seed: u64,
) -> BTreeMap<String, (f64, f64)> {
    const ITERATIONS: usize = 60;
    let n = graph.node_count();
    if n == 0 {
        return BTreeMap::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.05..0.95), rng.gen_range(0.05..0.95)))
        .collect();

    let k = (1.0 / n as f64).sqrt();
    for step in 0..ITERATIONS {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        // Repulsion between every pair
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attraction along edges
        for edge in graph.raw_edges() {
            let (a, b) = (edge.source().index(), edge.target().index());
            let dx = pos[a].0 - pos[b].0;
            let dy = pos[a].1 - pos[b].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-6);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        let temperature = 0.1 * (1.0 - step as f64 / ITERATIONS as f64);
        for i in 0..n {
            let (dx, dy) = disp[i];
            let length = (dx * dx + dy * dy).sqrt().max(1e-6);
            let step_len = length.min(temperature);
            pos[i].0 = (pos[i].0 + dx / length * step_len).clamp(0.02, 0.98);
            pos[i].1 = (pos[i].1 + dy / length * step_len).clamp(0.02, 0.98);
        }
    }

    index
        .iter()
        .map(|(class, idx)| ((*class).to_string(), pos[idx.index()]))
        .collect()
}
