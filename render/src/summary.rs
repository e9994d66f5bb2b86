//! Machine-readable run summary, written as a JSON sidecar next to the
//! HTML explorer.

use std::collections::BTreeSet;

use serde::Serialize;

use ontoviz_ontology::{ClassHierarchy, Relationship};

use crate::profile::VizProfile;

/// Per-bucket presence: how many curated concepts actually occur as class
/// labels in the loaded ontology.
#[derive(Debug, Serialize)]
pub struct BucketPresence {
    /// Bucket name.
    pub name: String,
    /// Curated concepts found among the loaded class labels.
    pub present: usize,
    /// Size of the curated concept list.
    pub curated: usize,
}

/// Counts describing one run, derived once and shared by every renderer.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Declared classes.
    pub classes: usize,
    /// Relationships with both domain and range resolved.
    pub relationships: usize,
    /// All declared object properties, resolvable or not.
    pub object_properties: usize,
    /// Distinct classes with at least one child.
    pub parent_classes: usize,
    /// Classes with no declared parent.
    pub roots: usize,
    /// Per-bucket presence counts, in bucket table order.
    pub buckets: Vec<BucketPresence>,
}

impl Summary {
    /// Derives the summary from the extracted structures.
    #[must_use]
    pub fn derive(
        hierarchy: &ClassHierarchy,
        relationships: &[Relationship],
        object_properties: usize,
        class_labels: &BTreeSet<String>,
        profile: &VizProfile,
    ) -> Self {
        let buckets = profile
            .buckets
            .iter()
            .map(|bucket| BucketPresence {
                name: bucket.name.clone(),
                present: bucket
                    .concepts
                    .iter()
                    .filter(|concept| class_labels.contains(*concept))
                    .count(),
                curated: bucket.concepts.len(),
            })
            .collect();
        Self {
            classes: hierarchy.classes.len(),
            relationships: relationships.len(),
            object_properties,
            parent_classes: hierarchy.parent_count(),
            roots: hierarchy.roots().len(),
            buckets,
        }
    }

    /// Serializes the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, which only happens on
    /// formatter I/O failure.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
