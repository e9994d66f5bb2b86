//! The visualization profile: curated domain tables and classifier rules.
//!
//! Everything hand-authored lives here as data (bucket membership, the
//! inter-bucket arrow list, the standards legend, and the ordered color
//! rules) so the classifier and renderers stay free of domain literals.
//! The arrow list is deliberately curated rather than derived from the
//! extracted relationships: six arrows stay legible, eighty do not.

use crate::classify::{ColorRule, RuleMatcher};
use crate::model::Rgb;

/// A named conceptual grouping for the summary views.
#[derive(Debug, Clone)]
pub struct DomainBucket {
    /// Display name.
    pub name: String,
    /// Display color (`#rrggbb`).
    pub color: String,
    /// One-line description shown under the name.
    pub description: String,
    /// Ordered member concept labels; the grid shows at most seven.
    pub concepts: Vec<String>,
}

/// A curated arrow between two buckets in the domain-summary views.
#[derive(Debug, Clone)]
pub struct BucketArrow {
    /// Source bucket name.
    pub from: String,
    /// Target bucket name.
    pub to: String,
    /// Label drawn at the arrow midpoint.
    pub label: String,
}

/// An entry in the standards legend.
#[derive(Debug, Clone)]
pub struct Standard {
    /// Short name (e.g. `UFO`).
    pub name: String,
    /// Expansion shown next to the name.
    pub description: String,
    /// Swatch color in the HTML legend (`#rrggbb`).
    pub color: String,
}

/// The complete profile consumed by classification and rendering.
#[derive(Debug, Clone)]
pub struct VizProfile {
    /// Chart and document title.
    pub title: String,
    /// Subtitle line.
    pub subtitle: String,
    /// Buckets in display order; that order also decides fixed-membership
    /// classification ties (first match wins).
    pub buckets: Vec<DomainBucket>,
    /// Curated inter-bucket arrows.
    pub arrows: Vec<BucketArrow>,
    /// Standards legend entries.
    pub standards: Vec<Standard>,
    /// Ordered color rules for the full-graph view; evaluated first to
    /// last, first match wins.
    pub rules: Vec<ColorRule>,
}

impl VizProfile {
    /// The built-in actuarial profile: six buckets, six arrows, three
    /// standards, and the heuristic color chain.
    #[must_use]
    pub fn actuarial() -> Self {
        Self {
            title: "Actuarial Ontology".to_string(),
            subtitle: "Domain Structure aligned with UFO, COVER, and ASOPs".to_string(),
            buckets: actuarial_buckets(),
            arrows: actuarial_arrows(),
            standards: actuarial_standards(),
            rules: actuarial_rules(),
        }
    }

    /// Finds a bucket by name.
    #[must_use]
    pub fn bucket(&self, name: &str) -> Option<&DomainBucket> {
        self.buckets.iter().find(|bucket| bucket.name == name)
    }
}

fn bucket(name: &str, color: &str, description: &str, concepts: &[&str]) -> DomainBucket {
    DomainBucket {
        name: name.to_string(),
        color: color.to_string(),
        description: description.to_string(),
        concepts: concepts.iter().map(|c| (*c).to_string()).collect(),
    }
}

fn actuarial_buckets() -> Vec<DomainBucket> {
    vec![
        bucket(
            "UFO Foundation",
            "#FF6B6B",
            "Core ontological categories",
            &[
                "Endurant",
                "Perdurant",
                "Moment",
                "Entity",
                "Agent",
                "Event",
                "Activity",
            ],
        ),
        bucket(
            "Agents & Roles",
            "#4ECDC4",
            "Who participates in actuarial contexts",
            &[
                "Person",
                "Organization",
                "Actuary",
                "Insurer",
                "Insured",
                "Regulator",
                "Risk Subject",
            ],
        ),
        bucket(
            "Risk Concepts",
            "#9B59B6",
            "COVER risk facets and classifications",
            &[
                "Risk",
                "Quantitative Risk",
                "Risk Experience",
                "Risk Assessment",
                "Threat Event",
                "Loss Event",
            ],
        ),
        bucket(
            "Insurance",
            "#E91E63",
            "Insurance products and contracts",
            &[
                "Insurance Policy",
                "Claim",
                "Coverage",
                "Reserve",
                "Premium",
                "Deductible",
            ],
        ),
        bucket(
            "Financial",
            "#3498DB",
            "Financial instruments and metrics",
            &[
                "Asset",
                "Liability",
                "Capital",
                "Loss",
                "Financial Measurement",
                "Reserve",
            ],
        ),
        bucket(
            "Actuarial Practice",
            "#F39C12",
            "Activities, models, and standards",
            &[
                "Pricing",
                "Reserving",
                "Valuation",
                "Actuarial Model",
                "Actuarial Communication",
                "Risk Assessment",
            ],
        ),
    ]
}

fn actuarial_arrows() -> Vec<BucketArrow> {
    let arrow = |from: &str, to: &str, label: &str| BucketArrow {
        from: from.to_string(),
        to: to.to_string(),
        label: label.to_string(),
    };
    vec![
        arrow("Agents & Roles", "Risk Concepts", "exposed to"),
        arrow("Agents & Roles", "Insurance", "holds"),
        arrow("Risk Concepts", "Insurance", "covered by"),
        arrow("Insurance", "Financial", "backed by"),
        arrow("Actuarial Practice", "Risk Concepts", "assesses"),
        arrow("Actuarial Practice", "Insurance", "prices"),
    ]
}

fn actuarial_standards() -> Vec<Standard> {
    let standard = |name: &str, description: &str, color: &str| Standard {
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    };
    vec![
        standard(
            "UFO",
            "Unified Foundational Ontology - ontological categories",
            "#FF6B6B",
        ),
        standard(
            "COVER",
            "Common Ontology of Value and Risk - risk facets",
            "#9B59B6",
        ),
        standard(
            "ASOPs",
            "Actuarial Standards of Practice - professional standards",
            "#F39C12",
        ),
    ]
}

/// The heuristic chain for the full-graph view. Order is significant:
/// the root check runs first, then the category annotations, then the
/// keyword rules with "Risk" ahead of "Insurance" so risk terms are not
/// swallowed by the broader insurance vocabulary.
fn actuarial_rules() -> Vec<ColorRule> {
    let contains = |keywords: &[&str], color: &str| ColorRule {
        matcher: RuleMatcher::LabelContains(keywords.iter().map(|k| (*k).to_string()).collect()),
        color: Rgb::from_hex(color),
    };
    vec![
        ColorRule {
            matcher: RuleMatcher::IsRoot,
            color: Rgb::from_hex("#FF6B6B"),
        },
        ColorRule {
            matcher: RuleMatcher::UfoCategory("kind".to_string()),
            color: Rgb::from_hex("#FF6B6B"),
        },
        ColorRule {
            matcher: RuleMatcher::UfoCategory("role".to_string()),
            color: Rgb::from_hex("#4ECDC4"),
        },
        ColorRule {
            matcher: RuleMatcher::UfoCategory("phase".to_string()),
            color: Rgb::from_hex("#9B59B6"),
        },
        ColorRule {
            matcher: RuleMatcher::UfoCategory("moment".to_string()),
            color: Rgb::from_hex("#3498DB"),
        },
        contains(&["Risk", "Threat", "Hazard", "Peril"], "#9B59B6"),
        contains(
            &["Insurance", "Policy", "Claim", "Coverage", "Premium", "Deductible"],
            "#E91E63",
        ),
        contains(
            &["Asset", "Liability", "Capital", "Reserve", "Financial", "Loss"],
            "#3498DB",
        ),
        contains(
            &["Pricing", "Reserving", "Valuation", "Model", "Communication"],
            "#F39C12",
        ),
        contains(
            &["Person", "Organization", "Actuary", "Insurer", "Insured", "Regulator"],
            "#4ECDC4",
        ),
    ]
}
