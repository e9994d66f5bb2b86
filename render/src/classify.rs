//! Domain classification.
//!
//! Two policies coexist, chosen per view:
//!
//! - the **fixed-membership** policy ([`bucket_of_label`]) used by the
//!   domain-summary views: a class belongs to the first bucket whose
//!   curated concept list literally contains its label;
//! - the **heuristic chain** ([`classify_color`]) used by the full-graph
//!   view: an ordered list of (matcher, color) rules evaluated in
//!   sequence, first match wins, neutral gray when nothing matches.
//!
//! The chain is an explicit rule list rather than nested conditionals so
//! tests can enumerate and reorder rules directly.

use crate::model::Rgb;
use crate::profile::VizProfile;

/// What a single color rule matches on.
#[derive(Debug, Clone)]
pub enum RuleMatcher {
    /// The class is in the root set (no declared parent).
    IsRoot,
    /// The class carries this `ao:ufoCategory` annotation value.
    UfoCategory(String),
    /// The label contains any of these keywords.
    LabelContains(Vec<String>),
}

/// One (matcher, color) pair in the ordered chain.
#[derive(Debug, Clone)]
pub struct ColorRule {
    /// The predicate to test.
    pub matcher: RuleMatcher,
    /// The color assigned when the predicate matches.
    pub color: Rgb,
}

/// Facts about one class, gathered by the caller, that the rules test.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassFacts<'a> {
    /// Resolved display label.
    pub label: &'a str,
    /// Whether the class is in the root set.
    pub is_root: bool,
    /// The class's `ao:ufoCategory` annotation, if any.
    pub ufo_category: Option<&'a str>,
}

/// Runs the profile's rule chain over one class; the first matching rule
/// decides the color, and unmatched classes get [`Rgb::NEUTRAL`].
#[must_use]
pub fn classify_color(profile: &VizProfile, facts: ClassFacts<'_>) -> Rgb {
    for rule in &profile.rules {
        let matched = match &rule.matcher {
            RuleMatcher::IsRoot => facts.is_root,
            RuleMatcher::UfoCategory(value) => facts.ufo_category == Some(value.as_str()),
            RuleMatcher::LabelContains(keywords) => {
                keywords.iter().any(|keyword| facts.label.contains(keyword))
            }
        };
        if matched {
            return rule.color;
        }
    }
    Rgb::NEUTRAL
}

/// Fixed-membership classification: the first bucket (in table order)
/// whose concept list literally contains the label, if any.
#[must_use]
pub fn bucket_of_label<'a>(profile: &'a VizProfile, label: &str) -> Option<&'a str> {
    profile
        .buckets
        .iter()
        .find(|bucket| bucket.concepts.iter().any(|concept| concept == label))
        .map(|bucket| bucket.name.as_str())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let profile = VizProfile::actuarial();
        // "Insurance Risk" contains both keyword sets; the Risk rule is
        // earlier in the chain and must win.
        let color = classify_color(
            &profile,
            ClassFacts {
                label: "Insurance Risk",
                ..ClassFacts::default()
            },
        );
        assert_eq!(color, Rgb::from_hex("#9B59B6"));
    }

    #[test]
    fn root_check_outranks_keywords() {
        let profile = VizProfile::actuarial();
        let color = classify_color(
            &profile,
            ClassFacts {
                label: "Risk",
                is_root: true,
                ufo_category: None,
            },
        );
        assert_eq!(color, Rgb::from_hex("#FF6B6B"));
    }

    #[test]
    fn ufo_category_outranks_keywords() {
        let profile = VizProfile::actuarial();
        let color = classify_color(
            &profile,
            ClassFacts {
                label: "Risk Subject",
                is_root: false,
                ufo_category: Some("role"),
            },
        );
        assert_eq!(color, Rgb::from_hex("#4ECDC4"));
    }

    #[test]
    fn unmatched_class_gets_neutral() {
        let profile = VizProfile::actuarial();
        let color = classify_color(
            &profile,
            ClassFacts {
                label: "Zebra",
                ..ClassFacts::default()
            },
        );
        assert_eq!(color, Rgb::NEUTRAL);
    }

    #[test]
    fn reordering_rules_changes_the_outcome() {
        let mut profile = VizProfile::actuarial();
        profile.rules.reverse();
        let color = classify_color(
            &profile,
            ClassFacts {
                label: "Insurance Risk",
                ..ClassFacts::default()
            },
        );
        // Reversed, the agents/insurance side of the chain runs first.
        assert_ne!(color, Rgb::from_hex("#9B59B6"));
    }

    #[test]
    fn fixed_membership_first_bucket_wins() {
        let profile = VizProfile::actuarial();
        // "Reserve" is listed under both Insurance and Financial; table
        // order puts Insurance first.
        assert_eq!(bucket_of_label(&profile, "Reserve"), Some("Insurance"));
        assert_eq!(bucket_of_label(&profile, "Zebra"), None);
    }
}
