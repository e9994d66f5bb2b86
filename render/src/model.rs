//! Renderable visual-model types.
//!
//! Positions are normalized to the unit square; renderers scale them to
//! their own surface. The model is ephemeral, rebuilt on every run and never
//! persisted.

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Parses a `#rrggbb` hex string; malformed input falls back to the
    /// neutral gray used for unclassified nodes.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() == 6 {
            if let Ok(value) = u32::from_str_radix(digits, 16) {
                return Self {
                    r: ((value >> 16) & 0xff) as u8,
                    g: ((value >> 8) & 0xff) as u8,
                    b: (value & 0xff) as u8,
                };
            }
        }
        Self::NEUTRAL
    }

    /// The neutral gray assigned to nodes no rule matches.
    pub const NEUTRAL: Self = Self {
        r: 0xbd,
        g: 0xc3,
        b: 0xc7,
    };
}

/// A positioned, colored node.
#[derive(Debug, Clone)]
pub struct NodeVisual {
    /// Entity IRI.
    pub id: String,
    /// Resolved display label.
    pub label: String,
    /// Position in the unit square.
    pub pos: (f64, f64),
    /// Fill color from the classifier.
    pub color: Rgb,
}

/// An edge between two nodes, optionally labeled.
#[derive(Debug, Clone)]
pub struct EdgeVisual {
    /// Source node IRI.
    pub from: String,
    /// Target node IRI.
    pub to: String,
    /// Label drawn at the edge midpoint; `None` for plain hierarchy edges.
    pub label: Option<String>,
}

/// The complete layout the full-graph renderer consumes.
#[derive(Debug, Default)]
pub struct VisualModel {
    /// All positioned nodes.
    pub nodes: Vec<NodeVisual>,
    /// All edges, referring to nodes by IRI.
    pub edges: Vec<EdgeVisual>,
}

impl VisualModel {
    /// Looks up a node position by IRI.
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<(f64, f64)> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.pos)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_round_trips_channels() {
        let c = Rgb::from_hex("#FF6B6B");
        assert_eq!((c.r, c.g, c.b), (0xff, 0x6b, 0x6b));
    }

    #[test]
    fn malformed_hex_falls_back_to_neutral() {
        assert_eq!(Rgb::from_hex("#xyz"), Rgb::NEUTRAL);
        assert_eq!(Rgb::from_hex(""), Rgb::NEUTRAL);
    }
}
