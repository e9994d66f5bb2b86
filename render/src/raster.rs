//! Raster renderers (plotters bitmap backend).
//!
//! Two charts: the domain-summary grid (curated buckets, concept pills,
//! curated arrows, standards legend, stats line) and the full-graph view
//! (one circle per class, hierarchy and relationship edges). The DejaVu
//! faces are embedded and registered with the `ab_glyph` font backend, so
//! charts render identically on machines with no fonts installed.

use std::path::Path;
use std::sync::Once;

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{register_font, FontDesc, FontFamily, FontStyle};

use crate::layout::{concept_slots, grid_regions, Region, MAX_CONCEPTS_PER_BUCKET};
use crate::model::{Rgb, VisualModel};
use crate::profile::VizProfile;
use crate::summary::Summary;

static FONT_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
static FONT_SANS_BOLD: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");
static FONTS: Once = Once::new();

/// Registers the embedded fonts with the ab_glyph backend. Idempotent.
fn ensure_fonts() {
    FONTS.call_once(|| {
        // The embedded faces are known-good; a registration failure would
        // resurface as a font error on the first text draw.
        let _ = register_font("sans-serif", FontStyle::Normal, FONT_SANS);
        let _ = register_font("sans-serif", FontStyle::Bold, FONT_SANS_BOLD);
    });
}

/// Canvas helper: converts normalized page coordinates (origin bottom-left,
/// matching the layout module) to pixel coordinates (origin top-left).
struct Canvas {
    width: u32,
    height: u32,
    dpi: u32,
}

impl Canvas {
    fn px(&self, p: (f64, f64)) -> (i32, i32) {
        (
            (p.0 * f64::from(self.width)) as i32,
            ((1.0 - p.1) * f64::from(self.height)) as i32,
        )
    }

    /// Font size in pixels for a point size at this canvas's DPI.
    fn pt(&self, size: f64) -> f64 {
        size * f64::from(self.dpi) / 72.0
    }
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn hex(color: &str) -> RGBColor {
    rgb(Rgb::from_hex(color))
}

/// Renders the domain-summary chart. The page is 20×14 inches at the given
/// DPI.
///
/// # Errors
///
/// Returns an error if the bitmap cannot be drawn or written. On failure
/// partway through, the output file may be absent or truncated; no partial
/// recovery is attempted.
pub fn render_domain_chart(
    profile: &VizProfile,
    summary: &Summary,
    path: &Path,
    dpi: u32,
) -> Result<()> {
    ensure_fonts();
    let canvas = Canvas {
        width: 20 * dpi,
        height: 14 * dpi,
        dpi,
    };
    let root = BitMapBackend::new(path, (canvas.width, canvas.height)).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("Cannot draw chart background: {}", path.display()))?;

    draw_heading(&root, &canvas, profile).map_err(stringify_draw_error)?;
    draw_buckets(&root, &canvas, profile).map_err(stringify_draw_error)?;
    draw_arrows(&root, &canvas, profile).map_err(stringify_draw_error)?;
    draw_legend(&root, &canvas, profile).map_err(stringify_draw_error)?;

    let stats = format!(
        "{} Classes  \u{2022}  {} Relationships  \u{2022}  {} Parent Classes",
        summary.classes, summary.object_properties, summary.parent_classes
    );
    draw_text(
        &root,
        &canvas,
        &stats,
        (0.5, 0.02),
        canvas.pt(12.0),
        FontStyle::Normal,
        RGBColor(0x88, 0x88, 0x88),
        (HPos::Center, VPos::Bottom),
    )
    .map_err(stringify_draw_error)?;

    root.present()
        .with_context(|| format!("Cannot write chart: {}", path.display()))?;
    Ok(())
}

/// Renders the full-graph view from a prebuilt visual model. The page is
/// 16×12 inches at the given DPI.
///
/// # Errors
///
/// Returns an error if the bitmap cannot be drawn or written.
pub fn render_full_graph(model: &VisualModel, title: &str, path: &Path, dpi: u32) -> Result<()> {
    ensure_fonts();
    let canvas = Canvas {
        width: 16 * dpi,
        height: 12 * dpi,
        dpi,
    };
    let root = BitMapBackend::new(path, (canvas.width, canvas.height)).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("Cannot draw chart background: {}", path.display()))?;

    draw_text(
        &root,
        &canvas,
        title,
        (0.5, 0.97),
        canvas.pt(22.0),
        FontStyle::Bold,
        BLACK,
        (HPos::Center, VPos::Center),
    )
    .map_err(stringify_draw_error)?;

    // Edges underneath the nodes
    for edge in &model.edges {
        let (Some(from), Some(to)) = (model.position_of(&edge.from), model.position_of(&edge.to))
        else {
            continue;
        };
        draw_arrow(
            &root,
            &canvas,
            from,
            to,
            0.0,
            RGBColor(0x99, 0x99, 0x99).mix(0.6),
        )
        .map_err(stringify_draw_error)?;
        if let Some(label) = &edge.label {
            let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
            draw_text(
                &root,
                &canvas,
                label,
                mid,
                canvas.pt(8.0),
                FontStyle::Normal,
                RGBColor(0x66, 0x66, 0x66),
                (HPos::Center, VPos::Center),
            )
            .map_err(stringify_draw_error)?;
        }
    }

    let radius = (0.010 * f64::from(canvas.width)) as i32;
    for node in &model.nodes {
        let center = canvas.px(node.pos);
        root.draw(&Circle::new(center, radius, rgb(node.color).filled()))
            .map_err(stringify_draw_error)?;
        root.draw(&Circle::new(center, radius, BLACK.stroke_width(1)))
            .map_err(stringify_draw_error)?;
        draw_text(
            &root,
            &canvas,
            &node.label,
            (node.pos.0, node.pos.1 - 0.018),
            canvas.pt(9.0),
            FontStyle::Normal,
            RGBColor(0x22, 0x22, 0x22),
            (HPos::Center, VPos::Top),
        )
        .map_err(stringify_draw_error)?;
    }

    root.present()
        .with_context(|| format!("Cannot write chart: {}", path.display()))?;
    Ok(())
}

type Area<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;
type DrawResult = std::result::Result<(), String>;

/// Plotters draw errors borrow the backend; flattening them to strings
/// keeps the drawing helpers free of backend lifetimes.
fn stringify_draw_error<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("chart drawing failed: {err}")
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    root: &Area<'_>,
    canvas: &Canvas,
    text: &str,
    at: (f64, f64),
    size: f64,
    style: FontStyle,
    color: RGBColor,
    anchor: (HPos, VPos),
) -> DrawResult {
    let font = FontDesc::new(FontFamily::SansSerif, size, style);
    let text_style = TextStyle::from(font)
        .color(&color)
        .pos(Pos::new(anchor.0, anchor.1));
    root.draw(&Text::new(text.to_string(), canvas.px(at), text_style))
        .map_err(|e| e.to_string())
}

fn draw_heading(root: &Area<'_>, canvas: &Canvas, profile: &VizProfile) -> DrawResult {
    draw_text(
        root,
        canvas,
        &profile.title,
        (0.5, 0.975),
        canvas.pt(32.0),
        FontStyle::Bold,
        BLACK,
        (HPos::Center, VPos::Center),
    )?;
    draw_text(
        root,
        canvas,
        &profile.subtitle,
        (0.5, 0.945),
        canvas.pt(16.0),
        FontStyle::Normal,
        RGBColor(0x55, 0x55, 0x55),
        (HPos::Center, VPos::Center),
    )
}

fn draw_buckets(root: &Area<'_>, canvas: &Canvas, profile: &VizProfile) -> DrawResult {
    let regions = grid_regions();
    for (bucket, region) in profile.buckets.iter().zip(regions.iter()) {
        let color = hex(&bucket.color);
        let top_left = canvas.px((region.x, region.y + region.h));
        let bottom_right = canvas.px((region.x + region.w, region.y));

        root.draw(&Rectangle::new(
            [top_left, bottom_right],
            color.mix(0.15).filled(),
        ))
        .map_err(|e| e.to_string())?;
        root.draw(&Rectangle::new(
            [top_left, bottom_right],
            color.stroke_width(3),
        ))
        .map_err(|e| e.to_string())?;

        let center_x = region.x + region.w / 2.0;
        draw_text(
            root,
            canvas,
            &bucket.name,
            (center_x, region.y + region.h - 0.02),
            canvas.pt(18.0),
            FontStyle::Bold,
            color,
            (HPos::Center, VPos::Top),
        )?;
        draw_text(
            root,
            canvas,
            &bucket.description,
            (center_x, region.y + region.h - 0.05),
            canvas.pt(11.0),
            FontStyle::Normal,
            RGBColor(0x66, 0x66, 0x66),
            (HPos::Center, VPos::Top),
        )?;

        let shown = bucket.concepts.len().min(MAX_CONCEPTS_PER_BUCKET);
        for (concept, slot_y) in bucket.concepts.iter().zip(concept_slots(*region, shown)) {
            draw_concept_pill(root, canvas, *region, concept, slot_y, color)?;
        }
    }
    Ok(())
}

fn draw_concept_pill(
    root: &Area<'_>,
    canvas: &Canvas,
    region: Region,
    concept: &str,
    slot_y: f64,
    color: RGBColor,
) -> DrawResult {
    let top_left = canvas.px((region.x + 0.02, slot_y + 0.014));
    let bottom_right = canvas.px((region.x + region.w - 0.02, slot_y - 0.014));
    root.draw(&Rectangle::new([top_left, bottom_right], WHITE.filled()))
        .map_err(|e| e.to_string())?;
    root.draw(&Rectangle::new(
        [top_left, bottom_right],
        color.stroke_width(2),
    ))
    .map_err(|e| e.to_string())?;
    draw_text(
        root,
        canvas,
        concept,
        (region.x + region.w / 2.0, slot_y),
        canvas.pt(12.0),
        FontStyle::Normal,
        RGBColor(0x22, 0x22, 0x22),
        (HPos::Center, VPos::Center),
    )
}

fn draw_arrows(root: &Area<'_>, canvas: &Canvas, profile: &VizProfile) -> DrawResult {
    let regions = grid_regions();
    let center_of = |name: &str| {
        profile
            .buckets
            .iter()
            .position(|bucket| bucket.name == name)
            .and_then(|i| regions.get(i))
            .map(Region::center)
    };
    for arrow in &profile.arrows {
        let (Some(from), Some(to)) = (center_of(&arrow.from), center_of(&arrow.to)) else {
            continue;
        };
        draw_arrow(
            root,
            canvas,
            from,
            to,
            0.2,
            RGBColor(0x99, 0x99, 0x99).mix(0.4),
        )?;
        let mid = curve_point(from, to, 0.2, 0.5);
        draw_text(
            root,
            canvas,
            &arrow.label,
            mid,
            canvas.pt(9.0),
            FontStyle::Normal,
            RGBColor(0x66, 0x66, 0x66),
            (HPos::Center, VPos::Center),
        )?;
    }
    Ok(())
}

/// A point on the quadratic arc between two anchors; `bend` displaces the
/// control point perpendicular to the chord, `t` runs 0..1.
fn curve_point(from: (f64, f64), to: (f64, f64), bend: f64, t: f64) -> (f64, f64) {
    let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let control = (mid.0 - dy * bend, mid.1 + dx * bend);
    let u = 1.0 - t;
    (
        u * u * from.0 + 2.0 * u * t * control.0 + t * t * to.0,
        u * u * from.1 + 2.0 * u * t * control.1 + t * t * to.1,
    )
}

fn draw_arrow(
    root: &Area<'_>,
    canvas: &Canvas,
    from: (f64, f64),
    to: (f64, f64),
    bend: f64,
    color: RGBAColor,
) -> DrawResult {
    const SEGMENTS: usize = 24;
    let points: Vec<(i32, i32)> = (0..=SEGMENTS)
        .map(|i| canvas.px(curve_point(from, to, bend, i as f64 / SEGMENTS as f64)))
        .collect();
    root.draw(&PathElement::new(points.clone(), color.stroke_width(2)))
        .map_err(|e| e.to_string())?;

    // Arrowhead from the final segment's direction
    let tip = points[SEGMENTS];
    let back = points[SEGMENTS - 1];
    let (dx, dy) = (
        f64::from(tip.0 - back.0),
        f64::from(tip.1 - back.1),
    );
    let length = (dx * dx + dy * dy).sqrt().max(1e-6);
    let (ux, uy) = (dx / length, dy / length);
    let size = 0.008 * f64::from(canvas.width);
    let left = (
        (f64::from(tip.0) - ux * size - uy * size * 0.5) as i32,
        (f64::from(tip.1) - uy * size + ux * size * 0.5) as i32,
    );
    let right = (
        (f64::from(tip.0) - ux * size + uy * size * 0.5) as i32,
        (f64::from(tip.1) - uy * size - ux * size * 0.5) as i32,
    );
    root.draw(&Polygon::new(vec![tip, left, right], color.filled()))
        .map_err(|e| e.to_string())
}

fn draw_legend(root: &Area<'_>, canvas: &Canvas, profile: &VizProfile) -> DrawResult {
    draw_text(
        root,
        canvas,
        "Alignment & Standards",
        (0.5, 0.12),
        canvas.pt(14.0),
        FontStyle::Bold,
        RGBColor(0x33, 0x33, 0x33),
        (HPos::Center, VPos::Top),
    )?;
    for (i, standard) in profile.standards.iter().enumerate() {
        let line = format!("\u{2022} {}: {}", standard.name, standard.description);
        draw_text(
            root,
            canvas,
            &line,
            (0.5, 0.12 - 0.04 - i as f64 * 0.03),
            canvas.pt(11.0),
            FontStyle::Normal,
            RGBColor(0x55, 0x55, 0x55),
            (HPos::Center, VPos::Top),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use ontoviz_ontology::{
        extract_relationships, object_property_count, ClassHierarchy, TripleStore,
    };

    use crate::layout::layout_full_graph;

    const SMALL: &str = r#"
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix ao: <http://actuarialnotes.com/ontology/actuarial#> .

        ao:Risk a owl:Class ; rdfs:label "Risk" .
        ao:QuantRisk a owl:Class ; rdfs:label "Quantitative Risk" ;
            rdfs:subClassOf ao:Risk .
    "#;

    #[test]
    fn domain_chart_writes_a_png() {
        let store = TripleStore::parse(SMALL).unwrap();
        let hierarchy = ClassHierarchy::extract(&store);
        let relationships = extract_relationships(&store);
        let profile = VizProfile::actuarial();
        let summary = Summary::derive(
            &hierarchy,
            &relationships,
            object_property_count(&store),
            &BTreeSet::new(),
            &profile,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        render_domain_chart(&profile, &summary, &path, 30).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn full_graph_chart_writes_a_png() {
        let store = TripleStore::parse(SMALL).unwrap();
        let hierarchy = ClassHierarchy::extract(&store);
        let relationships = extract_relationships(&store);
        let profile = VizProfile::actuarial();
        let model = layout_full_graph(&store, &hierarchy, &relationships, &profile, 42);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");
        render_full_graph(&model, "Class Graph", &path, 30).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn curve_endpoints_are_fixed() {
        let from = (0.1, 0.2);
        let to = (0.8, 0.6);
        assert_eq!(curve_point(from, to, 0.2, 0.0), from);
        let end = curve_point(from, to, 0.2, 1.0);
        assert!((end.0 - to.0).abs() < 1e-12 && (end.1 - to.1).abs() < 1e-12);
    }
}
