//! Ontology visualization generator.
//!
//! Batch tool: loads a Turtle ontology, extracts the class hierarchy and
//! object-property relationships, and writes the domain-summary chart, the
//! full class graph, the interactive HTML explorer, and a JSON summary.
//! Each invocation is an independent run with no persisted state.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ontoviz_ontology::{
    extract_relationships, object_property_count, resolve_label, ClassHierarchy, TripleStore,
};
use ontoviz_render::{
    layout_full_graph, render_domain_chart, render_full_graph, render_html, writer, Summary,
    VizProfile,
};

/// Command-line arguments; every flag has a default, so plain `ontoviz`
/// works in a directory with the expected input file.
#[derive(Debug, Parser)]
#[command(name = "ontoviz", version, about = "Ontology visualization generator")]
struct Cli {
    /// Turtle ontology to visualize.
    #[arg(default_value = "actuarial-ontology.ttl")]
    input: PathBuf,

    /// Output path for the domain-summary chart.
    #[arg(long, default_value = "ontology_visualization.png")]
    image: PathBuf,

    /// Output path for the full class-graph chart.
    #[arg(long, default_value = "ontology_full.png")]
    graph_image: PathBuf,

    /// Output path for the interactive HTML explorer.
    #[arg(long, default_value = "ontology_interactive.html")]
    html: PathBuf,

    /// Output path for the JSON summary sidecar.
    #[arg(long, default_value = "ontology_summary.json")]
    summary: PathBuf,

    /// Raster resolution in dots per inch.
    #[arg(long, default_value_t = 150)]
    dpi: u32,

    /// Seed for the force-directed layout fallback.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", "=".repeat(60));
    println!("  Ontology Visualization Generator");
    println!("{}", "=".repeat(60));
    println!();

    println!("Loading ontology from {}...", cli.input.display());
    let store = TripleStore::load(&cli.input)?;
    println!("\u{2713} Loaded ontology with {} triples", store.len());
    println!();

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

    println!("Generating visualizations...");
    println!();

    render_domain_chart(&profile, &summary, &cli.image, cli.dpi)?;
    println!(
        "\u{2713} Domain visualization saved to {}",
        cli.image.display()
    );

    let model = layout_full_graph(&store, &hierarchy, &relationships, &profile, cli.seed);
    render_full_graph(&model, &profile.title, &cli.graph_image, cli.dpi)?;
    println!(
        "\u{2713} Class graph saved to {}",
        cli.graph_image.display()
    );

    let document = render_html(&profile, &summary, &store, &hierarchy, &relationships);
    writer::write(&cli.html, &document)?;
    println!(
        "\u{2713} Interactive HTML explorer saved to {}",
        cli.html.display()
    );

    let json = summary.to_json().context("Cannot serialize summary")?;
    writer::write(&cli.summary, &json)?;
    println!("\u{2713} Summary saved to {}", cli.summary.display());

    println!();
    println!("{}", "=".repeat(60));
    println!("  Visualization complete!");
    println!("{}", "=".repeat(60));
    println!();
    println!("Generated files:");
    println!("  1. {} - domain structure", cli.image.display());
    println!("  2. {} - full class graph", cli.graph_image.display());
    println!("  3. {} - interactive explorer", cli.html.display());
    println!("  4. {} - machine-readable summary", cli.summary.display());

    Ok(())
}
