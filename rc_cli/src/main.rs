//! # Secao CLI Application
//!
//! Reads reinforced-concrete sections from a JSON file, designs them and
//! prints a report per section. Without a file it runs a demo section.
//!
//! ```text
//! rc_cli sections.json          # human-readable report
//! rc_cli sections.json --json   # reports as JSON (for scripts/LLM use)
//! RUST_LOG=rc_core=debug rc_cli # show regime selection
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rc_core::calculations::{evaluate_batch, Eccentricity, ReinforcementCase, SectionInput, SectionReport};
use rc_core::reinforcement::{Reinforcement, ReinforcementArrangement, ReinforcementLayer};
use rc_core::{CalcResult, Loads, MaterialProperties, Section, SectionGeometry};
use serde::Deserialize;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "rc_cli",
    about = "Reinforced concrete section design (NBR 6118): required steel and crack width",
    version
)]
struct Cli {
    /// JSON file holding one section or an array of sections
    file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// A project file holds either one section or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Many(Vec<SectionInput>),
    One(Box<SectionInput>),
}

fn parse_inputs(text: &str) -> Result<Vec<SectionInput>> {
    let parsed: InputFile = serde_json::from_str(text).context("invalid section JSON")?;
    Ok(match parsed {
        InputFile::Many(inputs) => inputs,
        InputFile::One(input) => vec![*input],
    })
}

fn load_inputs(path: &Path) -> Result<Vec<SectionInput>> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_inputs(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn demo_input() -> SectionInput {
    SectionInput {
        label: "CLI-Demo".to_string(),
        section: Section::new(
            SectionGeometry::rectangle(20.0, 50.0),
            MaterialProperties {
                fck: 20.0,
                cover: 4.2,
                ..Default::default()
            },
            Loads::new(62.5, 0.0),
        ),
        reinforcement: Reinforcement {
            bottom: ReinforcementArrangement::new(0.0).with_layer(ReinforcementLayer::new(16.0, 5)),
            ..Default::default()
        },
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let inputs = match &cli.file {
        Some(path) => load_inputs(path)?,
        None => {
            info!("no input file given, running demo section");
            vec![demo_input()]
        }
    };
    info!(sections = inputs.len(), "evaluating");

    let results = evaluate_batch(&inputs);
    let failed = results.iter().filter(|r| r.is_err()).count();

    if cli.json {
        print_json(&inputs, &results)?;
    } else {
        for (input, result) in inputs.iter().zip(&results) {
            match result {
                Ok(report) => print_report(input, report),
                Err(e) => {
                    eprintln!("Error in '{}': {}", input.label, e);
                    if let Ok(json) = serde_json::to_string_pretty(e) {
                        eprintln!();
                        eprintln!("Error JSON:");
                        eprintln!("{}", json);
                    }
                }
            }
            println!();
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} sections failed", failed, inputs.len());
    }
    Ok(())
}

fn print_json(inputs: &[SectionInput], results: &[CalcResult<SectionReport>]) -> Result<()> {
    let entries: Vec<serde_json::Value> = inputs
        .iter()
        .zip(results)
        .map(|(input, result)| match result {
            Ok(report) => serde_json::to_value(report),
            Err(e) => serde_json::to_value(e)
                .map(|error| serde_json::json!({ "label": input.label, "error": error })),
        })
        .collect::<Result<_, _>>()
        .context("failed to serialize reports")?;

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn print_report(input: &SectionInput, report: &SectionReport) {
    let section = &input.section;
    let material = &section.material;
    let design = &report.design;
    let v = &design.variables;

    println!("═══════════════════════════════════════");
    println!("  SECTION {}", report.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Section:  {:.0} x {:.0} cm, cover {:.1} cm", v.b, v.h, material.cover);
    println!("  Concrete: C{:.0} (fcd = {:.3} kN/cm²)", material.fck, v.fcd);
    println!("  Steel:    fy = {:.0} MPa (fyd = {:.2} kN/cm²)", material.fy, v.fyd);
    println!(
        "  Loads:    Msk = {:.2} kN·m, Nsk = {:.2} kN (γf = {:.2})",
        section.loads.msk, section.loads.nsk, section.loads.gamma_f
    );
    println!(
        "  Bars:     bottom {}, top {}",
        input.reinforcement.bottom, input.reinforcement.top
    );
    println!(
        "  d':       bottom {:.2} cm, top {:.2} cm (d = {:.2} cm)",
        report.effective_depths.bottom, report.effective_depths.top, v.d
    );
    println!();
    println!("ULS Design:");
    println!("  Regime:   {}", regime_label(design.eccentricity, design.reinforcement));
    println!(
        "  x = {:.2} cm (x/d = {:.3}, domain {})",
        design.x,
        design.relative_depth(),
        design.domain
    );
    println!("  As     = {}", area_label(design.as_bottom));
    println!("  A's    = {}", area_label(design.as_top));
    if design.valid {
        println!("  Total  = {:.2} cm²", design.total_area());
    }
    println!("  As,min = {:.2} cm²", report.as_min);

    if let Some(crack) = &report.crack_width {
        println!();
        println!("SLS Crack Width:");
        println!(
            "  σs = {:.2} kN/cm², x_II = {:.2} cm",
            crack.intermediate.sigma_s, crack.intermediate.x
        );
        for layer in &crack.layers {
            println!(
                "  {}Φ{} ({:?}): wk1 = {:.3} mm, wk2 = {:.3} mm",
                layer.count, layer.diameter, layer.position, layer.wk1, layer.wk2
            );
        }
        println!("  wk = min({:.3}, {:.3}) = {:.3} mm", crack.wk1, crack.wk2, crack.wk);
    }

    println!();
    println!("═══════════════════════════════════════");
    match report.governing_bottom_area() {
        Some(area) => println!("  RESULT: {} As = {:.2} cm²", status_icon(true), area),
        None => println!("  RESULT: {} section too small for the loads", status_icon(false)),
    }
    println!("═══════════════════════════════════════");
}

fn regime_label(eccentricity: Eccentricity, reinforcement: ReinforcementCase) -> String {
    let eccentricity = match eccentricity {
        Eccentricity::Small => "small eccentricity",
        Eccentricity::Large => "large eccentricity",
    };
    let reinforcement = match reinforcement {
        ReinforcementCase::Simple => "single reinforcement",
        ReinforcementCase::Double => "double reinforcement",
        ReinforcementCase::FlexureTension => "flexure with tension",
    };
    format!("{}, {}", eccentricity, reinforcement)
}

fn area_label(area: Option<f64>) -> String {
    area.map(|a| format!("{:.2} cm²", a)).unwrap_or_else(|| "-".to_string())
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
