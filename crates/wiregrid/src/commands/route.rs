use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use wiregrid::layout::{route_layout, Layout, RouteOutcome};
use wiregrid::serialize::path_data;
use wiregrid::RouteOptions;

pub fn run(
    file: &Path,
    json: bool,
    corner_radius: f64,
    relaxed: bool,
    quiet: bool,
) -> Result<()> {
    let layout = Layout::load(file)?;
    layout.validate()?;

    let options = RouteOptions {
        allow_relaxed_constraints: relaxed,
        ..RouteOptions::default()
    };
    let output = route_layout(&layout, &options, corner_radius)?;

    if json {
        print_json(&output)?;
    } else {
        print_plain(&output, quiet);
    }

    Ok(())
}

fn print_plain(output: &wiregrid::layout::LayoutOutput, quiet: bool) {
    for (wire, outcome) in &output.results {
        match outcome {
            RouteOutcome::Routed { result, commands } => {
                println!("{}  {}", wire.id.bold(), path_data(commands));
                if !quiet {
                    println!(
                        "    {} length {}, {} bend{}",
                        "·".dimmed(),
                        result.length,
                        result.bends,
                        if result.bends == 1 { "" } else { "s" }
                    );
                }
            }
            RouteOutcome::Failed { warning } => {
                eprintln!("{} {}: {}", "warning:".yellow().bold(), wire.id, warning);
            }
        }
    }

    if !quiet {
        let routed = output.routed_count();
        let total = output.results.len();
        if routed == total {
            println!("{} {routed}/{total} wires routed", "ok:".green().bold());
        } else {
            println!(
                "{} {routed}/{total} wires routed",
                "done:".yellow().bold()
            );
        }
    }
}

fn print_json(output: &wiregrid::layout::LayoutOutput) -> Result<()> {
    let wires: Vec<serde_json::Value> = output
        .results
        .iter()
        .map(|(wire, outcome)| match outcome {
            RouteOutcome::Routed { result, commands } => serde_json::json!({
                "id": wire.id,
                "color": wire.color,
                "status": "routed",
                "length": result.length,
                "bends": result.bends,
                "path": result.path,
                "path_data": path_data(commands),
            }),
            RouteOutcome::Failed { warning } => serde_json::json!({
                "id": wire.id,
                "color": wire.color,
                "status": "failed",
                "warning": warning,
            }),
        })
        .collect();

    let report = serde_json::json!({
        "routed": output.routed_count(),
        "total": output.results.len(),
        "wires": wires,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
