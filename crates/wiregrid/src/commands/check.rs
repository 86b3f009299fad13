use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use wiregrid::layout::Layout;

pub fn run(file: &Path, quiet: bool) -> Result<()> {
    let layout = Layout::load(file)?;
    layout.validate()?;

    // Structural validation passed; flag dangling terminal references too.
    let mut dangling = 0;
    for wire in &layout.wires {
        for terminal in [&wire.from, &wire.to] {
            if !layout
                .components
                .iter()
                .any(|c| c.id == terminal.component)
            {
                eprintln!(
                    "{} wire '{}' references unknown component '{}'",
                    "warning:".yellow().bold(),
                    wire.id,
                    terminal.component
                );
                dangling += 1;
            }
        }
    }

    if !quiet {
        println!(
            "{} {} components, {} wires{}",
            "ok:".green().bold(),
            layout.components.len(),
            layout.wires.len(),
            if dangling > 0 {
                format!(" ({dangling} dangling terminal references)")
            } else {
                String::new()
            }
        );
    }
    Ok(())
}
