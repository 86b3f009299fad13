use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wiregrid")]
#[command(author, version, about)]
#[command(long_about = "Grid-based orthogonal wire routing for cabinet layout diagrams.\n\n\
    Describe your cabinet in a YAML layout file and route its wires.\n\n\
    Examples:\n  \
    wiregrid cabinet.yaml                Route all wires, print path data\n  \
    wiregrid cabinet.yaml --json         Emit a JSON routing report\n  \
    wiregrid cabinet.yaml --relaxed      Retry failed routes with relaxed constraints\n  \
    wiregrid check cabinet.yaml          Validate a layout without routing")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Layout file to route
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Emit a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Corner radius for rendered geometry, in world units
    #[arg(long, default_value = "0")]
    pub corner_radius: f64,

    /// Retry failed routes ignoring wires and with reduced clearance
    #[arg(long)]
    pub relaxed: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a layout file without routing it
    Check {
        /// Layout file to validate
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        match self.command {
            Some(Commands::Check { file }) => crate::commands::check::run(&file, self.quiet),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    crate::commands::route::run(
                        &file,
                        self.json,
                        self.corner_radius,
                        self.relaxed,
                        self.quiet,
                    )
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}
