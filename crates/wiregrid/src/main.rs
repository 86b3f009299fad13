use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
