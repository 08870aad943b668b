pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::DemoKind;
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Stream program output as the program runs
    Text,
    /// Print the run report as JSON when the program finishes
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "demo-programs")]
#[command(about = "Debugger walkthrough and hello-world console demos")]
pub struct CliConfig {
    /// Which demo to run
    #[arg(value_enum)]
    pub program: DemoKind,

    /// Optional TOML file overriding the demo inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Answer the name prompt with this text instead of reading stdin
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
