pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::cli::{ScriptedConsole, StdConsole};
pub use config::toml_config::DemoConfig;
pub use core::{debug_demo::DebugDemo, hello_demo::HelloDemo, runner::DemoRunner};
pub use domain::model::{DebugSettings, DemoKind, DemoReport, HelloSettings};
pub use domain::ports::{Console, Demo};
pub use utils::error::{DemoError, Result};
