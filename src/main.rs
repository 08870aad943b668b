use clap::Parser;
use demo_programs::utils::{logger, validation::Validate};
use demo_programs::{
    CliConfig, DebugDemo, Demo, DemoConfig, DemoKind, DemoRunner, HelloDemo, OutputFormat,
    Result, ScriptedConsole, StdConsole,
};
use std::io::{BufRead, Cursor};

fn input_source(config: &CliConfig) -> Box<dyn BufRead> {
    match &config.input {
        Some(text) => Box::new(Cursor::new(text.clone().into_bytes())),
        None => Box::new(std::io::stdin().lock()),
    }
}

fn execute<D: Demo>(demo: D, config: &CliConfig) -> Result<()> {
    let runner = DemoRunner::new(demo);
    let input = input_source(config);

    match config.format {
        OutputFormat::Text => {
            runner.run(&mut StdConsole::from_reader(input))?;
        }
        OutputFormat::Json => {
            let report = runner.run(&mut ScriptedConsole::from_reader(input))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            DemoConfig::from_file(path)
        }
        None => Ok(DemoConfig::default()),
    };

    // 驗證配置
    let settings = match settings.and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let result = match config.program {
        DemoKind::Debug => execute(DebugDemo::new(settings.debug), &config),
        DemoKind::Hello => execute(HelloDemo::new(settings.hello), &config),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
