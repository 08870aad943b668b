use crate::core::{Console, Demo, DemoReport};
use crate::utils::error::Result;
use std::time::Instant;

pub struct DemoRunner<D: Demo> {
    demo: D,
}

impl<D: Demo> DemoRunner<D> {
    pub fn new(demo: D) -> Self {
        Self { demo }
    }

    pub fn run(&self, console: &mut dyn Console) -> Result<DemoReport> {
        let kind = self.demo.kind();
        let started = Instant::now();
        tracing::info!("▶️ Running {} demo", kind);

        match self.demo.run(console) {
            Ok(report) => {
                tracing::info!(
                    "✅ {} demo finished: {} lines in {:?}",
                    kind,
                    report.output.len(),
                    started.elapsed()
                );
                Ok(report)
            }
            Err(e) => {
                tracing::error!("❌ {} demo failed: {}", kind, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::ScriptedConsole;
    use crate::core::{debug_demo::DebugDemo, hello_demo::HelloDemo};
    use crate::domain::model::DemoKind;

    #[test]
    fn test_runs_both_demos() {
        let mut console = ScriptedConsole::new("");
        let report = DemoRunner::new(DebugDemo::default())
            .run(&mut console)
            .unwrap();
        assert_eq!(report.program, DemoKind::Debug);

        let mut console = ScriptedConsole::new("Grace\n");
        let report = DemoRunner::new(HelloDemo::default())
            .run(&mut console)
            .unwrap();
        assert_eq!(report.program, DemoKind::Hello);
        assert_eq!(report.results["name"], "Grace");
    }
}
