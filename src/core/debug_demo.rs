use crate::core::routines::{buggy_sum, correct_sum, count_up, factorial, find_max, space_terminated};
use crate::domain::model::{DebugSettings, DemoKind, DemoReport};
use crate::domain::ports::{Console, Demo};
use crate::utils::error::Result;

/// The program meant for stepping through in a debugger.
pub struct DebugDemo {
    settings: DebugSettings,
}

impl DebugDemo {
    pub fn new(settings: DebugSettings) -> Self {
        Self { settings }
    }

    fn emit(console: &mut dyn Console, report: &mut DemoReport, line: String) -> Result<()> {
        console.write_line(&line)?;
        report.output.push(line);
        Ok(())
    }
}

impl Default for DebugDemo {
    fn default() -> Self {
        Self::new(DebugSettings::default())
    }
}

impl Demo for DebugDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Debug
    }

    fn run(&self, console: &mut dyn Console) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.kind());
        let values = &self.settings.values;

        Self::emit(console, &mut report, "C++ Debugger Example Program".to_string())?;
        Self::emit(console, &mut report, "===========================".to_string())?;

        tracing::debug!(?values, "values initialised");
        Self::emit(
            console,
            &mut report,
            format!("Values: {}", space_terminated(values.iter())),
        )?;

        let buggy = buggy_sum(values);
        tracing::debug!(
            buggy,
            expected = correct_sum(values),
            skipped = values.first().copied(),
            "buggy sum computed"
        );
        report.record("buggy_sum", buggy);
        Self::emit(console, &mut report, format!("Buggy sum: {}", buggy))?;

        let n = self.settings.factorial_of;
        let fact = factorial(n)?;
        tracing::debug!(n, fact, "factorial computed");
        report.record("factorial", fact);
        Self::emit(console, &mut report, format!("Factorial of {}: {}", n, fact))?;

        let max = find_max(values);
        tracing::debug!(max, "maximum found");
        report.record("max", max);
        Self::emit(console, &mut report, format!("Maximum value: {}", max))?;

        let counting = space_terminated(count_up(self.settings.count_to).inspect(|i| {
            tracing::debug!(i, "counting");
        }));
        Self::emit(console, &mut report, format!("Counting: {}", counting))?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::ScriptedConsole;

    #[test]
    fn test_default_transcript() {
        let mut console = ScriptedConsole::new("");
        let report = DebugDemo::default().run(&mut console).unwrap();

        assert_eq!(
            console.output(),
            "C++ Debugger Example Program\n\
             ===========================\n\
             Values: 5 2 9 1 7 3 \n\
             Buggy sum: 22\n\
             Factorial of 5: 120\n\
             Maximum value: 9\n\
             Counting: 0 1 2 3 4 \n"
        );
        assert_eq!(report.output.len(), 7);
        assert_eq!(report.results["buggy_sum"], 22);
        assert_eq!(report.results["factorial"], 120);
        assert_eq!(report.results["max"], 9);
    }

    #[test]
    fn test_empty_values() {
        let settings = DebugSettings {
            values: vec![],
            factorial_of: 0,
            count_to: 0,
        };
        let mut console = ScriptedConsole::new("");
        let report = DebugDemo::new(settings).run(&mut console).unwrap();

        assert_eq!(report.output[2], "Values: ");
        assert_eq!(report.output[3], "Buggy sum: 0");
        assert_eq!(report.output[4], "Factorial of 0: 1");
        assert_eq!(report.output[5], "Maximum value: 0");
        assert_eq!(report.output[6], "Counting: ");
    }

    #[test]
    fn test_factorial_overflow_stops_run() {
        let settings = DebugSettings {
            factorial_of: 25,
            ..DebugSettings::default()
        };
        let mut console = ScriptedConsole::new("");
        assert!(DebugDemo::new(settings).run(&mut console).is_err());
        assert!(console.output().ends_with("Buggy sum: 22\n"));
    }
}
