use crate::domain::model::{DemoKind, DemoReport, HelloSettings};
use crate::domain::ports::{Console, Demo};
use crate::utils::error::{DemoError, Result};

pub const NAME_PROMPT: &str = "Please enter your name: ";

/// Console walkthrough: arithmetic, a vector of strings and one line of input.
pub struct HelloDemo {
    settings: HelloSettings,
}

impl HelloDemo {
    pub fn new(settings: HelloSettings) -> Self {
        Self { settings }
    }

    fn emit(console: &mut dyn Console, report: &mut DemoReport, line: String) -> Result<()> {
        console.write_line(&line)?;
        report.output.push(line);
        Ok(())
    }

    fn arithmetic(&self) -> Result<[(char, i32); 4]> {
        let (a, b) = (self.settings.num1, self.settings.num2);
        Ok([
            ('+', apply('+', a, b)?),
            ('-', apply('-', a, b)?),
            ('*', apply('*', a, b)?),
            ('/', apply('/', a, b)?),
        ])
    }
}

/// One checked `a op b`. Division truncates toward zero.
fn apply(op: char, a: i32, b: i32) -> Result<i32> {
    let value = match op {
        '+' => a.checked_add(b),
        '-' => a.checked_sub(b),
        '*' => a.checked_mul(b),
        '/' if b == 0 => {
            return Err(DemoError::DivisionByZeroError {
                dividend: i64::from(a),
            })
        }
        // i32::MIN / -1
        '/' => a.checked_div(b),
        _ => None,
    };
    value.ok_or_else(|| DemoError::overflow(format!("{} {} {}", a, op, b)))
}

impl Default for HelloDemo {
    fn default() -> Self {
        Self::new(HelloSettings::default())
    }
}

impl Demo for HelloDemo {
    fn kind(&self) -> DemoKind {
        DemoKind::Hello
    }

    fn run(&self, console: &mut dyn Console) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.kind());

        Self::emit(console, &mut report, "Hello from the C++ Web App!".to_string())?;
        Self::emit(
            console,
            &mut report,
            "This is a test program to demonstrate functionality.".to_string(),
        )?;
        Self::emit(console, &mut report, String::new())?;

        // 先算完再輸出，避免溢位時只印出一半
        let results = self.arithmetic()?;
        Self::emit(console, &mut report, "Basic Math Operations:".to_string())?;
        for (op, value) in results {
            tracing::debug!(%op, value, "arithmetic");
            report.record(&op.to_string(), value);
            Self::emit(
                console,
                &mut report,
                format!(
                    "{} {} {} = {}",
                    self.settings.num1, op, self.settings.num2, value
                ),
            )?;
        }
        Self::emit(console, &mut report, String::new())?;

        Self::emit(console, &mut report, "Fruits in the vector:".to_string())?;
        for fruit in &self.settings.fruits {
            Self::emit(console, &mut report, format!("- {}", fruit))?;
        }

        Self::emit(console, &mut report, String::new())?;
        console.prompt(NAME_PROMPT)?;
        report.output.push(NAME_PROMPT.to_string());

        let name = console.read_line()?.unwrap_or_default();
        tracing::debug!(%name, "name read");
        report.record("name", name.clone());

        let greeting = if name.is_empty() {
            "You didn't enter a name, but that's okay!".to_string()
        } else {
            format!("Hello, {}! Thanks for trying the C++ Web App.", name)
        };
        Self::emit(console, &mut report, greeting)?;

        Ok(report)
    }
}
