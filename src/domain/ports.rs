use crate::domain::model::{DemoKind, DemoReport};
use crate::utils::error::Result;

/// Line-oriented terminal.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Writes `text` without a newline and flushes, so it is visible before a read.
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// Reads one line with its terminator stripped. `None` on end of stream.
    fn read_line(&mut self) -> Result<Option<String>>;
}

pub trait Demo {
    fn kind(&self) -> DemoKind;

    /// Runs the program to completion, echoing every output line into the report.
    fn run(&self, console: &mut dyn Console) -> Result<DemoReport>;
}
