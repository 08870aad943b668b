use crate::core::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, Cursor, Stdout, Write};

/// Reads one line and strips `\n` / `\r\n`. Returns `None` at end of stream.
/// Invalid UTF-8 is replaced rather than rejected.
fn read_stripped_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Real terminal output; input from stdin or any other reader.
pub struct StdConsole<R: BufRead> {
    input: R,
    stdout: Stdout,
}

impl<R: BufRead> StdConsole<R> {
    pub fn from_reader(input: R) -> Self {
        Self {
            input,
            stdout: io::stdout(),
        }
    }
}

impl<R: BufRead> Console for StdConsole<R> {
    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.stdout, "{}", text)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.stdout, "{}", text)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        read_stripped_line(&mut self.input)
    }
}

/// Captures everything written in memory. Used for `--format json` and tests.
pub struct ScriptedConsole<R: BufRead> {
    input: R,
    output: String,
}

impl ScriptedConsole<Cursor<Vec<u8>>> {
    pub fn new(input: &str) -> Self {
        Self::from_reader(Cursor::new(input.as_bytes().to_vec()))
    }
}

impl<R: BufRead> ScriptedConsole<R> {
    pub fn from_reader(input: R) -> Self {
        Self {
            input,
            output: String::new(),
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl<R: BufRead> Console for ScriptedConsole<R> {
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        read_stripped_line(&mut self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = ScriptedConsole::new("first\r\nsecond\nlast");
        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_accepts_invalid_utf8() {
        let mut console = ScriptedConsole::from_reader(Cursor::new(b"Jos\xe9\r\n".to_vec()));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Jos\u{FFFD}"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_captures_output() {
        let mut console = ScriptedConsole::new("");
        console.write_line("a").unwrap();
        console.prompt("b: ").unwrap();
        assert_eq!(console.output(), "a\nb: ");
    }
}
