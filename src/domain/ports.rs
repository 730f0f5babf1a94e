use crate::utils::error::Result;

/// Interactive terminal boundary used by the advisor cycle.
pub trait Console {
    /// Writes `text` without a trailing newline, flushes, and reads one
    /// line of input.
    fn prompt(&mut self, text: &str) -> Result<String>;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn prompt(&mut self, text: &str) -> Result<String> {
        (**self).prompt(text)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}
