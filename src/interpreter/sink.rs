use std::io::{self, Write};

use tracing::warn;

/// Destination of `print` output.
///
/// The interpreter writes one line per executed `print` statement. Standard
/// output is the default; a `Vec<String>` collects the lines instead, which
/// is how tests and embedders observe program output.
///
/// # Example
/// ```
/// use lox::interpreter::sink::Sink;
///
/// let mut lines = Vec::new();
/// lines.write_line("hello");
///
/// assert_eq!(lines, vec!["hello".to_string()]);
/// ```
pub trait Sink {
    /// Writes `line` followed by a line break.
    fn write_line(&mut self, line: &str);
}

impl Sink for io::Stdout {
    fn write_line(&mut self, line: &str) {
        if let Err(error) = writeln!(self.lock(), "{line}") {
            warn!(%error, "failed to write program output");
        }
    }
}

impl Sink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}
