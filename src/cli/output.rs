//! Terminal output with verbosity control.

use std::io::{self, Write};

/// Writes user-facing messages to stdout/stderr.
///
/// Command results go through [`println`](Self::println) and are printed even
/// in quiet mode, so scripts can capture them.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Prints command output unconditionally.
    pub fn println(&self, message: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", message)
    }

    /// Prints a message only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose && !self.quiet {
            let mut err = io::stderr().lock();
            writeln!(err, "{}", message)?;
        }
        Ok(())
    }

    /// Prints a warning unless quiet.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            let mut err = io::stderr().lock();
            writeln!(err, "⚠ {}", message)?;
        }
        Ok(())
    }

    /// Prints a success message unless quiet.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if !self.quiet {
            let mut err = io::stderr().lock();
            writeln!(err, "✓ {}", message)?;
        }
        Ok(())
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.println(title)?;
        self.println(&"-".repeat(title.chars().count()))
    }

    /// Prints an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.println(&format!("  {}", message))
    }
}
