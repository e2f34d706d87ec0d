// src/core/console.rs

use anyhow::Result;
use std::io::Write;

use crate::style::Styler;

/// Line-oriented output sink for dispatch and help rendering.
///
/// Every line goes through the style engine before being written, so callers
/// embed markup tags (`<error>`, `<fg=yellow>`) freely. Tests capture output
/// by handing in a buffer and a plain styler.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    styler: Styler,
}

impl<'a> Console<'a> {
    /// A console using a snapshot of the process-wide styler.
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            styler: crate::style::snapshot(),
        }
    }

    pub fn with_styler(out: &'a mut dyn Write, styler: Styler) -> Self {
        Self { out, styler }
    }

    /// Colorizes `text` and writes it followed by a newline.
    pub fn echo(&mut self, text: &str) -> Result<()> {
        let line = self.styler.colorize(text)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }
}

impl std::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_strips_tags_for_a_plain_styler() {
        let mut buf = Vec::new();
        let mut console = Console::with_styler(&mut buf, Styler::plain());
        console.echo("<fg=yellow>Usage:</>").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Usage:\n");
    }
}
