// src/style/stack.rs

use super::{Style, StyleError};

/// Tracks the currently open style tags while colorizing a line.
///
/// Closing tags pop: a bare `</>` pops whatever is on top, while `</spec>`
/// must match a style somewhere on the stack — everything above it is
/// discarded with it, and a close with no match is an error.
#[derive(Debug, Default)]
pub(crate) struct StyleStack {
    styles: Vec<Style>,
}

impl StyleStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Pops the top style; an empty stack yields the empty style.
    pub(crate) fn pop_top(&mut self) -> Style {
        self.styles.pop().unwrap_or_default()
    }

    /// Pops the topmost occurrence of `style`, discarding anything stacked
    /// above it.
    pub(crate) fn pop_matching(&mut self, style: &Style) -> Result<Style, StyleError> {
        if self.styles.is_empty() {
            return Ok(Style::default());
        }
        match self.styles.iter().rposition(|stacked| stacked == style) {
            Some(position) => {
                let found = self.styles.get(position).cloned().unwrap_or_default();
                self.styles.truncate(position);
                Ok(found)
            }
            None => Err(StyleError::IncorrectNesting),
        }
    }

    /// The style applied to text at this point, if any tag is open.
    pub(crate) fn current(&self) -> Option<&Style> {
        self.styles.last()
    }
}
