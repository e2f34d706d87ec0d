// src/style/mod.rs
//
// The tag-based styling collaborator: translates inline markup like
// `<error>boom</error>` or `<fg=green;options=bold>ok</>` into ANSI escape
// codes. The dispatch core only ever calls `colorize`.

pub mod color;
mod stack;

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

pub use self::color::Color;
use self::stack::StyleStack;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<(([a-z][^<>]*)|/([a-z][^<>]*)?)>").unwrap();
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StyleError {
    #[error("incorrectly nested style tag found")]
    IncorrectNesting,
}

/// Text attributes accepted in the `options=` part of a style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOption {
    Bold,
    Dark,
    Italic,
    Underscore,
    Blink,
    Reverse,
    Conceal,
}

impl StyleOption {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "dark" => Some(Self::Dark),
            "italic" => Some(Self::Italic),
            "underscore" | "underline" => Some(Self::Underscore),
            "blink" => Some(Self::Blink),
            "reverse" => Some(Self::Reverse),
            "conceal" => Some(Self::Conceal),
            _ => None,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Bold => "1",
            Self::Dark => "2",
            Self::Italic => "3",
            Self::Underscore => "4",
            Self::Blink => "5",
            Self::Reverse => "7",
            Self::Conceal => "8",
        }
    }
}

/// A terminal style: optional foreground and background colors plus text
/// options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    options: Vec<StyleOption>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    /// Sets the background color.
    pub fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn option(mut self, option: StyleOption) -> Self {
        self.options.push(option);
        self
    }

    /// Wraps `text` in the escape codes for this style. A style with nothing
    /// set leaves the text untouched.
    fn apply(&self, text: &str) -> String {
        let mut codes: Vec<&'static str> = Vec::new();
        if let Some(fg) = self.fg {
            codes.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.bg_code());
        }
        for option in &self.options {
            codes.push(option.code());
        }
        if codes.is_empty() {
            return text.to_string();
        }
        format!("\x1b[{}m{text}\x1b[0m", codes.join(";"))
    }

    /// Parses the inline form `fg=green;bg=blue;options=bold,underscore`.
    fn parse_inline(spec: &str) -> Option<Self> {
        if !spec.contains('=') {
            return None;
        }
        let mut style = Self::new();
        for part in spec.split(';') {
            let (key, value) = part.split_once('=')?;
            match key.trim() {
                "fg" => style.fg = Some(color::parse_color_name(value.trim())?),
                "bg" => style.bg = Some(color::parse_color_name(value.trim())?),
                "options" => {
                    for name in value.split(',') {
                        style.options.push(StyleOption::parse(name.trim())?);
                    }
                }
                _ => return None,
            }
        }
        Some(style)
    }
}

/// A registry of named styles plus the colorization switch.
///
/// `colorize` consumes style tags either way; with colorization off the tags
/// are stripped and no escape codes are emitted.
#[derive(Debug, Clone)]
pub struct Styler {
    styles: HashMap<String, Style>,
    colorized: bool,
}

impl Styler {
    /// The conventional registry, colorized when the terminal supports it.
    pub fn new() -> Self {
        Self::colorized(colored::control::SHOULD_COLORIZE.should_colorize())
    }

    pub fn colorized(enabled: bool) -> Self {
        let mut styles = HashMap::new();
        styles.insert("error".to_string(), Style::fg(Color::White).on(Color::Red));
        styles.insert("info".to_string(), Style::fg(Color::Green));
        styles.insert("comment".to_string(), Style::fg(Color::Yellow));
        styles.insert("question".to_string(), Style::fg(Color::Black).on(Color::Cyan));
        Self {
            styles,
            colorized: enabled,
        }
    }

    /// A styler that strips tags without emitting escape codes.
    pub fn plain() -> Self {
        Self::colorized(false)
    }

    pub fn add_style(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    pub fn remove_style(&mut self, name: &str) {
        self.styles.remove(name);
    }

    pub fn set_colorized(&mut self, enabled: bool) {
        self.colorized = enabled;
    }

    /// Translates style markup in `text` into escape codes.
    ///
    /// Unknown tags pass through verbatim, so help text like
    /// `<command> [args]` is left alone. Closing a style that was never
    /// opened is an `IncorrectNesting` error.
    pub fn colorize(&self, text: &str) -> Result<String, StyleError> {
        let mut out = String::with_capacity(text.len());
        let mut stack = StyleStack::new();
        let mut last = 0;

        for caps in TAG_RE.captures_iter(text) {
            let Some(tag) = caps.get(0) else { continue };
            self.write_segment(&mut out, stack.current(), text.get(last..tag.start()));
            last = tag.end();

            let inner = caps.get(1).map_or("", |m| m.as_str());
            if let Some(spec) = inner.strip_prefix('/') {
                if spec.is_empty() {
                    stack.pop_top();
                } else if let Some(style) = self.resolve(spec) {
                    stack.pop_matching(&style)?;
                } else {
                    self.write_segment(&mut out, stack.current(), Some(tag.as_str()));
                }
            } else if let Some(style) = self.resolve(inner) {
                stack.push(style);
            } else {
                self.write_segment(&mut out, stack.current(), Some(tag.as_str()));
            }
        }

        self.write_segment(&mut out, stack.current(), text.get(last..));
        Ok(out)
    }

    fn resolve(&self, spec: &str) -> Option<Style> {
        if let Some(style) = self.styles.get(spec) {
            return Some(style.clone());
        }
        Style::parse_inline(spec)
    }

    fn write_segment(&self, out: &mut String, style: Option<&Style>, segment: Option<&str>) {
        let Some(segment) = segment else { return };
        if segment.is_empty() {
            return;
        }
        match style {
            Some(style) if self.colorized => out.push_str(&style.apply(segment)),
            _ => out.push_str(segment),
        }
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref DEFAULT_STYLER: RwLock<Styler> = RwLock::new(Styler::new());
}

/// A copy of the process-wide styler, as configured at this moment.
pub fn snapshot() -> Styler {
    DEFAULT_STYLER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Colorizes with the process-wide styler.
pub fn colorize(text: &str) -> Result<String, StyleError> {
    snapshot().colorize(text)
}

/// Registers a named style on the process-wide styler.
pub fn add_style(name: &str, style: Style) {
    DEFAULT_STYLER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .add_style(name, style);
}

pub fn remove_style(name: &str) {
    DEFAULT_STYLER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove_style(name);
}

/// Enables or disables colors process-wide.
pub fn with_colors(enabled: bool) {
    DEFAULT_STYLER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set_colorized(enabled);
}
