// src/system/prompt.rs

use anyhow::Result;
use dialoguer::{Input, theme::ColorfulTheme};

/// Answers treated as "yes" by [`confirm`].
pub const YES_CHOICES: &[&str] = &["y", "yes", "t", "true", "on", "1"];

/// Answers treated as "no" by [`confirm`].
pub const NO_CHOICES: &[&str] = &["n", "no", "f", "false", "off", "0"];

/// Asks a question and returns the answer, re-prompting on empty input
/// unless a default is provided.
pub fn ask(question: &str, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(question);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

/// Asks a yes/no question until the answer matches one of the accepted
/// choice sets, returning the default on an empty answer.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    let fallback = if default { "y" } else { "n" };
    loop {
        let answer = ask(&format!("{question} [{hint}]"), Some(fallback))?;
        if let Some(value) = parse_answer(&answer) {
            return Ok(value);
        }
    }
}

/// Classifies a textual yes/no answer, case-insensitively.
pub fn parse_answer(answer: &str) -> Option<bool> {
    let normalized = answer.trim().to_lowercase();
    if YES_CHOICES.contains(&normalized.as_str()) {
        return Some(true);
    }
    if NO_CHOICES.contains(&normalized.as_str()) {
        return Some(false);
    }
    None
}
