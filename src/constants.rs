// src/constants.rs

/// The reserved option name that short-circuits dispatch into help rendering.
pub const HELP_OPT: &str = "help";

/// Names starting with this prefix are hidden from help listings.
/// They stay invocable and can still be described with `--help`.
pub const PRIVATE_PREFIX: &str = "_";

/// Prefix that turns a bare flag into an explicit `false` (`-no-color`).
pub const NEGATION_PREFIX: &str = "no-";

/// Indentation unit for one help nesting level.
pub const INDENT: &str = "  ";

/// Leading indentation applied to every help line.
pub const INITIAL_INDENT: &str = " ";
