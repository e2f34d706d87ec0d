// src/core/parser.rs

use indexmap::IndexMap;

use crate::constants::NEGATION_PREFIX;
use crate::models::OptValue;

/// The parser's output: ordered positional tokens plus an insertion-ordered
/// mapping of option name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub positionals: Vec<String>,
    pub options: IndexMap<String, OptValue>,
}

/// Parses a raw argument vector into positionals and named options without
/// an explicit schema.
///
/// # Logic
/// - `key=value` tokens are split at the first `=`, the key acting as if it
///   had appeared as its own preceding token.
/// - A token is a flag iff it starts with `-` and is not a bare negative
///   number (`-33` stays positional; `--33` is still a flag).
/// - A flag keeps collecting the non-flag tokens that follow it, so
///   `-f 1 2 3` and `-f 1 -f 2 -f 3` both yield the list `["1", "2", "3"]`.
/// - A flag that never receives a value becomes `true`, or `false` when it
///   carries the `no-` negation prefix (`-no-color`).
pub fn parse(tokens: &[String]) -> ParsedArgs {
    let mut expanded: Vec<&str> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.split_once('=') {
            Some((key, value)) => {
                expanded.push(key);
                expanded.push(value);
            }
            None => expanded.push(token),
        }
    }

    let mut positionals = Vec::new();
    let mut options: IndexMap<String, OptValue> = IndexMap::new();
    let mut bare_flags: Vec<String> = Vec::new();
    let mut current_key: Option<String> = None;

    for token in expanded {
        if is_key(token) {
            if let Some(key) = current_key.take() {
                bare_flags.push(key);
            }
            current_key = Some(token.trim_matches('-').to_string());
            continue;
        }

        let Some(key) = current_key.as_deref() else {
            positionals.push(token.to_string());
            continue;
        };

        // The current key stays active, so further non-flag tokens keep
        // extending its value list.
        match options.get_mut(key) {
            Some(OptValue::List(values)) => values.push(token.to_string()),
            Some(value) => {
                let first = match value {
                    OptValue::Text(text) => text.clone(),
                    OptValue::Bool(flag) => flag.to_string(),
                    OptValue::List(_) => unreachable!(),
                };
                *value = OptValue::List(vec![first, token.to_string()]);
            }
            None => {
                options.insert(key.to_string(), OptValue::Text(token.to_string()));
            }
        }
    }

    if let Some(key) = current_key {
        bare_flags.push(key);
    }

    // A flag mentioned again after already receiving a value is tolerated
    // and ignored; the rest become booleans, negated by the `no-` prefix.
    for flag in bare_flags {
        if options.contains_key(&flag) {
            continue;
        }
        match flag.strip_prefix(NEGATION_PREFIX) {
            Some(stripped) => {
                options.insert(stripped.to_string(), OptValue::Bool(false));
            }
            None => {
                options.insert(flag, OptValue::Bool(true));
            }
        }
    }

    log::debug!(
        "parsed {} positionals and {} options",
        positionals.len(),
        options.len()
    );
    ParsedArgs {
        positionals,
        options,
    }
}

/// A token is a key when it starts with `-`, unless it is a bare negative
/// number like `-33`. Double-dash tokens are always keys.
fn is_key(token: &str) -> bool {
    if !token.starts_with('-') {
        return false;
    }
    if token.starts_with("--") {
        return true;
    }
    let body = token.trim_start_matches('-');
    body.is_empty() || !body.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn to_tokens(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn text(value: &str) -> OptValue {
        OptValue::Text(value.to_string())
    }

    fn list(values: &[&str]) -> OptValue {
        OptValue::List(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn plain_tokens_stay_positional() {
        let parsed = parse(&to_tokens(&["abc", "def", "ghi"]));
        assert_eq!(parsed.positionals, vec!["abc", "def", "ghi"]);
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn mixed_styles() {
        let parsed = parse(&to_tokens(&[
            "abc", "def", "-w", "3", "--foo", "bar", "-narf=zort",
        ]));
        assert_eq!(parsed.positionals, vec!["abc", "def"]);
        assert_eq!(parsed.options.get("w"), Some(&text("3")));
        assert_eq!(parsed.options.get("foo"), Some(&text("bar")));
        assert_eq!(parsed.options.get("narf"), Some(&text("zort")));
    }

    #[test]
    fn repeated_flag_builds_list() {
        let expected = list(&["1", "2", "3"]);
        let parsed = parse(&to_tokens(&["-f", "1", "-f", "2", "-f", "3"]));
        assert!(parsed.positionals.is_empty());
        assert_eq!(parsed.options.get("f"), Some(&expected));
    }

    #[test]
    fn flag_keeps_collecting_values() {
        let expected = list(&["1", "2", "3"]);
        let parsed = parse(&to_tokens(&["-f", "1", "2", "3"]));
        assert!(parsed.positionals.is_empty());
        assert_eq!(parsed.options.get("f"), Some(&expected));
    }

    #[test]
    fn bare_flag_is_true() {
        let parsed = parse(&to_tokens(&["-abc"]));
        assert!(parsed.positionals.is_empty());
        assert_eq!(parsed.options.get("abc"), Some(&OptValue::Bool(true)));
    }

    #[test]
    fn negated_flag_is_false() {
        let parsed = parse(&to_tokens(&["-no-abc"]));
        assert_eq!(parsed.options.get("abc"), Some(&OptValue::Bool(false)));
    }

    #[test]
    fn negative_number_is_positional() {
        let parsed = parse(&to_tokens(&["-33"]));
        assert_eq!(parsed.positionals, vec!["-33"]);
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn double_dash_number_is_a_key() {
        let parsed = parse(&to_tokens(&["--33"]));
        assert!(parsed.positionals.is_empty());
        assert_eq!(parsed.options.get("33"), Some(&OptValue::Bool(true)));
    }

    #[test]
    fn key_value_token_splits_at_first_equals() {
        let parsed = parse(&to_tokens(&["-narf=zort=x"]));
        assert_eq!(parsed.options.get("narf"), Some(&text("zort=x")));
    }

    #[test]
    fn non_leading_key_value_binds_to_active_key() {
        // `qwer=ty` expands to `qwer` + `ty` while `-narf` is still active.
        let parsed = parse(&to_tokens(&["-narf", "zort", "qwer=ty"]));
        assert_eq!(parsed.options.get("narf"), Some(&list(&["zort", "qwer", "ty"])));
    }

    #[test]
    fn values_with_spaces() {
        let parsed = parse(&to_tokens(&["-foo", "yes, indeed", "-bar", "no"]));
        assert_eq!(parsed.options.get("foo"), Some(&text("yes, indeed")));
        assert_eq!(parsed.options.get("bar"), Some(&text("no")));
    }

    #[test]
    fn flags_mix_with_valued_keys() {
        let parsed = parse(&to_tokens(&["-foo", "bar", "-abc"]));
        assert_eq!(parsed.options.get("foo"), Some(&text("bar")));
        assert_eq!(parsed.options.get("abc"), Some(&OptValue::Bool(true)));

        let parsed = parse(&to_tokens(&["-abc", "-foo", "bar"]));
        assert_eq!(parsed.options.get("foo"), Some(&text("bar")));
        assert_eq!(parsed.options.get("abc"), Some(&OptValue::Bool(true)));
    }

    #[test]
    fn positional_before_flag() {
        let parsed = parse(&to_tokens(&["foo", "-abc"]));
        assert_eq!(parsed.positionals, vec!["foo"]);
        assert_eq!(parsed.options.get("abc"), Some(&OptValue::Bool(true)));
    }

    #[test]
    fn duplicate_bare_mention_of_valued_flag_is_ignored() {
        let parsed = parse(&to_tokens(&["-abc", "123", "-abc"]));
        assert_eq!(parsed.options.get("abc"), Some(&text("123")));

        let parsed = parse(&to_tokens(&["-abc", "-abc", "123"]));
        assert_eq!(parsed.options.get("abc"), Some(&text("123")));
    }

    #[test]
    fn positional_order_is_first_seen() {
        let parsed = parse(&to_tokens(&["b", "a", "-x", "1", "c"]));
        assert_eq!(parsed.positionals, vec!["b", "a"]);
        // `c` attaches to the still-active `-x` key, not the positionals.
        assert_eq!(parsed.options.get("x"), Some(&list(&["1", "c"])));
    }
}
