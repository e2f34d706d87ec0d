// src/core/help.rs

use anyhow::Result;

use crate::constants::{INDENT, INITIAL_INDENT};
use crate::core::console::Console;
use crate::core::tree::{Command, GroupView, is_private};
use crate::models::{ParamDefault, ParamSpec};

/// Renders full help for a group: intro, usage header, and the recursive
/// command listing.
pub fn render_group(view: &GroupView<'_>, console: &mut Console<'_>) -> Result<()> {
    let ind = indent_at(view, 0);

    let doc = extract_doc(view.spec.doc());
    let intro = doc.trim();
    if !intro.is_empty() {
        console.echo(&format!("\n{}", indent_block(intro, &ind)))?;
    }

    console.echo(&format!("\n{ind}<fg=yellow>Usage:</>\n"))?;
    console.echo(&format!(
        "{}{} <command> [args] [options]\n",
        indent_at(view, 1),
        view.path.join(" ")
    ))?;
    console.echo(&format!(
        "{}Run any command with the --help option for more information.",
        indent_at(view, 1)
    ))?;
    console.echo(&format!("\n{ind}<fg=yellow>Available Commands:</>\n"))?;

    render_body(view, console)?;
    console.blank()
}

/// Renders help for a single command: signature plus full documentation.
pub fn render_command(
    view: &GroupView<'_>,
    name: &str,
    cmd: &Command,
    console: &mut Console<'_>,
) -> Result<()> {
    let ind = indent_at(view, 0);
    let doc = indent_block(&extract_doc(cmd.doc()), &ind);
    console.echo(&format!("\n{ind}{}\n\n{doc}", signature(view, name, cmd)))
}

/// The two-line-per-command listing. Commands declared directly on the group
/// come first (private-prefixed ones hidden); then every subgroup's
/// transitive commands, path-prefixed. Subgroups themselves are never
/// hidden.
fn render_body(view: &GroupView<'_>, console: &mut Console<'_>) -> Result<()> {
    for (name, cmd) in view.spec.commands() {
        if is_private(name) {
            continue;
        }
        list_command(view, name, cmd, console)?;
    }
    for (name, sub) in view.spec.subgroups() {
        console.blank()?;
        let child = view.listed(name, sub);
        render_body(&child, console)?;
    }
    Ok(())
}

fn list_command(
    view: &GroupView<'_>,
    name: &str,
    cmd: &Command,
    console: &mut Console<'_>,
) -> Result<()> {
    let first_line = cmd.doc().trim().lines().next().unwrap_or_default();
    console.echo(&format!(
        "{}{}\n{}{}",
        indent_at(view, 1),
        signature(view, name, cmd),
        indent_at(view, 4),
        first_line
    ))
}

/// Computes the displayed call signature: path from under the program name,
/// the command name, and (unless suppressed) the parameter summary.
pub fn signature(view: &GroupView<'_>, name: &str, cmd: &Command) -> String {
    let parent = view.path.get(1..).unwrap_or(&[]).join(" ");
    let mut sig = String::new();
    if !parent.is_empty() {
        sig.push_str(&format!("<fg=green>{parent}</> "));
    }
    sig.push_str(&format!("<fg=light_green>{name}</>"));
    if view.show_params {
        let params = params_display(cmd.params());
        if !params.is_empty() {
            sig.push_str(&format!(" <fg=dark_gray>{params}</>"));
        }
    }
    sig
}

/// One token per parameter, in declaration order: `name` when required,
/// `[--name]` for boolean defaults, `[--name=value]` otherwise.
fn params_display(params: &[ParamSpec]) -> String {
    params
        .iter()
        .map(|spec| match spec.default() {
            ParamDefault::Required => spec.name().to_string(),
            ParamDefault::Flag(_) => format!("[--{}]", spec.name()),
            ParamDefault::Value(value) => format!("[--{}={value}]", spec.name()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts a documentation string, dedenting it even when the first line is
/// not indented: single-line docs come back verbatim; docs opening with a
/// newline are dedented as a block; otherwise the first line is kept and
/// only the remainder is dedented.
pub fn extract_doc(doc: &str) -> String {
    if doc.is_empty() {
        return String::new();
    }
    if !doc.contains('\n') {
        return doc.to_string();
    }
    if doc.starts_with('\n') || doc.starts_with("\\\n") {
        return dedent(doc);
    }
    match doc.split_once('\n') {
        Some((first, rest)) => format!("{first}\n{}", dedent(rest)),
        None => doc.to_string(),
    }
}

/// Strips the whitespace prefix common to all non-blank lines. Blank lines
/// are ignored when computing the prefix and only lose it when they carry it.
fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let prefix = line.get(..line.len() - trimmed.len()).unwrap_or("");
        margin = Some(match margin {
            None => prefix,
            Some(current) => common_prefix(current, prefix),
        });
    }
    let Some(margin) = margin.filter(|m| !m.is_empty()) else {
        return text.to_string();
    };
    text.split('\n')
        .map(|line| line.strip_prefix(margin).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    a.get(..len).unwrap_or("")
}

/// Prefixes every non-blank line of `text`.
fn indent_block(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn indent_at(view: &GroupView<'_>, plus: usize) -> String {
    format!("{}{}", INITIAL_INDENT, INDENT.repeat(view.depth + plus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::GroupSpec;
    use crate::models::Env;
    use pretty_assertions::assert_eq;

    fn noop(params: Vec<ParamSpec>) -> Command {
        Command::new("", params, |_, _| Ok(()))
    }

    #[test]
    fn doc_single_line_verbatim() {
        assert_eq!(extract_doc("Show all branches."), "Show all branches.");
    }

    #[test]
    fn doc_first_line_unindented() {
        let doc = "IPSUM\n\n    long text\n    more text";
        assert_eq!(extract_doc(doc), "IPSUM\n\nlong text\nmore text");
    }

    #[test]
    fn doc_starting_with_newline_dedents_fully() {
        let doc = "\n    Welcome.\n    More.\n";
        assert_eq!(extract_doc(doc), "\nWelcome.\nMore.\n");
    }

    #[test]
    fn doc_empty() {
        assert_eq!(extract_doc(""), "");
    }

    #[test]
    fn dedent_keeps_deeper_indentation() {
        let text = "    a\n        b\n    c";
        assert_eq!(dedent(text), "a\n    b\nc");
    }

    #[test]
    fn dedent_ignores_blank_lines_for_the_margin() {
        let text = "    a\n\n    b";
        assert_eq!(dedent(text), "a\n\nb");
    }

    #[test]
    fn indent_block_skips_blank_lines() {
        assert_eq!(indent_block("a\n\nb", " "), " a\n\n b");
    }

    fn root_view<'a>(spec: &'a GroupSpec, env: &'a Env, show_params: bool) -> GroupView<'a> {
        GroupView::root(spec, "manage", env, show_params)
    }

    #[test]
    fn signature_required_and_defaulted() {
        let spec = GroupSpec::builder("").build().unwrap();
        let env = Env::new();
        let view = root_view(&spec, &env, true);
        let cmd = noop(vec![
            ParamSpec::required("x"),
            ParamSpec::with_default("y", "3"),
        ]);
        assert_eq!(
            signature(&view, "calc", &cmd),
            "<fg=light_green>calc</> <fg=dark_gray>x [--y=3]</>"
        );
    }

    #[test]
    fn signature_boolean_default() {
        let spec = GroupSpec::builder("").build().unwrap();
        let env = Env::new();
        let view = root_view(&spec, &env, true);
        let cmd = noop(vec![ParamSpec::flag("meh", false)]);
        assert_eq!(
            signature(&view, "go", &cmd),
            "<fg=light_green>go</> <fg=dark_gray>[--meh]</>"
        );
    }

    #[test]
    fn signature_without_params_display() {
        let spec = GroupSpec::builder("").build().unwrap();
        let env = Env::new();
        let view = root_view(&spec, &env, false);
        let cmd = noop(vec![ParamSpec::required("x")]);
        assert_eq!(signature(&view, "calc", &cmd), "<fg=light_green>calc</>");
    }

    #[test]
    fn signature_includes_subgroup_path() {
        let child = GroupSpec::builder("").build().unwrap();
        let spec = GroupSpec::builder("").group("db", child).build().unwrap();
        let env = Env::new();
        let view = root_view(&spec, &env, true);
        let Some(crate::core::tree::Node::Group(db)) = view.spec.get("db") else {
            panic!("db subgroup missing");
        };
        let entered = view.enter("db", db);
        let cmd = noop(vec![]);
        assert_eq!(
            signature(&entered, "migrate", &cmd),
            "<fg=green>db</> <fg=light_green>migrate</>"
        );
    }
}
