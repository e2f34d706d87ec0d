// src/core/dispatcher.rs

use anyhow::Result;
use indexmap::IndexMap;

use crate::constants::HELP_OPT;
use crate::core::console::Console;
use crate::core::help;
use crate::core::tree::{GroupView, Node};
use crate::models::OptValue;

/// Resolves a parsed argument list against a group.
///
/// An empty positional list renders the group's help. Otherwise the first
/// positional is looked up among the group's members: subgroups are entered
/// recursively, commands are invoked with the remaining positionals and
/// options bound to their declared parameters. An unknown name prints a
/// notice and falls back to the group's help; it is never a process failure.
pub fn resolve(
    view: &GroupView<'_>,
    positionals: &[String],
    options: &IndexMap<String, OptValue>,
    console: &mut Console<'_>,
) -> Result<()> {
    log::debug!(
        "resolving {:?}: {} positionals, {} options",
        view.path,
        positionals.len(),
        options.len()
    );

    let Some((name, rest)) = positionals.split_first() else {
        return help::render_group(view, console);
    };

    match view.spec.get(name) {
        None => {
            console.echo(&format!("\n<error> Command `{name}` not found </error>"))?;
            help::render_group(view, console)
        }
        Some(Node::Group(child)) => {
            let child_view = view.enter(name, child);
            // Entering a group with nothing left to dispatch (or only the
            // help flag) shows its help instead of treating it as a leaf.
            if rest.is_empty() && (options.is_empty() || is_help_only(options)) {
                return help::render_group(&child_view, console);
            }
            resolve(&child_view, rest, options, console)
        }
        Some(Node::Command(cmd)) => {
            if options.contains_key(HELP_OPT) {
                return help::render_command(view, name, cmd, console);
            }
            let args = cmd.bind(rest, options)?;
            cmd.invoke(&args, view.env)
        }
    }
}

fn is_help_only(options: &IndexMap<String, OptValue>) -> bool {
    options.len() == 1 && options.get(HELP_OPT).is_some_and(OptValue::is_true)
}
