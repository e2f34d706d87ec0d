// src/app.rs

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::core::console::Console;
use crate::core::dispatcher;
use crate::core::parser;
use crate::core::tree::{GroupSpec, GroupView};
use crate::models::Env;

/// Prints a line of styled text through the process-wide styler.
pub fn echo(text: &str) -> Result<()> {
    let line = crate::style::colorize(text)?;
    println!("{line}");
    Ok(())
}

/// The application shell: owns the root command group and drives one
/// process invocation through parse → dispatch.
///
/// Errors from argument binding and command handlers propagate out of
/// [`Cli::run`] for the host `main` to report; everything else (help
/// rendering, unknown commands) is handled here.
#[derive(Debug)]
pub struct Cli {
    root: GroupSpec,
    env: Env,
    show_params: bool,
}

impl Cli {
    pub fn new(root: GroupSpec) -> Self {
        Self {
            root,
            env: Env::new(),
            show_params: true,
        }
    }

    /// Adds a key-value pair to the environment shared with every command.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Toggles parameter summaries in rendered signatures.
    pub fn show_params(mut self, enabled: bool) -> Self {
        self.show_params = enabled;
        self
    }

    /// Runs against the process argument vector.
    ///
    /// Installs the signal handler, initializes logging, derives the display
    /// name from `argv[0]`'s file stem, and resolves the rest.
    pub fn run(&self) -> Result<()> {
        let _ = env_logger::try_init();
        crate::system::signals::install()?;

        let mut argv = std::env::args();
        let program = argv
            .next()
            .map(|arg0| program_stem(&arg0))
            .unwrap_or_else(|| "cli".to_string());
        let args: Vec<String> = argv.collect();
        log::debug!("running as '{program}' with args: {args:?}");

        let mut stdout = std::io::stdout();
        self.run_from(&program, &args, &mut stdout)
    }

    /// Runs one invocation with an explicit program name, argument vector,
    /// and output sink.
    pub fn run_from(&self, program: &str, args: &[String], out: &mut dyn Write) -> Result<()> {
        let parsed = parser::parse(args);
        let view = GroupView::root(&self.root, program, &self.env, self.show_params);
        let mut console = Console::new(out);
        dispatcher::resolve(&view, &parsed.positionals, &parsed.options, &mut console)
    }
}

/// The displayed basename of the program: `/usr/local/bin/manage.py` runs
/// as `manage`.
fn program_stem(arg0: &str) -> String {
    Path::new(arg0)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| arg0.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::Command;

    #[test]
    fn program_stem_drops_directories_and_extension() {
        assert_eq!(program_stem("/usr/local/bin/manage.py"), "manage");
        assert_eq!(program_stem("manage"), "manage");
        assert_eq!(program_stem("./tools/ci.sh"), "ci");
    }

    #[test]
    fn run_from_renders_help_for_no_arguments() {
        let root = GroupSpec::builder("Hello World!")
            .command("a", Command::new("AAA", vec![], |_, _| Ok(())))
            .build()
            .unwrap();
        let cli = Cli::new(root);
        let mut buf = Vec::new();
        cli.run_from("manage", &[], &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Usage:"));
        assert!(out.contains("manage <command> [args] [options]"));
        assert!(out.contains("AAA"));
    }

    #[test]
    fn run_from_help_flag_renders_help() {
        let root = GroupSpec::builder("")
            .command("a", Command::new("AAA", vec![], |_, _| Ok(())))
            .build()
            .unwrap();
        let cli = Cli::new(root);
        let mut buf = Vec::new();
        cli.run_from("manage", &["--help".to_string()], &mut buf)
            .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Available Commands:"));
    }
}
