//! A reflective command dispatch framework for nested command-line tools.
//!
//! Declare a tree of command groups, hand it to [`Cli`], and get shell-flag
//! argument parsing, recursive dispatch, and generated help for free:
//!
//! ```no_run
//! use cadre::{Cli, Command, GroupSpec, ParamSpec};
//!
//! fn main() -> anyhow::Result<()> {
//!     let root = GroupSpec::builder("Welcome to my tool")
//!         .command(
//!             "greet",
//!             Command::new(
//!                 "Greets NAME.",
//!                 vec![ParamSpec::required("name"), ParamSpec::flag("quiet", false)],
//!                 |args, _env| {
//!                     if !args.flag("quiet") {
//!                         cadre::echo(&format!("<info>Hello, {}!</>", args.text("name").unwrap_or("")))?;
//!                     }
//!                     Ok(())
//!                 },
//!             ),
//!         )
//!         .build()?;
//!     Cli::new(root).run()
//! }
//! ```

pub mod app;
pub mod constants;
pub mod core;
pub mod models;
pub mod style;
pub mod system;

pub use crate::app::{Cli, echo};
pub use crate::core::tree::{
    ArgumentError, Command, GroupBuilder, GroupSpec, GroupView, Node, RegistryError,
};
pub use crate::models::{CallArgs, Env, OptValue, ParamDefault, ParamSpec};
pub use crate::style::{Style, StyleError, StyleOption, add_style, remove_style, with_colors};
pub use crate::system::prompt::{ask, confirm};
