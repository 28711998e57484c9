//! The command-line front end of the Emojicode compiler.
//!
//! This crate turns `argv`, environment variables and filesystem
//! conventions into one immutable [`driver::BuildConfig`] describing what
//! to build, where inputs come from and where outputs land, and selects a
//! [`diagnostics::CompilerDelegate`] for reporting. The compilation phases
//! themselves live behind [`driver::Pipeline`]; the compiler executable
//! implements that trait and calls [`cli::run`].

pub mod cli;
pub mod diagnostics;
pub mod driver;
pub mod pathlib;
