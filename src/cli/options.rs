use std::ffi::OsString;

use clap::Parser;

use crate::cli::Cancellation;
use crate::pathlib::FilePath;

/// The command-line options with which the compiler was started, before
/// any derivation has happened.
#[derive(Debug, Default, Parser)]
#[clap(
    name = "emojicodec",
    version,
    about = "The Emojicode compiler. Visit https://www.emojicode.org for help."
)]
pub struct BuildOptions {
    #[clap(
        name = "file",
        help = "The main file of the package to be compiled",
        action = clap::ArgAction::Set
    )]
    pub main_file: FilePath,

    #[clap(long, short, help = "The name of the package", action = clap::ArgAction::Set)]
    pub package: Option<String>,

    #[clap(
        long = "out",
        short = 'o',
        help = "Set output path for binary or archive",
        action = clap::ArgAction::Set
    )]
    pub out_path: Option<FilePath>,

    #[clap(
        long = "interface",
        short = 'i',
        help = "Output interface to given path",
        action = clap::ArgAction::Set
    )]
    pub interface_path: Option<FilePath>,

    #[clap(
        long,
        help = "LLVM triple of the compilation target",
        action = clap::ArgAction::Set
    )]
    pub target: Option<String>,

    #[clap(
        long,
        help = "The linker to use to link the produced object files",
        action = clap::ArgAction::Set
    )]
    pub linker: Option<FilePath>,

    #[clap(
        long,
        short,
        help = "Generate a JSON report about the package",
        action = clap::ArgAction::SetTrue
    )]
    pub report: bool,

    #[clap(
        long = "object",
        short = 'c',
        help = "Produce an object file, do not link",
        action = clap::ArgAction::SetTrue
    )]
    pub object: bool,

    #[clap(long, help = "Show compiler messages as JSON", action = clap::ArgAction::SetTrue)]
    pub json: bool,

    #[clap(long, help = "Format the source code", action = clap::ArgAction::SetTrue)]
    pub format: bool,

    #[clap(
        long,
        help = "Always show compiler messages in color",
        action = clap::ArgAction::SetTrue
    )]
    pub color: bool,

    #[clap(
        long = "optimize",
        short = 'O',
        help = "Compile with optimizations",
        action = clap::ArgAction::SetTrue
    )]
    pub optimize: bool,

    #[clap(
        long = "emit-llvm",
        help = "Write the LLVM IR next to the main file",
        action = clap::ArgAction::SetTrue
    )]
    pub emit_llvm: bool,

    #[clap(
        short = 'S',
        help = "Add a directory to the front of the package search path",
        action = clap::ArgAction::Append
    )]
    pub search_paths: Vec<FilePath>,
}

impl BuildOptions {
    /// Parses the given argument tokens. Help requests and malformed
    /// invocations surface as a [`Cancellation`] instead of an option set.
    pub fn from_args<I, T>(args: I) -> Result<BuildOptions, Cancellation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        BuildOptions::try_parse_from(args).map_err(Cancellation::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_flag_table() {
        let options = BuildOptions::from_args([
            "emojicodec",
            "src/app.emoji",
            "-p",
            "files",
            "-o",
            "build/out",
            "-i",
            "build/iface.emojii",
            "--target",
            "x86_64-unknown-linux-gnu",
            "--linker",
            "clang++",
            "-r",
            "-c",
            "--json",
            "--format",
            "--color",
            "-O",
            "--emit-llvm",
        ])
        .unwrap();

        assert_eq!(options.main_file, "src/app.emoji".into());
        assert_eq!(options.package.as_deref(), Some("files"));
        assert_eq!(options.out_path, Some("build/out".into()));
        assert_eq!(options.interface_path, Some("build/iface.emojii".into()));
        assert_eq!(options.target.as_deref(), Some("x86_64-unknown-linux-gnu"));
        assert_eq!(options.linker, Some("clang++".into()));
        assert!(options.report);
        assert!(options.object);
        assert!(options.json);
        assert!(options.format);
        assert!(options.color);
        assert!(options.optimize);
        assert!(options.emit_llvm);
        assert!(options.search_paths.is_empty());
    }

    #[test]
    fn flags_default_to_off() {
        let options = BuildOptions::from_args(["emojicodec", "main.emoji"]).unwrap();
        assert_eq!(options.main_file, "main.emoji".into());
        assert!(options.package.is_none());
        assert!(options.out_path.is_none());
        assert!(!options.report && !options.object && !options.json);
        assert!(!options.format && !options.color && !options.optimize);
        assert!(!options.emit_llvm);
    }

    #[test]
    fn search_paths_keep_command_line_order() {
        let options =
            BuildOptions::from_args(["emojicodec", "main.emoji", "-S", "two", "-S", "one"])
                .unwrap();
        assert_eq!(options.search_paths, vec!["two".into(), "one".into()]);
    }

    #[test]
    fn help_request_cancels_cleanly() {
        let cancellation = BuildOptions::from_args(["emojicodec", "--help"]).unwrap_err();
        assert!(matches!(cancellation, Cancellation::Help(_)));
    }

    #[test]
    fn missing_main_file_is_a_parse_error() {
        let cancellation = BuildOptions::from_args(["emojicodec"]).unwrap_err();
        assert!(matches!(cancellation, Cancellation::Parse(_)));
    }

    #[test]
    fn unknown_flag_is_a_parse_error() {
        let cancellation =
            BuildOptions::from_args(["emojicodec", "main.emoji", "--frobnicate"]).unwrap_err();
        assert!(matches!(cancellation, Cancellation::Parse(_)));
    }
}
