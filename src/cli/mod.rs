use std::env;
use std::ffi::OsString;
use std::io;

use colored::{Color, ColoredString, Colorize};
use log::Level;

use crate::driver::{BuildConfig, Environment, Pipeline, ProcessEnv};

mod options;

pub use options::BuildOptions;

/// The invocation ended before compilation began. None of the variants is
/// a defect: help output was requested, or the command line could not be
/// turned into an option set.
#[derive(Debug, PartialEq, Eq)]
pub enum Cancellation {
    /// Help or version output was requested; carries the rendered text.
    Help(String),
    /// The command line could not be parsed.
    Parse(String),
    /// The command line parsed but a value was rejected.
    Validation(String),
}

impl From<clap::Error> for Cancellation {
    fn from(err: clap::Error) -> Cancellation {
        match err.kind() {
            clap::ErrorKind::DisplayHelp
            | clap::ErrorKind::DisplayVersion
            | clap::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Cancellation::Help(err.to_string())
            }
            clap::ErrorKind::InvalidValue
            | clap::ErrorKind::ValueValidation
            | clap::ErrorKind::ArgumentConflict => Cancellation::Validation(err.to_string()),
            _ => Cancellation::Parse(err.to_string()),
        }
    }
}

impl Cancellation {
    /// Prints the cancellation and returns the process exit status.
    /// Cancelled invocations exit cleanly; only a failed compilation is a
    /// non-zero exit.
    pub fn report(&self) -> i32 {
        match self {
            Cancellation::Help(text) => println!("{}", text.trim_end()),
            Cancellation::Parse(message) | Cancellation::Validation(message) => {
                cli_message(message)
            }
        }
        0
    }
}

/// Prints a message about the command-line interface use.
pub fn cli_message(message: &str) {
    println!("👉  {}", message.trim_end());
}

/// The compiler CLI entry point: parses the real process arguments and
/// environment, resolves the build configuration and hands it to the
/// pipeline. Returns the process exit status.
pub fn run<P: Pipeline>(pipeline: &mut P) -> i32 {
    init_logging(&ProcessEnv);
    drive(env::args_os(), &ProcessEnv, pipeline)
}

/// [`run`] over explicit arguments and environment.
pub fn drive<I, T, P>(args: I, env: &dyn Environment, pipeline: &mut P) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    P: Pipeline,
{
    let options = match BuildOptions::from_args(args) {
        Ok(options) => options,
        Err(cancellation) => return cancellation.report(),
    };

    let config = BuildConfig::resolve(&options, env);
    log::debug!("resolved build configuration: {:#?}", config);

    let delegate = config.delegate();
    if pipeline.compile(&config, delegate) {
        0
    } else {
        1
    }
}

fn init_logging(env: &dyn Environment) {
    let level = env
        .var("LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Warn);

    let _ = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();
            let color = match level {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Blue,
                Level::Debug => Color::Magenta,
                Level::Trace => Color::Green,
            };
            out.finish(format_args!(
                "{} {}",
                ColoredString::from((level.to_string().to_lowercase() + ":").as_str())
                    .color(color),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CompilerDelegate;
    use crate::driver::MapEnv;

    #[derive(Default)]
    struct RecordingPipeline {
        succeed: bool,
        compiled: Option<BuildConfig>,
    }

    impl Pipeline for RecordingPipeline {
        fn compile(&mut self, config: &BuildConfig, _: Box<dyn CompilerDelegate>) -> bool {
            self.compiled = Some(config.clone());
            self.succeed
        }
    }

    #[test]
    fn successful_compilation_exits_zero() {
        let mut pipeline = RecordingPipeline {
            succeed: true,
            ..Default::default()
        };
        let status = drive(
            ["emojicodec", "src/app.emoji"],
            &MapEnv::new("/work"),
            &mut pipeline,
        );
        assert_eq!(status, 0);
        let config = pipeline.compiled.expect("pipeline was not invoked");
        assert_eq!(config.output_path, Some("src/app".into()));
    }

    #[test]
    fn failed_compilation_exits_one() {
        let mut pipeline = RecordingPipeline::default();
        let status = drive(
            ["emojicodec", "src/app.emoji"],
            &MapEnv::new("/work"),
            &mut pipeline,
        );
        assert_eq!(status, 1);
    }

    #[test]
    fn cancelled_invocation_never_reaches_the_pipeline() {
        let mut pipeline = RecordingPipeline::default();
        let status = drive(["emojicodec", "--help"], &MapEnv::new("/work"), &mut pipeline);
        assert_eq!(status, 0);
        assert!(pipeline.compiled.is_none());
    }
}
