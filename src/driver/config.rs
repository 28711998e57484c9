use crate::cli::BuildOptions;
use crate::diagnostics::{CompilerDelegate, HrfDelegate, JsonDelegate};
use crate::driver::env::Environment;
use crate::pathlib::FilePath;

/// Directory probed for packages when nothing else matches. Overridable
/// when the compiler itself is built.
const DEFAULT_PACKAGES_DIRECTORY: &str = match option_env!("EMOJICODE_DEFAULT_PACKAGES") {
    Some(path) => path,
    None => "/usr/local/EmojicodePackages",
};

/// What kind of artifacts an invocation produces. Computed once from the
/// raw options; the predicates cannot contradict each other afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BuildMode {
    /// No package name was given: the main file compiles to an executable
    /// rather than a reusable library.
    pub standalone: bool,
    /// A final linked or archived artifact is produced. Cleared for
    /// object-only and IR-dump invocations.
    pub packaging: bool,
    pub wants_report: bool,
}

impl BuildMode {
    pub fn of(options: &BuildOptions) -> BuildMode {
        BuildMode {
            standalone: options.package.is_none(),
            packaging: !(options.object || options.emit_llvm),
            wants_report: options.report,
        }
    }
}

/// The resolved build configuration: search paths, mode predicates, every
/// derived path and the external tool commands. Produced once, immutable
/// for the rest of the invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildConfig {
    pub main_file: FilePath,
    pub package_name: Option<String>,
    pub target: Option<String>,
    pub mode: BuildMode,
    /// Directories probed when loading a package, front to back, first
    /// match wins.
    pub search_paths: Vec<FilePath>,
    /// Path of the linked binary or library archive. Absent unless the
    /// invocation packages.
    pub output_path: Option<FilePath>,
    /// Path the package interface is written to. Absent for standalone
    /// builds.
    pub interface_path: Option<FilePath>,
    pub report_path: Option<FilePath>,
    pub object_path: FilePath,
    pub ir_path: Option<FilePath>,
    pub linker: String,
    pub archiver: String,
    pub optimize: bool,
    pub format: bool,
    pub json: bool,
    pub force_color: bool,
}

impl BuildConfig {
    /// Resolves the final configuration from the raw options and the given
    /// environment. Total: any parsed option set yields a configuration.
    ///
    /// Derived paths are anchored at the directory containing the main
    /// file; a main file without a directory component anchors them at the
    /// working directory.
    pub fn resolve(options: &BuildOptions, env: &dyn Environment) -> BuildConfig {
        let mode = BuildMode::of(options);
        let parent = options.main_file.parent();

        let output_path = if mode.packaging {
            Some(match (&options.out_path, &options.package) {
                (Some(path), _) => path.clone(),
                (None, None) => options.main_file.with_extension(""),
                (None, Some(name)) => &parent / format!("lib{}.a", name),
            })
        } else {
            None
        };

        let interface_path = if !mode.standalone {
            Some(match &options.interface_path {
                Some(path) => path.clone(),
                None => &parent / "interface.emojii",
            })
        } else {
            None
        };

        let report_path = if mode.wants_report {
            Some(&parent / "documentation.json")
        } else {
            None
        };

        // An explicit output path names the object file itself when no
        // final artifact is produced.
        let object_path = match &options.out_path {
            Some(path) if !mode.packaging => path.clone(),
            _ => options.main_file.with_extension("o"),
        };

        let ir_path = if options.emit_llvm {
            Some(options.main_file.with_extension("ll"))
        } else {
            None
        };

        BuildConfig {
            main_file: options.main_file.clone(),
            package_name: options.package.clone(),
            target: options.target.clone(),
            mode,
            search_paths: search_paths(options, env),
            output_path,
            interface_path,
            report_path,
            object_path,
            ir_path,
            linker: linker(options, env),
            archiver: archiver(env),
            optimize: options.optimize,
            format: options.format,
            json: options.json,
            force_color: options.color,
        }
    }

    /// Selects the diagnostics delegate matching the configuration.
    pub fn delegate(&self) -> Box<dyn CompilerDelegate> {
        if self.json {
            Box::new(JsonDelegate::new())
        } else {
            Box::new(HrfDelegate::new(self.force_color))
        }
    }
}

fn search_paths(options: &BuildOptions, env: &dyn Environment) -> Vec<FilePath> {
    let mut paths = options.search_paths.clone();
    paths.push(env.current_dir() / "packages");
    if let Some(path) = env.var("EMOJICODE_PACKAGES_PATH") {
        paths.push(FilePath::from(path));
    }
    paths.push(FilePath::from(DEFAULT_PACKAGES_DIRECTORY));
    paths
}

// The command line wins over `CXX`, which wins over the default.
fn linker(options: &BuildOptions, env: &dyn Environment) -> String {
    if let Some(path) = &options.linker {
        return path.to_string();
    }
    env.var("CXX").unwrap_or_else(|| String::from("c++"))
}

fn archiver(env: &dyn Environment) -> String {
    env.var("AR").unwrap_or_else(|| String::from("ar"))
}
