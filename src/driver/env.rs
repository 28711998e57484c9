use std::collections::HashMap;
use std::env;

use crate::pathlib::FilePath;

/// Access to the process environment.
///
/// Configuration resolution never reads the real environment directly; it
/// is handed one of these instead, so tests and embedders can resolve
/// against a fixed snapshot.
pub trait Environment {
    /// The value of the environment variable `name`, if it is set.
    fn var(&self, name: &str) -> Option<String>;

    /// The current working directory.
    fn current_dir(&self) -> FilePath;
}

/// The real process environment.
#[derive(Debug, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn current_dir(&self) -> FilePath {
        env::current_dir().map(FilePath::from).unwrap_or_default()
    }
}

/// An in-memory environment with a fixed working directory.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
    current_dir: FilePath,
}

impl MapEnv {
    pub fn new<P: Into<FilePath>>(current_dir: P) -> MapEnv {
        MapEnv {
            vars: HashMap::new(),
            current_dir: current_dir.into(),
        }
    }

    pub fn set<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> MapEnv {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn current_dir(&self) -> FilePath {
        self.current_dir.clone()
    }
}
