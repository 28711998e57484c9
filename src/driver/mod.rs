use crate::diagnostics::CompilerDelegate;

mod config;
mod env;

pub use config::{BuildConfig, BuildMode};
pub use env::{Environment, MapEnv, ProcessEnv};

/// The compilation phases sitting behind the front end. The front end
/// resolves a [`BuildConfig`], selects a delegate and hands both over;
/// everything from parsing to linking happens on the other side of this
/// trait.
pub trait Pipeline {
    /// Compiles according to `config`, reporting through `delegate`.
    /// Returns whether compilation succeeded.
    fn compile(&mut self, config: &BuildConfig, delegate: Box<dyn CompilerDelegate>) -> bool;
}
