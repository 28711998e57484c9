use serde::Serialize;

use crate::pathlib::FilePath;

mod hrf;
mod json;

pub use hrf::HrfDelegate;
pub use json::JsonDelegate;

/// Receives notifications about the compilation. The pipeline calls
/// [`begin`](CompilerDelegate::begin) once before the first phase runs,
/// reports every diagnostic as it occurs and calls
/// [`finish`](CompilerDelegate::finish) once compilation stops.
pub trait CompilerDelegate {
    fn begin(&mut self) {}

    fn diagnostic(&mut self, diagnostic: &Diagnostic);

    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A location in Emojicode source.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SourcePosition {
    pub file: FilePath,
    pub line: usize,
    pub character: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<SourcePosition>,
}

impl Diagnostic {
    pub fn error<S: Into<String>>(message: S) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            position: None,
        }
    }

    pub fn warning<S: Into<String>>(message: S) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            position: None,
        }
    }

    pub fn at(mut self, position: SourcePosition) -> Diagnostic {
        self.position = Some(position);
        self
    }
}
