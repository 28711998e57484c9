use std::io::{self, Write};

use colored::Colorize;

use super::{CompilerDelegate, Diagnostic, Severity};

/// Renders diagnostics for humans, one short block per diagnostic.
pub struct HrfDelegate<W: Write> {
    out: W,
}

impl HrfDelegate<io::Stderr> {
    pub fn new(force_color: bool) -> HrfDelegate<io::Stderr> {
        if force_color {
            colored::control::set_override(true);
        }
        HrfDelegate { out: io::stderr() }
    }
}

impl<W: Write> HrfDelegate<W> {
    pub fn with_output(out: W) -> HrfDelegate<W> {
        HrfDelegate { out }
    }
}

impl<W: Write> CompilerDelegate for HrfDelegate<W> {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        let head = match diagnostic.severity {
            Severity::Error => "error:".red().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        let _ = writeln!(self.out, "{} {}", head, diagnostic.message.bold());
        if let Some(position) = &diagnostic.position {
            let _ = writeln!(
                self.out,
                " {} {}:{}:{}",
                "-->".bold(),
                position.file,
                position.line,
                position.character
            );
        }
        let _ = writeln!(self.out);
    }
}
