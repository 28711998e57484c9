use std::io::{self, Write};

use super::{CompilerDelegate, Diagnostic};

/// Streams diagnostics as one JSON array over the delegate lifecycle, for
/// tools driving the compiler.
pub struct JsonDelegate<W: Write> {
    out: W,
    emitted: usize,
}

impl JsonDelegate<io::Stdout> {
    pub fn new() -> JsonDelegate<io::Stdout> {
        JsonDelegate::with_output(io::stdout())
    }
}

impl Default for JsonDelegate<io::Stdout> {
    fn default() -> JsonDelegate<io::Stdout> {
        JsonDelegate::new()
    }
}

impl<W: Write> JsonDelegate<W> {
    pub fn with_output(out: W) -> JsonDelegate<W> {
        JsonDelegate { out, emitted: 0 }
    }
}

impl<W: Write> CompilerDelegate for JsonDelegate<W> {
    fn begin(&mut self) {
        let _ = write!(self.out, "[");
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        if self.emitted > 0 {
            let _ = write!(self.out, ",");
        }
        let _ = serde_json::to_writer(&mut self.out, diagnostic);
        self.emitted += 1;
    }

    fn finish(&mut self) {
        let _ = writeln!(self.out, "]");
    }
}
