/*!
Log sinks the dispatcher writes through
*/

use tracing::info;

/// Destination for the dispatcher's output lines.
pub trait LogSink {
    /// Accept one line of output.
    fn emit(&mut self, line: &str);
}

/// Production sink: every line becomes a `tracing` info event, which the
/// hosting platform's log collector picks up.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&mut self, line: &str) {
        info!("{line}");
    }
}

/// Sink that collects lines in memory, for tests and replay verification.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LogSink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
