//! Log output destinations
//!
//! Diagnostics go to stderr so stdout stays clean for command results.

pub(crate) trait LogSink {
    fn write(&self, line: &str);
}

/// Production sink: one line per record on stderr
pub(crate) struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Capturing sink for tests. Clones share the same buffer.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct BufferSink {
    lines: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl BufferSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

#[cfg(test)]
impl LogSink for BufferSink {
    fn write(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
