//! Warning channel for non-fatal resolution diagnostics
//!
//! The resolver reports advisory problems (like loading a file the
//! build should have compiled first) without failing the call. Hosts
//! decide where those messages go: a bundler forwards them to its own
//! diagnostic stream, tests collect them for assertions.

use parking_lot::Mutex;

/// Receiver for advisory warnings emitted during resolution.
///
/// Implementations must tolerate concurrent calls; resolution runs in
/// parallel across import edges.
pub trait WarningSink: Send + Sync {
    /// Accept one human-readable warning message.
    fn warn(&self, message: String);
}

/// Sink that buffers warnings in memory.
///
/// This is the default sink and the one tests use.
#[derive(Debug, Default)]
pub struct CollectedWarnings {
    messages: Mutex<Vec<String>>,
}

impl CollectedWarnings {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected messages
    pub fn warnings(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Drain the collected messages
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }

    /// Number of collected messages
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    /// Whether no warnings have been collected
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl WarningSink for CollectedWarnings {
    fn warn(&self, message: String) {
        self.messages.lock().push(message);
    }
}
