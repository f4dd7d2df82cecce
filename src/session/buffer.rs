//! Output buffer with tail-limited prompt search.
//!
//! Prompt detection only ever looks at the last `search_depth` bytes of the
//! accumulated output, so large responses (full config dumps, big MAC
//! tables) do not make every read re-scan the whole buffer.

use regex::bytes::Regex;

/// Accumulates device output and searches its tail for the prompt.
#[derive(Debug)]
pub struct PromptBuffer {
    buffer: Vec<u8>,
    search_depth: usize,
}

impl PromptBuffer {
    /// Create a buffer that searches the last `search_depth` bytes.
    pub fn new(search_depth: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(4096),
            search_depth,
        }
    }

    /// Append new data, stripping ANSI escape sequences first.
    pub fn extend(&mut self, data: &[u8]) {
        let cleaned = strip_ansi_escapes::strip(data);
        self.buffer.extend_from_slice(&cleaned);
    }

    /// Whether the prompt pattern matches within the buffer tail.
    pub fn tail_matches(&self, pattern: &Regex) -> bool {
        let start = self.buffer.len().saturating_sub(self.search_depth);
        pattern.is_match(&self.buffer[start..])
    }

    /// Take ownership of the contents, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for PromptBuffer {
    fn default() -> Self {
        Self::new(1000)
    }
}
