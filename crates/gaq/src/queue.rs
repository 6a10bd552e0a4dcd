//! Ordered log of accepted commands.

use crate::command::Command;
use crate::types::Invocation;

/// Commands waiting to be rendered, in call order.
///
/// Entries are only ever appended; a fresh component starts a fresh queue.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    invocations: Vec<Invocation>,
}

impl CommandQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an invocation.
    pub fn enqueue(&mut self, invocation: Invocation) {
        self.invocations.push(invocation);
    }

    /// Get the number of queued invocations.
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    /// Check whether `command` has been queued at least once.
    pub fn contains(&self, command: Command) -> bool {
        self.invocations.iter().any(|i| i.command == command)
    }

    /// All queued invocations, oldest first.
    pub fn as_slice(&self) -> &[Invocation] {
        &self.invocations
    }
}
