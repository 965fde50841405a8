//! Invocation metadata threaded through parsing and execution.

use std::collections::HashSet;

use tradepost_foundation::Value;

/// Who issued the command, what they may do, and what they are aiming at.
///
/// The engine itself only reads this; fallback suppliers typically consult
/// the ambient [`target`](Self::target) to substitute for an argument the
/// sender left implicit, and [`Command::execute`](crate::Command::execute)
/// checks permissions against it.
#[derive(Clone, Debug, Default)]
pub struct CommandInput {
    sender: String,
    permissions: HashSet<String>,
    target: Option<Value>,
}

impl CommandInput {
    /// Creates an input for the named sender with no permissions or target.
    #[must_use]
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            permissions: HashSet::new(),
            target: None,
        }
    }

    /// Grants a permission node to the sender.
    #[must_use]
    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.insert(node.into());
        self
    }

    /// Sets the sender's current ambient target.
    #[must_use]
    pub fn with_target(mut self, target: Value) -> Self {
        self.target = Some(target);
        self
    }

    /// The sender's display name.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns true if the sender holds the given permission node.
    #[must_use]
    pub fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains(node)
    }

    /// The sender's current ambient target, if any.
    #[must_use]
    pub fn target(&self) -> Option<&Value> {
        self.target.as_ref()
    }
}
