//! Per-sender shell state shared with command executors.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use tradepost_command::CommandInput;
use tradepost_foundation::{ObjectId, Value};

use crate::shop::ShopRegistry;

/// A sender's view of the world: who they are, what they may do, which shop
/// they are currently targeting, and the shared shop registry.
///
/// Cloning a session is cheap and yields handles onto the same registry and
/// target, which is how command executors capture the state they mutate.
#[derive(Clone)]
pub struct Session {
    sender: String,
    permissions: HashSet<String>,
    registry: Arc<RwLock<ShopRegistry>>,
    target: Arc<RwLock<Option<ObjectId>>>,
}

impl Session {
    /// Creates a session for the named sender over the given registry.
    #[must_use]
    pub fn new(sender: impl Into<String>, registry: Arc<RwLock<ShopRegistry>>) -> Self {
        Self {
            sender: sender.into(),
            permissions: HashSet::new(),
            registry,
            target: Arc::new(RwLock::new(None)),
        }
    }

    /// Grants a permission node to the sender.
    #[must_use]
    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.insert(node.into());
        self
    }

    /// The sender's display name.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// A handle onto the shared shop registry.
    #[must_use]
    pub fn registry(&self) -> Arc<RwLock<ShopRegistry>> {
        Arc::clone(&self.registry)
    }

    /// The shop the sender is currently targeting, if any.
    #[must_use]
    pub fn target(&self) -> Option<ObjectId> {
        *self.target.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Sets or clears the sender's current target.
    pub fn set_target(&self, target: Option<ObjectId>) {
        *self.target.write().unwrap_or_else(|e| e.into_inner()) = target;
    }

    /// A handle onto the shared target slot, for executors that change it.
    #[must_use]
    pub fn target_slot(&self) -> Arc<RwLock<Option<ObjectId>>> {
        Arc::clone(&self.target)
    }

    /// Builds the invocation metadata the command engine consumes.
    #[must_use]
    pub fn command_input(&self) -> CommandInput {
        let mut input = CommandInput::new(self.sender.clone());
        for node in &self.permissions {
            input = input.with_permission(node.clone());
        }
        if let Some(id) = self.target() {
            input = input.with_target(Value::ObjectRef(id));
        }
        input
    }
}
