//! The command-entry field collaborator.
//!
//! The register accumulates keys typed in Normal mode; its content is the
//! interpreter's `PendingKeys`. The composed editor clears it after every
//! dispatched or abandoned command, so it only ever holds the keys of the
//! command attempt currently in flight.

/// Accumulates pending command keys.
#[derive(Debug, Clone, Default)]
pub struct CommandRegister {
    value: String,
}

impl CommandRegister {
    /// Creates an empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated pending keys.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Appends a typed key.
    pub fn push_key(&mut self, key: char) {
        self.value.push(key);
    }

    /// Clears the accumulated keys.
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
