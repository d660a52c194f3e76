//! VM configuration.
//!
//! Specifies limits only; enforcement is handled by the VM.

/// VM configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmConfig {
    /// Maximum operand stack depth.
    pub max_stack_depth: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        VmConfig {
            max_stack_depth: 1024,
        }
    }
}

impl VmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }
}
