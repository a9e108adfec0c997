/// Default capacity of every stack used during an evaluation.
pub const DEFAULT_STACK_CAPACITY: usize = 256;

/// Limits applied to a single evaluation.
///
/// The same capacity is used for the operator stack, the output sequence, the
/// arity stack and the value stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of entries any one stack may hold.
    pub stack_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { stack_capacity: DEFAULT_STACK_CAPACITY }
    }
}
