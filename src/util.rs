/// Fixed-capacity stacks.
///
/// The transformer and the evaluator keep all of their working state in
/// [`stack::BoundedStack`] values. A stack that would grow past its capacity
/// reports [`crate::error::EngineError::CapacityExceeded`] instead of
/// allocating further.
pub mod stack;
