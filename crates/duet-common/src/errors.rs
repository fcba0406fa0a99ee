use crate::types::TaskId;

/// Invariant violations surfaced by pair lifecycle bookkeeping.
///
/// These are distinct from ordinary formation failures (reported as `bool`):
/// they mean the host registry and the controller have desynchronized, and
/// continuing would risk operating on the wrong surfaces. Callers must
/// propagate them, not swallow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    #[error("{task} does not match any role in the pair rooted at {root}")]
    UnknownTask { task: TaskId, root: TaskId },

    #[error("{task} appeared but no pair instance is awaiting a root")]
    UnroutedAppearance { task: TaskId },
}
