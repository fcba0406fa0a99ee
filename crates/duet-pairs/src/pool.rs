//! Recycling pool for [`Pair`] instances.
//!
//! Formation is attempted on whatever `acquire` hands out, so releases go
//! through a pool-enforced [`Pair::reset`] rather than trusting callers to
//! have cleared member state.

use std::fmt;

use duet_common::types::TaskId;
use tracing::debug;

use crate::pair::Pair;

#[derive(Default)]
pub struct PairPool {
    idle: Vec<Pair>,
}

impl PairPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures one idle spare exists, so the first formation after host
    /// registration does not pay allocation latency.
    pub fn warm_up(&mut self) {
        if self.idle.is_empty() {
            self.idle.push(Pair::new());
        }
    }

    /// Hands out an idle instance, constructing a fresh one if none is left.
    pub fn acquire(&mut self) -> Pair {
        self.idle.pop().unwrap_or_default()
    }

    /// Resets and re-admits an instance for reuse.
    pub fn release(&mut self, mut pair: Pair) {
        pair.reset();
        debug!(%pair, idle = self.idle.len() + 1, "pair released to pool");
        self.idle.push(pair);
    }

    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }

    /// Idle instance that should receive an appearance of `task`: one that
    /// already knows the id, else one still awaiting its root.
    pub(crate) fn route_target_mut(&mut self, task: TaskId) -> Option<&mut Pair> {
        let position = self
            .idle
            .iter()
            .position(|pair| pair.contains(task))
            .or_else(|| {
                self.idle
                    .iter()
                    .position(|pair| !pair.root_task_id().is_valid())
            })?;
        self.idle.get_mut(position)
    }

    /// Idle instance whose root matches `task`, for info updates delivered
    /// while pooled.
    pub(crate) fn pair_containing_mut(&mut self, task: TaskId) -> Option<&mut Pair> {
        self.idle.iter_mut().find(|pair| pair.contains(task))
    }

    /// Writes a diagnostic description. Not a stability contract.
    pub fn dump(&self, w: &mut dyn fmt::Write, prefix: &str) -> fmt::Result {
        writeln!(w, "{prefix}PairPool idle={}", self.idle.len())?;
        for pair in &self.idle {
            pair.dump(w, &format!("{prefix}  "))?;
        }
        Ok(())
    }
}
