//! Formation and dissolution entry points.

use duet_common::types::{TaskId, TaskSnapshot};
use tracing::{debug, warn};

use super::PairController;

impl PairController {
    /// Resolves both ids through the task registry and attempts formation.
    /// A lookup miss fails without acquiring anything.
    pub fn pair(&mut self, task_a: TaskId, task_b: TaskId) -> bool {
        let (Some(a), Some(b)) = (self.registry.lookup(task_a), self.registry.lookup(task_b))
        else {
            warn!(%task_a, %task_b, "pair lookup missed");
            return false;
        };
        self.pair_tasks(a, b)
    }

    /// Attempts formation from resolved snapshots: acquires an instance,
    /// tries [`Pair::pair`], releases it back on failure, registers it under
    /// its root id on success.
    ///
    /// [`Pair::pair`]: crate::pair::Pair::pair
    pub fn pair_tasks(&mut self, task_a: TaskSnapshot, task_b: TaskSnapshot) -> bool {
        let mut pair = self.pool.acquire();
        if !pair.pair(task_a, task_b, &self.deps) {
            self.pool.release(pair);
            return false;
        }
        self.active.insert(pair.root_task_id(), pair);
        true
    }

    /// Dissolves the active pair containing `task`, returning the instance
    /// to the pool. No-op if the id is not part of any active pair.
    pub fn unpair(&mut self, task: TaskId) {
        self.dissolve(task, true);
    }

    /// Dissolution with pool control: exact root-id match first, else a
    /// contains scan across active pairs. `release_to_pool` is false when
    /// the root task itself vanished, since that identity is not reusable.
    pub(super) fn dissolve(&mut self, task: TaskId, release_to_pool: bool) {
        let root = if self.active.contains_key(&task) {
            Some(task)
        } else {
            self.active
                .iter()
                .find(|(_, pair)| pair.contains(task))
                .map(|(root, _)| *root)
        };
        let Some(root) = root else {
            debug!(%task, "task is not part of an active pair");
            return;
        };
        let Some(mut pair) = self.active.remove(&root) else {
            return;
        };

        debug!(%task, %pair, release_to_pool, "unpair");
        pair.unpair(&self.deps);
        if release_to_pool {
            self.pool.release(pair);
        }
    }
}
