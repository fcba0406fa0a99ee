//! Controller state, construction, and diagnostics.

use std::collections::HashMap;
use std::fmt;

use duet_common::types::TaskId;

use crate::pair::Pair;
use crate::pool::PairPool;
use crate::ports::{HierarchySink, LayoutFactory, PairDeps, SurfaceSink, TaskRegistry};

/// Public entry point for pair management.
///
/// Owns the active pairs (keyed by root task id), the recycling pool, and
/// the foreground tracker. All methods expect one serialized execution
/// context; there is no internal locking.
pub struct PairController {
    pub(super) registry: Box<dyn TaskRegistry>,
    pub(super) deps: PairDeps,
    pub(super) pool: PairPool,
    /// Active pairs mapped by root task id.
    pub(super) active: HashMap<TaskId, Pair>,
    pub(super) foreground: TaskId,
}

impl PairController {
    pub fn new(
        registry: Box<dyn TaskRegistry>,
        hierarchy: Box<dyn HierarchySink>,
        surfaces: Box<dyn SurfaceSink>,
        layouts: Box<dyn LayoutFactory>,
    ) -> Self {
        Self::with_deps(
            registry,
            PairDeps {
                hierarchy,
                surfaces,
                layouts,
            },
        )
    }

    pub fn with_deps(registry: Box<dyn TaskRegistry>, deps: PairDeps) -> Self {
        Self {
            registry,
            deps,
            pool: PairPool::new(),
            active: HashMap::new(),
            foreground: TaskId::INVALID,
        }
    }

    /// Called once the host has registered the controller as its task
    /// organizer; pre-warms the pool with one spare instance.
    pub fn on_registered(&mut self) {
        self.pool.warm_up();
    }

    /// True iff `task` is the root or a member of any active pair.
    pub fn contains(&self, task: TaskId) -> bool {
        self.active.values().any(|pair| pair.contains(task))
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn idle_count(&self) -> usize {
        self.pool.idle_count()
    }

    /// Root id of the pair currently holding foreground focus, or
    /// [`TaskId::INVALID`].
    pub fn foreground_root(&self) -> TaskId {
        self.foreground
    }

    /// Writes a diagnostic description. Not a stability contract.
    pub fn dump(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(
            w,
            "PairController active={} foreground={}",
            self.active.len(),
            self.foreground
        )?;
        for pair in self.active.values() {
            pair.dump(w, "  ")?;
        }
        self.pool.dump(w, "  ")
    }
}
