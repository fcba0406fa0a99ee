//! Port traits for the external collaborators of the pair core.
//!
//! The controller is constructed with boxed implementations of these; no
//! ambient/global state is consulted anywhere in the crate.

use duet_common::types::{Configuration, Rect, SurfaceHandle, TaskId, TaskSnapshot};

use crate::transactions::{HierarchyTransaction, SurfaceTransaction};

/// Lookup capability over the host's task bookkeeping.
pub trait TaskRegistry {
    fn lookup(&self, task: TaskId) -> Option<TaskSnapshot>;
}

/// Applies a batch of structural hierarchy changes atomically.
pub trait HierarchySink {
    fn apply(&self, txn: HierarchyTransaction);
}

/// Queues a batch of visual surface changes to commit atomically at the
/// next safe point in the render pipeline.
pub trait SurfaceSink {
    fn run_in_sync(&self, txn: SurfaceTransaction);
}

/// Split-geometry service for one pair: member bounds plus the divider
/// surface between them. Owned by a pair only while it is paired.
pub trait PairLayout {
    fn bounds_a(&self) -> Rect;
    fn bounds_b(&self) -> Rect;
    fn divider_surface(&self) -> SurfaceHandle;
    fn divider_bounds(&self) -> Rect;
    fn set_divider_visible(&mut self, visible: bool);
    /// Recomputes for a new root configuration. Returns true iff the
    /// recomputation moved either member's bounds (covers both resize and
    /// orientation changes).
    fn update_configuration(&mut self, config: &Configuration) -> bool;
    /// Releases the divider surface and any other layout resources.
    fn release(&mut self);
}

/// Constructs a [`PairLayout`] from the pairing root's display,
/// configuration, and surface.
pub trait LayoutFactory {
    fn create(
        &self,
        display_id: u32,
        config: &Configuration,
        root_surface: SurfaceHandle,
    ) -> Box<dyn PairLayout>;
}

/// The side-effecting collaborators threaded through [`Pair`] operations.
///
/// [`Pair`]: crate::pair::Pair
pub struct PairDeps {
    pub hierarchy: Box<dyn HierarchySink>,
    pub surfaces: Box<dyn SurfaceSink>,
    pub layouts: Box<dyn LayoutFactory>,
}
