//! Pair formation, teardown, and divider visibility.

use duet_common::types::{TaskSnapshot, WindowingMode};
use tracing::{debug, error, warn};

use crate::ports::PairDeps;
use crate::transactions::HierarchyTransaction;

use super::Pair;

impl Pair {
    /// Attempts to form the pair from two member tasks.
    ///
    /// Fails without mutating any state if either task is not resizable, or
    /// if the root container has not appeared yet. On success the members
    /// are recorded, a layout is constructed from the root's display and
    /// configuration, and a single atomic hierarchy transaction reconfigures
    /// the tree. The caller owns registration, and must release the
    /// instance back to its pool on failure.
    pub fn pair(&mut self, task_a: TaskSnapshot, task_b: TaskSnapshot, deps: &PairDeps) -> bool {
        debug!(a = %task_a.id, b = %task_b.id, pair = %self, "pair");

        if !task_a.resizable || !task_b.resizable {
            warn!(
                a = task_a.resizable,
                b = task_b.resizable,
                "cannot pair unresizable tasks"
            );
            return false;
        }
        let (Some(root), Some(root_surface)) = (self.root, self.root_surface) else {
            warn!(pair = %self, "pair attempted before the root container appeared");
            return false;
        };

        let layout = deps
            .layouts
            .create(root.display_id, &root.configuration, root_surface);

        let mut wct = HierarchyTransaction::new();
        wct.set_hidden(root.token, false)
            .reparent(task_a.token, Some(root.token), true)
            .reparent(task_b.token, Some(root.token), true)
            .set_windowing_mode(task_a.token, WindowingMode::MultiWindow)
            .set_windowing_mode(task_b.token, WindowingMode::MultiWindow)
            .set_bounds(task_a.token, layout.bounds_a())
            .set_bounds(task_b.token, layout.bounds_b())
            // The root is raised only after the members are reparented, or
            // it cannot become visible and focused.
            .reorder(root.token, true);
        deps.hierarchy.apply(wct);

        self.task_a = Some(task_a);
        self.task_b = Some(task_b);
        self.layout = Some(layout);
        true
    }

    /// Reverts the hierarchy changes of [`Pair::pair`] in one atomic
    /// transaction, releases the layout, and clears member state. The root
    /// identity is kept so the instance can be recycled.
    ///
    /// Must only be called on a fully paired instance; an unpaired call is
    /// logged and ignored.
    pub fn unpair(&mut self, deps: &PairDeps) {
        let (Some(root), Some(task_a), Some(task_b)) = (self.root, self.task_a, self.task_b)
        else {
            error!(pair = %self, "unpair called on an unpaired instance");
            return;
        };

        // Reparent out of the root container and reset windowing mode.
        let mut wct = HierarchyTransaction::new();
        wct.set_hidden(root.token, true)
            .reorder(root.token, false)
            .reparent(task_a.token, None, false)
            .reparent(task_b.token, None, false)
            .set_windowing_mode(task_a.token, WindowingMode::Undefined)
            .set_windowing_mode(task_b.token, WindowingMode::Undefined);
        deps.hierarchy.apply(wct);

        self.task_a = None;
        self.surface_a = None;
        self.task_b = None;
        self.surface_b = None;
        if let Some(mut layout) = self.layout.take() {
            layout.release();
        }
    }

    /// Toggles divider visibility. Member surface visibility is driven by
    /// the appearance sequence, not by this call. No-op while unpaired.
    pub fn set_visible(&mut self, visible: bool) {
        let Some(layout) = self.layout.as_mut() else {
            return;
        };
        layout.set_divider_visible(visible);
    }
}
