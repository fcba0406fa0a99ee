//! Reactions to task lifecycle notifications routed to a pair.

use duet_common::types::{SurfaceHandle, TaskSnapshot};
use duet_common::{PairError, Result};

use crate::ports::PairDeps;
use crate::transactions::{HierarchyTransaction, SurfaceTransaction};

use super::Pair;

/// What the controller must do with a pair after a vanish notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VanishAction {
    /// The root container is gone; dissolve and discard the instance, its
    /// identity is no longer reusable.
    DissolveDiscard,
    /// A member vanished; dissolve and return the instance to the pool.
    DissolveRecycle,
    /// The task plays no role in this pair.
    Unrelated,
}

impl Pair {
    /// Records an appeared task and, once both member surfaces are known,
    /// reveals the pair.
    ///
    /// The first appearance on an unrooted instance assigns the root. A task
    /// matching none of the expected roles means the registry and the
    /// controller have desynchronized and is reported as an error.
    pub fn on_task_appeared(
        &mut self,
        task: TaskSnapshot,
        surface: SurfaceHandle,
        deps: &PairDeps,
    ) -> Result<()> {
        if self.root.is_none() || task.id == self.root_task_id() {
            self.root = Some(task);
            self.root_surface = Some(surface);
        } else if task.id == self.task_id_a() {
            self.task_a = Some(task);
            self.surface_a = Some(surface);
        } else if task.id == self.task_id_b() {
            self.task_b = Some(task);
            self.surface_b = Some(surface);
        } else {
            return Err(PairError::UnknownTask {
                task: task.id,
                root: self.root_task_id(),
            });
        }

        if self.surface_a.is_some() && self.surface_b.is_some() {
            self.show_members(deps);
        }
        Ok(())
    }

    /// Reveals root, divider, and both members in one queued transaction so
    /// a half-shown pair never reaches the screen.
    fn show_members(&mut self, deps: &PairDeps) {
        self.set_visible(true);

        let (Some(task_a), Some(task_b)) = (self.task_a, self.task_b) else {
            return;
        };
        let (Some(surface_a), Some(surface_b), Some(root_surface)) =
            (self.surface_a, self.surface_b, self.root_surface)
        else {
            return;
        };
        let Some(layout) = self.layout.as_ref() else {
            return;
        };

        let divider = layout.divider_surface();
        let divider_bounds = layout.divider_bounds();
        let mut txn = SurfaceTransaction::new();
        txn.set_position(
            surface_a,
            task_a.position_in_parent.x,
            task_a.position_in_parent.y,
        )
        .set_position(
            surface_b,
            task_b.position_in_parent.x,
            task_b.position_in_parent.y,
        )
        .set_layer(divider, i32::MAX)
        .set_position(divider, divider_bounds.x, divider_bounds.y)
        .show(root_surface)
        .show(divider)
        .show(surface_a)
        .show(surface_b);
        deps.surfaces.run_in_sync(txn);
    }

    /// Replaces the stored snapshot for a changed task. A root change also
    /// asks the layout to recompute; when bounds moved, member bounds and
    /// surface positions are updated. Member changes have no geometry side
    /// effect.
    pub fn on_task_info_changed(&mut self, task: TaskSnapshot, deps: &PairDeps) -> Result<()> {
        if task.id == self.root_task_id() {
            self.root = Some(task);
            let changed = match self.layout.as_mut() {
                Some(layout) => layout.update_configuration(&task.configuration),
                None => false,
            };
            if changed {
                self.apply_layout_bounds(deps);
            }
        } else if task.id == self.task_id_a() {
            self.task_a = Some(task);
        } else if task.id == self.task_id_b() {
            self.task_b = Some(task);
        } else {
            return Err(PairError::UnknownTask {
                task: task.id,
                root: self.root_task_id(),
            });
        }
        Ok(())
    }

    fn apply_layout_bounds(&self, deps: &PairDeps) {
        let (Some(task_a), Some(task_b), Some(layout)) =
            (self.task_a, self.task_b, self.layout.as_ref())
        else {
            return;
        };

        let bounds_a = layout.bounds_a();
        let bounds_b = layout.bounds_b();
        let divider_bounds = layout.divider_bounds();

        let mut wct = HierarchyTransaction::new();
        wct.set_bounds(task_a.token, bounds_a)
            .set_bounds(task_b.token, bounds_b);
        deps.hierarchy.apply(wct);

        // Surfaces may not have appeared yet; hierarchy bounds still apply.
        let (Some(surface_a), Some(surface_b)) = (self.surface_a, self.surface_b) else {
            return;
        };
        let mut txn = SurfaceTransaction::new();
        txn.set_position(surface_a, bounds_a.x, bounds_a.y)
            .set_position(surface_b, bounds_b.x, bounds_b.y)
            .set_position(layout.divider_surface(), divider_bounds.x, divider_bounds.y);
        deps.surfaces.run_in_sync(txn);
    }

    /// Classifies a vanish notification. The owning controller performs the
    /// dissolution this asks for.
    pub fn on_task_vanished(&self, task: &TaskSnapshot) -> VanishAction {
        if task.id == self.root_task_id() {
            VanishAction::DissolveDiscard
        } else if task.id == self.task_id_a() || task.id == self.task_id_b() {
            VanishAction::DissolveRecycle
        } else {
            VanishAction::Unrelated
        }
    }
}
