//! Routing of host lifecycle events to pair instances.

use duet_common::types::{SurfaceHandle, TaskId, TaskSnapshot};
use duet_common::{PairError, PairEvent, Result};
use tracing::trace;

use crate::pair::VanishAction;

use super::PairController;

impl PairController {
    /// Dispatches one host event to the matching handler.
    pub fn handle_event(&mut self, event: PairEvent) -> Result<()> {
        match event {
            PairEvent::TaskAppeared { task, surface } => self.on_task_appeared(task, surface),
            PairEvent::TaskInfoChanged { task } => self.on_task_info_changed(task),
            PairEvent::TaskVanished { task } => {
                self.on_task_vanished(&task);
                Ok(())
            }
            PairEvent::TaskMovedToFront { task } => {
                self.on_task_moved_to_front(task);
                Ok(())
            }
            PairEvent::KeyguardVisibilityChanged { showing } => {
                self.on_keyguard_visibility_changed(showing);
                Ok(())
            }
        }
    }

    /// Delivers an appearance to the active pair containing the id, else to
    /// an idle instance awaiting a root. An appearance nothing is expecting
    /// means bookkeeping has desynchronized and is reported as an error.
    pub fn on_task_appeared(&mut self, task: TaskSnapshot, surface: SurfaceHandle) -> Result<()> {
        if let Some(pair) = self.active.values_mut().find(|pair| pair.contains(task.id)) {
            return pair.on_task_appeared(task, surface, &self.deps);
        }
        if let Some(pair) = self.pool.route_target_mut(task.id) {
            return pair.on_task_appeared(task, surface, &self.deps);
        }
        Err(PairError::UnroutedAppearance { task: task.id })
    }

    /// Delivers an info change to the pair containing the id, active or
    /// pooled. Changes for tasks outside any pair are ignored.
    pub fn on_task_info_changed(&mut self, task: TaskSnapshot) -> Result<()> {
        if let Some(pair) = self.active.values_mut().find(|pair| pair.contains(task.id)) {
            return pair.on_task_info_changed(task, &self.deps);
        }
        if let Some(pair) = self.pool.pair_containing_mut(task.id) {
            return pair.on_task_info_changed(task, &self.deps);
        }
        trace!(task = %task.id, "info change for a task outside any pair");
        Ok(())
    }

    /// Dissolves the containing pair when a root or member vanishes. A root
    /// vanish discards the instance instead of pooling it, since its
    /// identity is gone.
    pub fn on_task_vanished(&mut self, task: &TaskSnapshot) {
        let classified = self
            .active
            .iter()
            .find(|(_, pair)| pair.contains(task.id))
            .map(|(root, pair)| (*root, pair.on_task_vanished(task)));
        let Some((root, action)) = classified else {
            trace!(task = %task.id, "vanish for a task outside any active pair");
            return;
        };
        match action {
            VanishAction::DissolveDiscard => self.dissolve(root, false),
            VanishAction::DissolveRecycle => self.dissolve(root, true),
            VanishAction::Unrelated => {}
        }
    }

    /// Re-evaluates every active pair's visibility against the new
    /// foreground task and tracks which pair, if any, holds the foreground.
    pub fn on_task_moved_to_front(&mut self, task: TaskId) {
        self.foreground = TaskId::INVALID;
        for (root, pair) in &mut self.active {
            let has_foreground = pair.contains(task);
            pair.set_visible(has_foreground);
            if has_foreground {
                self.foreground = *root;
            }
        }
    }

    /// Hides the foreground pair while the keyguard is showing, and reveals
    /// it again when it clears.
    pub fn on_keyguard_visibility_changed(&mut self, showing: bool) {
        if !self.foreground.is_valid() {
            return;
        }
        if let Some(pair) = self.active.get_mut(&self.foreground) {
            pair.set_visible(!showing);
        }
    }
}
