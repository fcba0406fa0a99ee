//! Pair state, accessors, and diagnostics.

use std::fmt;

use duet_common::types::{SurfaceHandle, TaskId, TaskSnapshot};

use crate::ports::PairLayout;

/// Two tasks bound under a shared root container, shown side by side with a
/// divider between them.
///
/// A pair is either *unpaired* (no member references, no layout) or *fully
/// paired* (both members and a layout present). The root identity is
/// assigned once, on the first root appearance, and survives pool recycling;
/// member state is cleared on every teardown.
pub struct Pair {
    pub(super) root: Option<TaskSnapshot>,
    pub(super) root_surface: Option<SurfaceHandle>,
    pub(super) task_a: Option<TaskSnapshot>,
    pub(super) surface_a: Option<SurfaceHandle>,
    pub(super) task_b: Option<TaskSnapshot>,
    pub(super) surface_b: Option<SurfaceHandle>,
    pub(super) layout: Option<Box<dyn PairLayout>>,
}

impl Pair {
    pub fn new() -> Self {
        Self {
            root: None,
            root_surface: None,
            task_a: None,
            surface_a: None,
            task_b: None,
            surface_b: None,
            layout: None,
        }
    }

    pub fn root_task_id(&self) -> TaskId {
        self.root.map_or(TaskId::INVALID, |t| t.id)
    }

    pub(super) fn task_id_a(&self) -> TaskId {
        self.task_a.map_or(TaskId::INVALID, |t| t.id)
    }

    pub(super) fn task_id_b(&self) -> TaskId {
        self.task_b.map_or(TaskId::INVALID, |t| t.id)
    }

    /// True iff `task` is the root or either member of this pair.
    pub fn contains(&self, task: TaskId) -> bool {
        task == self.root_task_id() || task == self.task_id_a() || task == self.task_id_b()
    }

    pub fn is_paired(&self) -> bool {
        self.layout.is_some()
    }

    /// Restores the unpaired state: members and layout cleared, root kept.
    /// The pool invokes this on every release so reuse never observes stale
    /// member state, regardless of caller discipline.
    pub(crate) fn reset(&mut self) {
        if let Some(mut layout) = self.layout.take() {
            layout.release();
        }
        self.task_a = None;
        self.surface_a = None;
        self.task_b = None;
        self.surface_b = None;
    }

    /// Writes a diagnostic description. Not a stability contract.
    pub fn dump(&self, w: &mut dyn fmt::Write, prefix: &str) -> fmt::Result {
        writeln!(w, "{prefix}{self}")?;
        if let Some(root) = &self.root {
            writeln!(
                w,
                "{prefix}  root {} mode={:?}",
                root.id, root.configuration.windowing_mode
            )?;
        }
        if let Some(task) = &self.task_a {
            writeln!(
                w,
                "{prefix}  a {} mode={:?}",
                task.id, task.configuration.windowing_mode
            )?;
        }
        if let Some(task) = &self.task_b {
            writeln!(
                w,
                "{prefix}  b {} mode={:?}",
                task.id, task.configuration.windowing_mode
            )?;
        }
        Ok(())
    }
}

impl Default for Pair {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = self.root_task_id();
        if root.is_valid() {
            write!(f, "Pair#{}", root.0)
        } else {
            write!(f, "Pair#unrooted")
        }
    }
}
