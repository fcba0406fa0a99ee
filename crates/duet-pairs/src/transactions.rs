//! Batched transaction builders for the two kinds of external mutation.
//!
//! A hierarchy transaction is applied synchronously and atomically; a
//! surface transaction is queued to commit at the next safe render point.
//! The two kinds are not atomic with each other, so callers sequence them
//! explicitly. Builders preserve op order.

use duet_common::types::{ContainerToken, Rect, SurfaceHandle, WindowingMode};
use serde::{Deserialize, Serialize};

/// One structural change to the window container hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HierarchyOp {
    SetHidden {
        token: ContainerToken,
        hidden: bool,
    },
    Reparent {
        child: ContainerToken,
        parent: Option<ContainerToken>,
        on_top: bool,
    },
    SetWindowingMode {
        token: ContainerToken,
        mode: WindowingMode,
    },
    SetBounds {
        token: ContainerToken,
        bounds: Rect,
    },
    Reorder {
        token: ContainerToken,
        to_top: bool,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyTransaction {
    ops: Vec<HierarchyOp>,
}

impl HierarchyTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hidden(&mut self, token: ContainerToken, hidden: bool) -> &mut Self {
        self.ops.push(HierarchyOp::SetHidden { token, hidden });
        self
    }

    pub fn reparent(
        &mut self,
        child: ContainerToken,
        parent: Option<ContainerToken>,
        on_top: bool,
    ) -> &mut Self {
        self.ops.push(HierarchyOp::Reparent {
            child,
            parent,
            on_top,
        });
        self
    }

    pub fn set_windowing_mode(&mut self, token: ContainerToken, mode: WindowingMode) -> &mut Self {
        self.ops.push(HierarchyOp::SetWindowingMode { token, mode });
        self
    }

    pub fn set_bounds(&mut self, token: ContainerToken, bounds: Rect) -> &mut Self {
        self.ops.push(HierarchyOp::SetBounds { token, bounds });
        self
    }

    pub fn reorder(&mut self, token: ContainerToken, to_top: bool) -> &mut Self {
        self.ops.push(HierarchyOp::Reorder { token, to_top });
        self
    }

    pub fn ops(&self) -> &[HierarchyOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// One visual change to a renderable surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SurfaceOp {
    SetPosition { surface: SurfaceHandle, x: f64, y: f64 },
    SetLayer { surface: SurfaceHandle, layer: i32 },
    Show { surface: SurfaceHandle },
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTransaction {
    ops: Vec<SurfaceOp>,
}

impl SurfaceTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&mut self, surface: SurfaceHandle, x: f64, y: f64) -> &mut Self {
        self.ops.push(SurfaceOp::SetPosition { surface, x, y });
        self
    }

    pub fn set_layer(&mut self, surface: SurfaceHandle, layer: i32) -> &mut Self {
        self.ops.push(SurfaceOp::SetLayer { surface, layer });
        self
    }

    pub fn show(&mut self, surface: SurfaceHandle) -> &mut Self {
        self.ops.push(SurfaceOp::Show { surface });
        self
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
