use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an externally tracked task. Supplied by the host; duet
/// never mints its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl TaskId {
    /// Sentinel for "no task", used for foreground tracking and unrooted pairs.
    pub const INVALID: TaskId = TaskId(u32::MAX);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "task-{}", self.0)
        } else {
            write!(f, "task-invalid")
        }
    }
}

/// Opaque handle onto a node in the host's window container hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerToken(pub u64);

/// Opaque proxy for a renderable surface (the "leash" of a container).
/// Visual transactions address surfaces independently of hierarchy handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceHandle(pub u64);

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Windowing mode of a container. Members of a pair run in `MultiWindow`
/// while paired and are reset to `Undefined` on teardown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowingMode {
    #[default]
    Undefined,
    Fullscreen,
    MultiWindow,
}

/// Window configuration snapshot for a task. Replaced wholesale on every
/// info-changed notification; equality drives layout recomputation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub bounds: Rect,
    pub orientation: Orientation,
    pub windowing_mode: WindowingMode,
}

/// Immutable view of a task as reported by the host's task registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub token: ContainerToken,
    pub resizable: bool,
    pub display_id: u32,
    pub configuration: Configuration,
    pub position_in_parent: Point,
}
