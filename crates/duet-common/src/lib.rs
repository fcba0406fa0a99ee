pub mod errors;
pub mod events;
pub mod types;

pub use errors::PairError;
pub use events::PairEvent;
pub use types::{
    Configuration, ContainerToken, Orientation, Point, Rect, SurfaceHandle, TaskId, TaskSnapshot,
    WindowingMode,
};

pub type Result<T> = std::result::Result<T, PairError>;
