//! The Pair entity: root container plus two member tasks and their shared
//! divider, driven by host lifecycle callbacks.

mod formation;
mod lifecycle;
mod types;

pub use lifecycle::VanishAction;
pub use types::Pair;
