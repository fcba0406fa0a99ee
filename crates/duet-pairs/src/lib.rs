//! Paired work-unit management: two tasks bound under a shared root
//! container so they can be shown and operated side by side.
//!
//! [`PairController`] is the public entry point. It owns the active pairs,
//! recycles instances through [`PairPool`], and routes host lifecycle events
//! to the right [`Pair`]. Geometry, transaction application, and task lookup
//! are consumed through the port traits in [`ports`].

pub mod controller;
pub mod pair;
pub mod pool;
pub mod ports;
pub mod transactions;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::PairController;
pub use pair::{Pair, VanishAction};
pub use pool::PairPool;
pub use ports::{HierarchySink, LayoutFactory, PairDeps, PairLayout, SurfaceSink, TaskRegistry};
pub use transactions::{HierarchyOp, HierarchyTransaction, SurfaceOp, SurfaceTransaction};
