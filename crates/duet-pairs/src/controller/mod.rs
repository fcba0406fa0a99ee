//! The PairController: public pairing surface plus lifecycle event routing.

mod pairing;
mod routing;
mod types;

pub use types::PairController;
