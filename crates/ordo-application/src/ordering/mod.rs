//! Ordering core: keys, the engine and the ordered sequence value

pub mod engine;
pub mod key;
pub mod sequence;

pub use engine::{order_candidates, order_instances};
pub use key::{KeySelector, OrderKey, registration_keys};
pub use sequence::{AsOrdered, OrderedSequence};
