//! # Application Layer
//!
//! The ordered resolution engine, independent of any container. The
//! infrastructure crate feeds it candidates from a `dill` catalog.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ordering`] | Order keys, the engine, `OrderedSequence` |

pub mod ordering;

pub use ordering::{
    AsOrdered, KeySelector, OrderKey, OrderedSequence, order_candidates, order_instances,
    registration_keys,
};
