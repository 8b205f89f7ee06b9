//! # Domain Layer
//!
//! Core types shared by every Ordo crate. Nothing here knows about the
//! container; the infrastructure crate hosts these types on `dill`.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type and `Result` alias |
//! | [`constants`] | Shared defaults |
//! | [`value_objects`] | `OrderValue`, `Tagged` |

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{OrderValue, Tagged};
