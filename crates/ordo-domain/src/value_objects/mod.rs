//! Domain Value Objects
//!
//! Immutable values passed between the registration API, the container and
//! the ordering engine.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`OrderValue`] | Totally ordered sort key |
//! | [`Tagged`] | Resolved instance with its provider metadata |

/// Sort key values
pub mod order_value;
/// Resolved instances with metadata
pub mod tagged;

pub use order_value::OrderValue;
pub use tagged::Tagged;
