//! Domain constants
//!
//! Infrastructure-only constants live in `ordo_infrastructure::constants`.

/// First key assigned by sequential batch ordering when no offset is given
pub const DEFAULT_REGISTRATION_START: i64 = 1;
