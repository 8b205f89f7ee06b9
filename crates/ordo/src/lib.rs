//! # Ordo
//!
//! Ordered resolution of multi-provider services in a [`dill`] catalog.
//! Providers carry an order key in their builder metadata; consumers ask for
//! an [`OrderedSequence`] and receive every keyed provider sorted ascending
//! by that key.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ordo::prelude::*;
//!
//! trait Step: Send + Sync {}
//!
//! #[component]
//! #[interface(dyn Step)]
//! struct Parse;
//! impl Step for Parse {}
//!
//! #[component]
//! #[interface(dyn Step)]
//! struct Emit;
//! impl Step for Emit {}
//!
//! #[component]
//! struct Pipeline {
//!     steps: OrderedSequence<Arc<dyn Step>>,
//! }
//!
//! let catalog = CatalogBuilder::new()
//!     .add_provider::<dyn Step, Emit, _>(EmitBuilder::new().order_by::<dyn Step>(2))
//!     .add_provider::<dyn Step, Parse, _>(ParseBuilder::new().order_by::<dyn Step>(1))
//!     .add_ordered::<dyn Step>()
//!     .add::<Pipeline>()
//!     .build();
//!
//! let pipeline = catalog.get_one::<Pipeline>()?; // Parse, Emit
//! ```
//!
//! The `#[component]` macro expands to `::dill` paths, so crates using it
//! depend on `dill` directly as well.
//!
//! ## Architecture
//!
//! - `domain` - order values, tagged instances and the error type
//! - `application` - order keys, the ordering engine and `OrderedSequence`
//! - `infrastructure` - the dill integration, configuration and logging

/// Domain layer - order values, tagged instances and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ordo_domain::*;
}

/// Application layer - ordering engine and ordered sequences
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use ordo_application::*;
}

/// Infrastructure layer - dill integration, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ordo_infrastructure::*;
}

/// Everything a typical caller needs in scope
///
/// The one-argument `Result` alias is left out: `#[component]` expands to
/// the two-argument `Result`.
pub mod prelude {
    pub use dill::{Catalog, CatalogBuilder, component, interface, meta};
    pub use ordo_application::{AsOrdered, OrderKey, OrderedSequence};
    pub use ordo_domain::{Error, OrderValue, Tagged};
    pub use ordo_infrastructure::{
        AppConfig, CatalogBuilderExt, ComponentEntry, ConfigLoader, Ordered, OrderedBatch,
        OrderedBuilderExt, OrderedTagged, ResolveOrderedExt, build_catalog, init_logging,
    };
}

pub use dill;

// Re-export commonly used types at the crate root
pub use domain::{Error, OrderValue, Result, Tagged};
pub use application::{OrderKey, OrderedSequence};
pub use infrastructure::{Ordered, OrderedTagged, build_catalog};
