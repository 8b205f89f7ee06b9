//! Ordered resolution on a `dill` catalog
//!
//! Order keys live in builder metadata. The ordered sequence of an interface
//! is an ordinary resolvable type, provided by a synthesized builder that
//! runs the ordering engine against the catalog it is resolved from.
//!
//! ```text
//! KeyedBuilder / TaggedBuilder      metadata: OrderKey<dyn I>, M
//!            │
//!            ▼
//! dill::CatalogBuilder ── add_ordered::<dyn I>() ──▶ OrderedSequenceBuilder<dyn I>
//!            │                                              │
//!            ▼                                              ▼
//! dill::Catalog ── get::<Ordered<dyn I>>() ──▶ resolve_ordered ──▶ OrderedSequence<Arc<dyn I>>
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builders`] | Builder wrappers attaching keys and metadata; per-consumer opt-in |
//! | [`sequence_builder`] | Builders providing the ordered sequence types |
//! | [`specs`] | `Ordered` / `OrderedTagged` dependency specs and direct lookups |
//! | [`catalog`] | `CatalogBuilder` extensions |
//! | [`batch`] | Providers numbered in registration order, `linkme` entries |
//! | [`bootstrap`] | Composition root |

pub mod batch;
pub mod bootstrap;
pub mod builders;
pub mod catalog;
pub mod sequence_builder;
pub mod specs;

pub use batch::{ComponentEntry, OrderedBatch};
pub use bootstrap::build_catalog;
pub use builders::{KeyedBuilder, OrderedBuilderExt, TaggedBuilder, UsingOrdering};
pub use catalog::CatalogBuilderExt;
pub use sequence_builder::{OrderedSequenceBuilder, OrderedTaggedSequenceBuilder, SequenceBuilder};
pub use specs::{Ordered, OrderedTagged, ResolveOrderedExt, resolve_ordered, resolve_ordered_tagged};
