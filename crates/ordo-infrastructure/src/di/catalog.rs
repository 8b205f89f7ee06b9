//! Ordering extensions for `dill::CatalogBuilder`
//!
//! ## Architecture
//!
//! ```text
//! configuration time                        resolution time
//! ──────────────────                        ───────────────
//! add_provider(b.order_by::<dyn I>(2))  →   builder metadata: OrderKey<dyn I>
//! add_batch(batch.order_by_registration())  builder metadata: OrderKey<dyn I> = 1, 2, ...
//! add_ordered::<dyn I>()                →   OrderedSequence<Arc<dyn I>> resolvable
//!                                                  ↓
//!                                           OrderedSequenceBuilder → resolve_ordered
//! ```

use std::any::{TypeId, type_name};
use std::marker::Unsize;

use dill::{BuilderExt, CatalogBuilder, TypedBuilder};
use tracing::debug;

use super::batch::OrderedBatch;
use super::sequence_builder::{OrderedSequenceBuilder, OrderedTaggedSequenceBuilder, SequenceBuilder};

/// Ordering registrations on a `dill` catalog builder
pub trait CatalogBuilderExt {
    /// Make `OrderedSequence<Arc<I>>` resolvable everywhere in the catalog
    ///
    /// Calling it again, or after an explicit registration of the sequence
    /// type, leaves the existing provider in place.
    fn add_ordered<I>(&mut self) -> &mut Self
    where
        I: ?Sized + Send + Sync + 'static;

    /// Make `OrderedSequence<Tagged<I, M>>` resolvable everywhere in the catalog
    fn add_ordered_tagged<I, M>(&mut self) -> &mut Self
    where
        I: ?Sized + Send + Sync + 'static,
        M: Clone + Send + Sync + 'static;

    /// Register `builder` and bind its instance to interface `I`
    ///
    /// Builders whose default interfaces already include `I` (for example a
    /// `#[component]` with `#[interface(dyn I)]`) are not bound twice.
    fn add_provider<I, Impl, Bld>(&mut self, builder: Bld) -> &mut Self
    where
        I: ?Sized + 'static,
        Impl: Send + Sync + Unsize<I> + 'static,
        Bld: TypedBuilder<Impl> + 'static;

    /// Register every provider collected in `batch`
    fn add_batch<I>(&mut self, batch: OrderedBatch<I>) -> &mut Self
    where
        I: ?Sized + 'static;

    /// Whether `T` already has a binding here or in a chained catalog
    fn is_bound<T>(&self) -> bool
    where
        T: ?Sized + 'static;
}

impl CatalogBuilderExt for CatalogBuilder {
    fn add_ordered<I>(&mut self) -> &mut Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        add_sequence::<OrderedSequenceBuilder<I>>(self)
    }

    fn add_ordered_tagged<I, M>(&mut self) -> &mut Self
    where
        I: ?Sized + Send + Sync + 'static,
        M: Clone + Send + Sync + 'static,
    {
        add_sequence::<OrderedTaggedSequenceBuilder<I, M>>(self)
    }

    fn add_provider<I, Impl, Bld>(&mut self, builder: Bld) -> &mut Self
    where
        I: ?Sized + 'static,
        Impl: Send + Sync + Unsize<I> + 'static,
        Bld: TypedBuilder<Impl> + 'static,
    {
        let bound_by_default = builder.interfaces_contain_type_id(&TypeId::of::<I>());
        self.add_builder::<Bld, Impl>(builder);
        if !bound_by_default {
            self.bind::<I, Impl>();
        }
        self
    }

    fn add_batch<I>(&mut self, batch: OrderedBatch<I>) -> &mut Self
    where
        I: ?Sized + 'static,
    {
        batch.register(self);
        self
    }

    fn is_bound<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        // Bindings are only observable on a built catalog
        let catalog = self.clone().build();
        let bound = catalog.builders_for::<T>().next().is_some();
        bound
    }
}

fn add_sequence<S: SequenceBuilder>(builder: &mut CatalogBuilder) -> &mut CatalogBuilder {
    if builder.is_bound::<S::Sequence>() {
        debug!(
            sequence = type_name::<S::Sequence>(),
            "Ordered sequence already provided, keeping the existing provider"
        );
        return builder;
    }
    S::add_to(builder);
    debug!(
        sequence = type_name::<S::Sequence>(),
        "Installed ordered sequence provider"
    );
    builder
}
