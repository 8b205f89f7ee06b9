//! Provider batches numbered in registration order
//!
//! An [`OrderedBatch`] collects providers of one interface and registers
//! them together. With [`OrderedBatch::order_by_registration`] each provider
//! gets a constant key from its position: `start, start + 1, ...`.
//!
//! Batches can be filled from a `linkme` distributed slice of
//! [`ComponentEntry`] records:
//!
//! ```rust,ignore
//! #[linkme::distributed_slice]
//! pub static STEPS: [ComponentEntry<dyn Step>];
//!
//! #[linkme::distributed_slice(STEPS)]
//! static PARSE: ComponentEntry<dyn Step> = ComponentEntry::new("parse", |batch| {
//!     batch.add_value(Parse);
//! });
//!
//! builder.add_batch(OrderedBatch::from_entries(&STEPS).order_by_registration());
//! ```
//!
//! Slice order is link order.

use std::any::type_name;
use std::fmt;
use std::marker::Unsize;
use std::sync::Arc;

use dill::{CatalogBuilder, TypedBuilder};
use ordo_application::{OrderKey, registration_keys};
use ordo_domain::constants::DEFAULT_REGISTRATION_START;
use tracing::{debug, trace};

use super::builders::OrderedBuilderExt;
use super::catalog::CatalogBuilderExt;

type Registration<I> = Box<dyn FnOnce(&mut CatalogBuilder, Option<OrderKey<I>>)>;

struct PendingProvider<I: ?Sized> {
    name: &'static str,
    register: Registration<I>,
}

/// Providers of `I` registered together
pub struct OrderedBatch<I: ?Sized> {
    providers: Vec<PendingProvider<I>>,
    start: Option<i64>,
}

impl<I: ?Sized + 'static> OrderedBatch<I> {
    /// Empty batch; providers stay unkeyed until numbering is enabled
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            start: None,
        }
    }

    /// Batch filled from scanned entries, in slice order
    pub fn from_entries(entries: &[ComponentEntry<I>]) -> Self {
        let mut batch = Self::new();
        for entry in entries {
            trace!(entry = entry.name, "Adding scanned entry to batch");
            (entry.register)(&mut batch);
        }
        batch
    }

    /// Add a provider built by `builder`
    pub fn add<Impl, Bld>(&mut self, builder: Bld) -> &mut Self
    where
        Impl: Send + Sync + Unsize<I> + 'static,
        Bld: TypedBuilder<Impl> + 'static,
    {
        let register = move |catalog: &mut CatalogBuilder, key: Option<OrderKey<I>>| match key {
            Some(key) => {
                catalog.add_provider::<I, Impl, _>(builder.with_order_key(key));
            }
            None => {
                catalog.add_provider::<I, Impl, _>(builder);
            }
        };
        self.providers.push(PendingProvider {
            name: type_name::<Impl>(),
            register: Box::new(register),
        });
        self
    }

    /// Add a ready-made instance
    pub fn add_value<Impl>(&mut self, value: Impl) -> &mut Self
    where
        Impl: Send + Sync + Unsize<I> + 'static,
    {
        self.add::<Impl, _>(Arc::new(value))
    }

    /// Number the providers from 1 in the order they were added
    pub fn order_by_registration(self) -> Self {
        self.order_by_registration_from(DEFAULT_REGISTRATION_START)
    }

    /// Number the providers from `start` in the order they were added
    pub fn order_by_registration_from(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Number of providers collected so far
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Register every provider with `catalog`
    pub fn register(self, catalog: &mut CatalogBuilder) {
        let count = self.providers.len();
        let mut keys = self.start.map(registration_keys::<I>);
        for provider in self.providers {
            let key = keys.as_mut().and_then(Iterator::next);
            trace!(provider = provider.name, key = ?key, "Registering batch provider");
            (provider.register)(catalog, key);
        }
        debug!(
            service = type_name::<I>(),
            providers = count,
            start = ?self.start,
            "Registered provider batch"
        );
    }
}

impl<I: ?Sized + 'static> Default for OrderedBatch<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> fmt::Debug for OrderedBatch<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name).collect();
        f.debug_struct("OrderedBatch")
            .field("providers", &names)
            .field("start", &self.start)
            .finish()
    }
}

/// A scanned provider record for `linkme` slices
pub struct ComponentEntry<I: ?Sized + 'static> {
    /// Diagnostic name
    pub name: &'static str,
    /// Adds the provider to a batch
    pub register: fn(&mut OrderedBatch<I>),
}

impl<I: ?Sized + 'static> ComponentEntry<I> {
    /// Create an entry
    pub const fn new(name: &'static str, register: fn(&mut OrderedBatch<I>)) -> Self {
        Self { name, register }
    }
}

impl<I: ?Sized + 'static> Clone for ComponentEntry<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: ?Sized + 'static> Copy for ComponentEntry<I> {}

impl<I: ?Sized + 'static> fmt::Debug for ComponentEntry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentEntry")
            .field("name", &self.name)
            .field("service", &type_name::<I>())
            .finish()
    }
}
