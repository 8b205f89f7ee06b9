//! Builder wrappers carrying ordering metadata
//!
//! Each wrapper delegates to the builder it wraps and puts one item in
//! front of the inner builder's metadata. Lookups read the outermost layer
//! first, so keying an already keyed builder again hides the inner key:
//!
//! ```text
//! KeyedBuilder { OrderKey(5) }              metadata: OrderKey(5), Stage, OrderKey(1)
//!   └── TaggedBuilder { Stage }                       ▲ first match wins
//!         └── KeyedBuilder { OrderKey(1) }
//!               └── Arc<Parse>
//! ```
//!
//! Wrappers never touch the instance: computed keys always see the service
//! instance the innermost builder produced.

use std::any::{Any, TypeId, type_name};
use std::marker::PhantomData;
use std::sync::Arc;

use dill::{
    Builder, Catalog, CatalogBuilder, DependencyInfo, InjectionContext, InjectionError, TypeInfo,
    TypedBuilder,
};
use ordo_application::OrderKey;
use ordo_domain::OrderValue;
use tracing::debug;

use super::sequence_builder::{
    OrderedSequenceBuilder, OrderedTaggedSequenceBuilder, SequenceBuilder,
};

// ============================================================================
// KeyedBuilder
// ============================================================================

/// Attaches an [`OrderKey`] for interface `I` to a builder
pub struct KeyedBuilder<Bld, I: ?Sized> {
    inner: Bld,
    key: OrderKey<I>,
}

impl<Bld, I: ?Sized> KeyedBuilder<Bld, I> {
    /// Wrap `inner` with `key`
    pub fn new(inner: Bld, key: OrderKey<I>) -> Self {
        Self { inner, key }
    }

    /// The attached key
    pub fn key(&self) -> &OrderKey<I> {
        &self.key
    }
}

impl<Bld, I> Builder for KeyedBuilder<Bld, I>
where
    Bld: Builder,
    I: ?Sized + 'static,
{
    fn instance_type(&self) -> TypeInfo {
        self.inner.instance_type()
    }

    fn scope_type(&self) -> TypeInfo {
        self.inner.scope_type()
    }

    fn interfaces(&self, clb: &mut dyn FnMut(&TypeInfo) -> bool) {
        self.inner.interfaces(clb);
    }

    fn dependencies(&self, clb: &mut dyn FnMut(&DependencyInfo) -> bool) {
        self.inner.dependencies(clb);
    }

    fn metadata<'a>(&'a self, clb: &mut dyn FnMut(&'a dyn Any) -> bool) {
        if !clb(&self.key) {
            return;
        }
        self.inner.metadata(clb);
    }

    fn get_any(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<dyn Any + Send + Sync>, InjectionError> {
        self.inner.get_any(cat, ctx)
    }
}

impl<Bld, Impl, I> TypedBuilder<Impl> for KeyedBuilder<Bld, I>
where
    Impl: Send + Sync,
    Bld: TypedBuilder<Impl>,
    I: ?Sized + 'static,
{
    fn get_with_context(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<Impl>, InjectionError> {
        self.inner.get_with_context(cat, ctx)
    }

    fn bind_interfaces(&self, cat: &mut CatalogBuilder) {
        self.inner.bind_interfaces(cat);
    }
}

// ============================================================================
// TaggedBuilder
// ============================================================================

/// Attaches an arbitrary metadata value to a builder
pub struct TaggedBuilder<Bld, M> {
    inner: Bld,
    metadata: M,
}

impl<Bld, M> TaggedBuilder<Bld, M> {
    /// Wrap `inner` with `metadata`
    pub fn new(inner: Bld, metadata: M) -> Self {
        Self { inner, metadata }
    }
}

impl<Bld, M> Builder for TaggedBuilder<Bld, M>
where
    Bld: Builder,
    M: Send + Sync + 'static,
{
    fn instance_type(&self) -> TypeInfo {
        self.inner.instance_type()
    }

    fn scope_type(&self) -> TypeInfo {
        self.inner.scope_type()
    }

    fn interfaces(&self, clb: &mut dyn FnMut(&TypeInfo) -> bool) {
        self.inner.interfaces(clb);
    }

    fn dependencies(&self, clb: &mut dyn FnMut(&DependencyInfo) -> bool) {
        self.inner.dependencies(clb);
    }

    fn metadata<'a>(&'a self, clb: &mut dyn FnMut(&'a dyn Any) -> bool) {
        if !clb(&self.metadata) {
            return;
        }
        self.inner.metadata(clb);
    }

    fn get_any(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<dyn Any + Send + Sync>, InjectionError> {
        self.inner.get_any(cat, ctx)
    }
}

impl<Bld, Impl, M> TypedBuilder<Impl> for TaggedBuilder<Bld, M>
where
    Impl: Send + Sync,
    Bld: TypedBuilder<Impl>,
    M: Send + Sync + 'static,
{
    fn get_with_context(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<Impl>, InjectionError> {
        self.inner.get_with_context(cat, ctx)
    }

    fn bind_interfaces(&self, cat: &mut CatalogBuilder) {
        self.inner.bind_interfaces(cat);
    }
}

// ============================================================================
// UsingOrdering
// ============================================================================

/// Lets one consumer depend on an ordered sequence without a catalog-wide
/// install
///
/// When the catalog has no provider for the sequence type, the consumer is
/// built against a chained catalog that adds one. Every other dependency
/// still resolves from the original catalog.
pub struct UsingOrdering<Bld, S> {
    inner: Bld,
    _sequence: PhantomData<fn() -> S>,
}

impl<Bld: Builder, S: SequenceBuilder> UsingOrdering<Bld, S> {
    /// Wrap a consumer's builder
    pub fn new(inner: Bld) -> Self {
        Self {
            inner,
            _sequence: PhantomData,
        }
    }

    fn with_sequence<R>(&self, cat: &Catalog, resolve: impl FnOnce(&Catalog) -> R) -> R {
        if cat.builders_for::<S::Sequence>().next().is_some() {
            return resolve(cat);
        }
        debug!(
            consumer = self.inner.instance_type().name,
            sequence = type_name::<S::Sequence>(),
            "Resolving consumer with a local ordered sequence provider"
        );
        let mut chained = cat.builder_chained();
        S::add_to(&mut chained);
        resolve(&chained.build())
    }
}

impl<Bld, S> Builder for UsingOrdering<Bld, S>
where
    Bld: Builder,
    S: SequenceBuilder,
{
    fn instance_type(&self) -> TypeInfo {
        self.inner.instance_type()
    }

    fn scope_type(&self) -> TypeInfo {
        self.inner.scope_type()
    }

    fn interfaces(&self, clb: &mut dyn FnMut(&TypeInfo) -> bool) {
        self.inner.interfaces(clb);
    }

    fn dependencies(&self, clb: &mut dyn FnMut(&DependencyInfo) -> bool) {
        let provided = TypeId::of::<S::Sequence>();
        self.inner.dependencies(&mut |dep: &DependencyInfo| {
            if dep.iface.id == provided {
                clb(&dep.bound(true))
            } else {
                clb(dep)
            }
        });
    }

    fn metadata<'a>(&'a self, clb: &mut dyn FnMut(&'a dyn Any) -> bool) {
        self.inner.metadata(clb);
    }

    fn get_any(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<dyn Any + Send + Sync>, InjectionError> {
        self.with_sequence(cat, |cat| self.inner.get_any(cat, ctx))
    }
}

impl<Bld, Impl, S> TypedBuilder<Impl> for UsingOrdering<Bld, S>
where
    Impl: Send + Sync,
    Bld: TypedBuilder<Impl>,
    S: SequenceBuilder,
{
    fn get_with_context(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<Impl>, InjectionError> {
        self.with_sequence(cat, |cat| self.inner.get_with_context(cat, ctx))
    }

    fn bind_interfaces(&self, cat: &mut CatalogBuilder) {
        self.inner.bind_interfaces(cat);
    }
}

// ============================================================================
// Extension methods
// ============================================================================

/// Ordering metadata for any `dill` builder
///
/// ```rust,ignore
/// builder.add_provider::<dyn Step, Parse, _>(Arc::new(Parse).order_by::<dyn Step>(1));
/// builder.add_builder(Pipeline::builder().using_ordering::<dyn Step>());
/// ```
pub trait OrderedBuilderExt: Builder + Sized {
    /// Attach a constant order key for interface `I`
    ///
    /// Calling it again on the returned builder replaces the key.
    fn order_by<I>(self, value: impl Into<OrderValue>) -> KeyedBuilder<Self, I>
    where
        I: ?Sized + 'static,
    {
        KeyedBuilder::new(self, OrderKey::constant(value))
    }

    /// Attach a key computed from the resolved instance
    fn order_by_key<I, K, F>(self, selector: F) -> KeyedBuilder<Self, I>
    where
        I: ?Sized + 'static,
        K: Into<OrderValue> + 'static,
        F: Fn(&I) -> K + Send + Sync + 'static,
    {
        KeyedBuilder::new(self, OrderKey::computed(selector))
    }

    /// Attach a prepared key
    fn with_order_key<I>(self, key: OrderKey<I>) -> KeyedBuilder<Self, I>
    where
        I: ?Sized + 'static,
    {
        KeyedBuilder::new(self, key)
    }

    /// Attach a metadata value, readable through tagged ordered resolution
    fn with_metadata<M>(self, metadata: M) -> TaggedBuilder<Self, M>
    where
        M: Send + Sync + 'static,
    {
        TaggedBuilder::new(self, metadata)
    }

    /// Satisfy this consumer's `OrderedSequence<Arc<I>>` dependency even when
    /// the catalog has no ordered sequence provider for `I`
    fn using_ordering<I>(self) -> UsingOrdering<Self, OrderedSequenceBuilder<I>>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        UsingOrdering::new(self)
    }

    /// Tagged counterpart of [`OrderedBuilderExt::using_ordering`]
    fn using_ordering_tagged<I, M>(
        self,
    ) -> UsingOrdering<Self, OrderedTaggedSequenceBuilder<I, M>>
    where
        I: ?Sized + Send + Sync + 'static,
        M: Clone + Send + Sync + 'static,
    {
        UsingOrdering::new(self)
    }
}

impl<Bld: Builder> OrderedBuilderExt for Bld {}
