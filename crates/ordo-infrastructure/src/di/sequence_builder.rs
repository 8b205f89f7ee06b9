//! Synthesized ordered sequence providers
//!
//! A sequence builder is a `dill` builder whose instance is the ordered
//! sequence of some interface. Registering one makes `OrderedSequence<Arc<I>>`
//! resolvable like any other type: through `get_one`, as a `#[component]`
//! field, or through `OneOf`. Nothing is cached; each resolution re-reads the
//! providers currently bound in the catalog it runs against.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use dill::{
    AllOf, Builder, Catalog, CatalogBuilder, DependencyInfo, InjectionContext, InjectionError,
    Transient, TypeInfo, TypedBuilder,
};
use ordo_application::OrderedSequence;
use ordo_domain::Tagged;

use super::specs::{resolve_ordered, resolve_ordered_tagged};

/// A builder providing one ordered sequence type
pub trait SequenceBuilder: Builder + Default + 'static {
    /// The provided sequence type
    type Sequence: Send + Sync + 'static;

    /// Register a fresh builder of this kind
    fn add_to(cat: &mut CatalogBuilder);
}

/// Provides `OrderedSequence<Arc<I>>`
pub struct OrderedSequenceBuilder<I: ?Sized> {
    _iface: PhantomData<fn(&I)>,
}

impl<I: ?Sized> OrderedSequenceBuilder<I> {
    pub fn new() -> Self {
        Self {
            _iface: PhantomData,
        }
    }
}

impl<I: ?Sized> Default for OrderedSequenceBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Builder for OrderedSequenceBuilder<I>
where
    I: ?Sized + Send + Sync + 'static,
{
    fn instance_type(&self) -> TypeInfo {
        TypeInfo::of::<OrderedSequence<Arc<I>>>()
    }

    fn scope_type(&self) -> TypeInfo {
        TypeInfo::of::<Transient>()
    }

    fn interfaces(&self, _clb: &mut dyn FnMut(&TypeInfo) -> bool) {}

    fn dependencies(&self, clb: &mut dyn FnMut(&DependencyInfo) -> bool) {
        clb(&DependencyInfo::of::<I, AllOf<I>>());
    }

    fn metadata<'a>(&'a self, _clb: &mut dyn FnMut(&'a dyn Any) -> bool) {}

    fn get_any(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<dyn Any + Send + Sync>, InjectionError> {
        Ok(self.get_with_context(cat, ctx)?)
    }
}

impl<I> TypedBuilder<OrderedSequence<Arc<I>>> for OrderedSequenceBuilder<I>
where
    I: ?Sized + Send + Sync + 'static,
{
    fn get_with_context(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<OrderedSequence<Arc<I>>>, InjectionError> {
        let ctx = ctx.push_build(self);
        Ok(Arc::new(resolve_ordered::<I>(cat, &ctx)?))
    }

    fn bind_interfaces(&self, _cat: &mut CatalogBuilder) {}
}

impl<I> SequenceBuilder for OrderedSequenceBuilder<I>
where
    I: ?Sized + Send + Sync + 'static,
{
    type Sequence = OrderedSequence<Arc<I>>;

    fn add_to(cat: &mut CatalogBuilder) {
        cat.add_builder::<Self, Self::Sequence>(Self::new());
    }
}

/// Provides `OrderedSequence<Tagged<I, M>>`
pub struct OrderedTaggedSequenceBuilder<I: ?Sized, M> {
    _iface: PhantomData<fn(&I) -> M>,
}

impl<I: ?Sized, M> OrderedTaggedSequenceBuilder<I, M> {
    pub fn new() -> Self {
        Self {
            _iface: PhantomData,
        }
    }
}

impl<I: ?Sized, M> Default for OrderedTaggedSequenceBuilder<I, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, M> Builder for OrderedTaggedSequenceBuilder<I, M>
where
    I: ?Sized + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    fn instance_type(&self) -> TypeInfo {
        TypeInfo::of::<OrderedSequence<Tagged<I, M>>>()
    }

    fn scope_type(&self) -> TypeInfo {
        TypeInfo::of::<Transient>()
    }

    fn interfaces(&self, _clb: &mut dyn FnMut(&TypeInfo) -> bool) {}

    fn dependencies(&self, clb: &mut dyn FnMut(&DependencyInfo) -> bool) {
        clb(&DependencyInfo::of::<I, AllOf<I>>());
    }

    fn metadata<'a>(&'a self, _clb: &mut dyn FnMut(&'a dyn Any) -> bool) {}

    fn get_any(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<dyn Any + Send + Sync>, InjectionError> {
        Ok(self.get_with_context(cat, ctx)?)
    }
}

impl<I, M> TypedBuilder<OrderedSequence<Tagged<I, M>>> for OrderedTaggedSequenceBuilder<I, M>
where
    I: ?Sized + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    fn get_with_context(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<OrderedSequence<Tagged<I, M>>>, InjectionError> {
        let ctx = ctx.push_build(self);
        Ok(Arc::new(resolve_ordered_tagged::<I, M>(cat, &ctx)?))
    }

    fn bind_interfaces(&self, _cat: &mut CatalogBuilder) {}
}

impl<I, M> SequenceBuilder for OrderedTaggedSequenceBuilder<I, M>
where
    I: ?Sized + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    type Sequence = OrderedSequence<Tagged<I, M>>;

    fn add_to(cat: &mut CatalogBuilder) {
        cat.add_builder::<Self, Self::Sequence>(Self::new());
    }
}
