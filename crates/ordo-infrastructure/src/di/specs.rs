//! Ordered dependency specs
//!
//! [`Ordered`] and [`OrderedTagged`] sit next to `dill`'s own `OneOf` and
//! `AllOf`: where `AllOf<I>` returns every provider of `I` in binding order,
//! `Ordered<I>` returns the providers carrying an [`OrderKey<I>`] sorted
//! ascending by that key.
//!
//! ```ignore
//! let steps = catalog.get::<Ordered<dyn Step>>()?;
//! let tagged = catalog.get::<OrderedTagged<dyn Step, Stage>>()?;
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use dill::{
    BuilderExt, Catalog, CatalogBuilder, DependencySpec, InjectionContext, InjectionError, Maybe,
    OneOf,
};
use ordo_application::{OrderKey, OrderedSequence, order_candidates};
use ordo_domain::Tagged;

/// Run the ordering engine over every provider of `I` bound in `cat`
///
/// Providers without an [`OrderKey<I>`] in their metadata are skipped before
/// they are built. Equal keys keep binding order; providers of a chained
/// parent catalog come after the local ones.
pub fn resolve_ordered<I>(
    cat: &Catalog,
    ctx: &InjectionContext,
) -> Result<OrderedSequence<Arc<I>>, InjectionError>
where
    I: ?Sized + Send + Sync + 'static,
{
    let builders: Vec<_> = cat.builders_for::<I>().collect();
    order_candidates(
        builders
            .iter()
            .map(|b| (b.metadata_get_first::<OrderKey<I>>(), b)),
        |b| b.get_with_context(cat, ctx),
    )
}

/// Like [`resolve_ordered`], pairing each instance with its `M` metadata
///
/// A keyed provider without `M` fails the resolution with
/// [`InjectionError::Unregistered`] naming `M`.
pub fn resolve_ordered_tagged<I, M>(
    cat: &Catalog,
    ctx: &InjectionContext,
) -> Result<OrderedSequence<Tagged<I, M>>, InjectionError>
where
    I: ?Sized + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    let builders: Vec<_> = cat.builders_for::<I>().collect();
    order_candidates(
        builders
            .iter()
            .map(|b| (b.metadata_get_first::<OrderKey<I>>(), b)),
        |b| {
            let metadata = b
                .metadata_get_first::<M>()
                .cloned()
                .ok_or_else(|| InjectionError::unregistered::<M>(ctx))?;
            Ok(Tagged::new(b.get_with_context(cat, ctx)?, metadata))
        },
    )
}

/// Keyed providers of `I`, sorted ascending by key
///
/// An explicit registration of `OrderedSequence<Arc<I>>` takes precedence
/// over the engine.
pub struct Ordered<I: ?Sized> {
    _iface: PhantomData<fn(&I)>,
}

impl<I> DependencySpec for Ordered<I>
where
    I: ?Sized + Send + Sync + 'static,
{
    type IfaceType = I;
    type ReturnType = OrderedSequence<Arc<I>>;

    fn get(cat: &Catalog, ctx: &InjectionContext) -> Result<Self::ReturnType, InjectionError> {
        match Maybe::<OneOf<OrderedSequence<Arc<I>>>>::get(cat, ctx)? {
            Some(registered) => Ok(registered.as_ref().clone()),
            None => resolve_ordered::<I>(cat, ctx),
        }
    }
}

/// Keyed providers of `I` paired with their `M` metadata, sorted ascending
pub struct OrderedTagged<I: ?Sized, M> {
    _iface: PhantomData<fn(&I) -> M>,
}

impl<I, M> DependencySpec for OrderedTagged<I, M>
where
    I: ?Sized + Send + Sync + 'static,
    M: Clone + Send + Sync + 'static,
{
    type IfaceType = I;
    type ReturnType = OrderedSequence<Tagged<I, M>>;

    fn get(cat: &Catalog, ctx: &InjectionContext) -> Result<Self::ReturnType, InjectionError> {
        match Maybe::<OneOf<OrderedSequence<Tagged<I, M>>>>::get(cat, ctx)? {
            Some(registered) => Ok(registered.as_ref().clone()),
            None => resolve_ordered_tagged::<I, M>(cat, ctx),
        }
    }
}

/// Ordered lookups on a built [`Catalog`]
pub trait ResolveOrderedExt {
    /// Shorthand for `get::<Ordered<I>>()`
    fn get_ordered<I>(&self) -> Result<OrderedSequence<Arc<I>>, InjectionError>
    where
        I: ?Sized + Send + Sync + 'static;

    /// Shorthand for `get::<OrderedTagged<I, M>>()`
    fn get_ordered_tagged<I, M>(&self) -> Result<OrderedSequence<Tagged<I, M>>, InjectionError>
    where
        I: ?Sized + Send + Sync + 'static,
        M: Clone + Send + Sync + 'static;

    /// Resolve against a catalog chained to this one
    ///
    /// `configure` adds values or providers visible to this resolution only.
    /// Providers of `I` added there sort together with the parent's.
    fn get_ordered_with<I, F>(&self, configure: F) -> Result<OrderedSequence<Arc<I>>, InjectionError>
    where
        I: ?Sized + Send + Sync + 'static,
        F: FnOnce(&mut CatalogBuilder);
}

impl ResolveOrderedExt for Catalog {
    fn get_ordered<I>(&self) -> Result<OrderedSequence<Arc<I>>, InjectionError>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        self.get::<Ordered<I>>()
    }

    fn get_ordered_tagged<I, M>(&self) -> Result<OrderedSequence<Tagged<I, M>>, InjectionError>
    where
        I: ?Sized + Send + Sync + 'static,
        M: Clone + Send + Sync + 'static,
    {
        self.get::<OrderedTagged<I, M>>()
    }

    fn get_ordered_with<I, F>(&self, configure: F) -> Result<OrderedSequence<Arc<I>>, InjectionError>
    where
        I: ?Sized + Send + Sync + 'static,
        F: FnOnce(&mut CatalogBuilder),
    {
        let mut chained = self.builder_chained();
        configure(&mut chained);
        chained.build().get::<Ordered<I>>()
    }
}
