//! Resolved instance paired with its registration metadata

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A resolved instance together with the metadata its provider was
/// registered with
///
/// Dereferences to the instance, so a sequence of `Tagged<dyn Step, M>` can
/// be used wherever the bare instances would be.
pub struct Tagged<T: ?Sized, M> {
    instance: Arc<T>,
    metadata: M,
}

impl<T: ?Sized, M> Tagged<T, M> {
    /// Pair an instance with its metadata
    pub fn new(instance: Arc<T>, metadata: M) -> Self {
        Self { instance, metadata }
    }

    /// The resolved instance
    pub fn instance(&self) -> &Arc<T> {
        &self.instance
    }

    /// The provider's metadata
    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    /// Split into instance and metadata
    pub fn into_parts(self) -> (Arc<T>, M) {
        (self.instance, self.metadata)
    }
}

impl<T: ?Sized, M> Deref for Tagged<T, M> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.instance
    }
}

impl<T: ?Sized, M> Borrow<T> for Tagged<T, M> {
    fn borrow(&self) -> &T {
        &self.instance
    }
}

impl<T: ?Sized, M: Clone> Clone for Tagged<T, M> {
    fn clone(&self) -> Self {
        Self {
            instance: Arc::clone(&self.instance),
            metadata: self.metadata.clone(),
        }
    }
}

impl<T: ?Sized, M: fmt::Debug> fmt::Debug for Tagged<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagged")
            .field("instance", &std::any::type_name::<T>())
            .field("metadata", &self.metadata)
            .finish()
    }
}
