//! Order key model

use std::fmt;
use std::sync::Arc;

use ordo_domain::OrderValue;

/// Function computing an order value from a resolved instance
pub type KeySelector<T> = Arc<dyn Fn(&T) -> OrderValue + Send + Sync>;

/// Order key attached to one provider of `T`
pub enum OrderKey<T: ?Sized> {
    /// Fixed value
    Constant(OrderValue),
    /// Value computed from the resolved instance
    Computed(KeySelector<T>),
}

impl<T: ?Sized> OrderKey<T> {
    /// Constant key
    pub fn constant(value: impl Into<OrderValue>) -> Self {
        Self::Constant(value.into())
    }

    /// Computed key
    pub fn computed<K, F>(selector: F) -> Self
    where
        T: 'static,
        K: Into<OrderValue> + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(move |instance: &T| selector(instance).into()))
    }

    /// Order value for `instance`
    ///
    /// A panicking selector is not caught.
    pub fn evaluate(&self, instance: &T) -> OrderValue {
        match self {
            Self::Constant(value) => value.clone(),
            Self::Computed(selector) => selector(instance),
        }
    }

    /// Whether the key depends on the instance
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl<T: ?Sized> Clone for OrderKey<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(value) => Self::Constant(value.clone()),
            Self::Computed(selector) => Self::Computed(Arc::clone(selector)),
        }
    }
}

impl<T: ?Sized> fmt::Debug for OrderKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Computed(_) => f
                .debug_tuple("Computed")
                .field(&std::any::type_name::<T>())
                .finish(),
        }
    }
}

/// Constant keys `start, start + 1, ...` for numbering a batch of providers
/// in registration order
pub fn registration_keys<T: ?Sized>(start: i64) -> impl Iterator<Item = OrderKey<T>> {
    (start..).map(OrderKey::constant)
}
