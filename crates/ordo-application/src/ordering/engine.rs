//! Ordered resolution engine
//!
//! Turns the candidate set of a service into an [`OrderedSequence`]:
//!
//! 1. drop candidates without an order key, before they are instantiated
//! 2. instantiate the keyed candidates in candidate order
//! 3. evaluate each key against its instance
//! 4. stable sort ascending by the resulting [`OrderValue`]
//!
//! The engine knows nothing about the container. Callers hand it the key
//! found for each candidate and a closure that builds the candidate.

use std::borrow::Borrow;
use std::convert::Infallible;

use ordo_domain::OrderValue;
use tracing::{debug, trace};

use super::key::OrderKey;
use super::sequence::OrderedSequence;

/// Order a candidate set
///
/// Candidates whose key is `None` are excluded and never instantiated. The
/// first instantiation error aborts the whole resolution. Ties keep the
/// order in which the candidates were supplied.
pub fn order_candidates<'k, T, C, E, Err>(
    candidates: impl IntoIterator<Item = (Option<&'k OrderKey<T>>, C)>,
    mut instantiate: impl FnMut(C) -> Result<E, Err>,
) -> Result<OrderedSequence<E>, Err>
where
    T: ?Sized + 'k,
    E: Borrow<T>,
{
    let mut total = 0_usize;
    let mut keyed: Vec<(OrderValue, E)> = Vec::new();
    for (index, (key, candidate)) in candidates.into_iter().enumerate() {
        total += 1;
        let Some(key) = key else {
            trace!(
                service = std::any::type_name::<T>(),
                index, "Candidate has no order key, excluded"
            );
            continue;
        };
        let element = instantiate(candidate)?;
        let value = key.evaluate(element.borrow());
        keyed.push((value, element));
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    debug!(
        service = std::any::type_name::<T>(),
        candidates = total,
        ordered = keyed.len(),
        "Ordered candidate set"
    );

    Ok(OrderedSequence::assume_ordered(
        keyed.into_iter().map(|(_, element)| element).collect(),
    ))
}

/// Order instances that already exist
pub fn order_instances<'k, T, E>(
    instances: impl IntoIterator<Item = (Option<&'k OrderKey<T>>, E)>,
) -> OrderedSequence<E>
where
    T: ?Sized + 'k,
    E: Borrow<T>,
{
    let Ok(ordered) = order_candidates(instances, Ok::<E, Infallible>);
    ordered
}
