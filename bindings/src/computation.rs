mod combine;
mod distinct;

use std::rc::Rc;

use crate::{
    binding::Binding,
    listener::{IntoListener, Listener},
    traits::Bindable,
};

/// A stateless bindable whose value is computed from a set of other bindables.
///
/// A computation owns no value of its own:
/// - reading [`value`](Bindable::value) evaluates the combinator against the current value of every source,
///   so it is never stale (and never cached).
/// - every [`bind`](Bindable::bind) subscribes to all sources afresh, with its own buffer of their latest values.
///   Once every source has reported, the listener receives the recombined value, and again on every later change
///   of any source. Since sources replay on bind, the listener always fires once before `bind` returns.
///
/// Nothing is shared between bindings: two listeners on the same computation are two independent subscriptions
/// on each upstream source, transitively.
///
/// # Example
/// ```rust
/// use bindings::*;
///
/// let a = Variable::new(3);
/// let b = Variable::new(5);
/// let sum = Computation::combine(a.read(), b.read(), |a, b| a + b);
/// assert_eq!(sum.value(), 8);
///
/// a.set(10);
/// assert_eq!(sum.value(), 15);
/// ```
///
/// Cloning a `Computation` shares its compute and bind closures.
pub struct Computation<T> {
    compute: Rc<dyn Fn() -> T>,
    binder: Rc<dyn Fn(Listener<T>) -> Binding>,
}

impl<T> Clone for Computation<T> {
    fn clone(&self) -> Self { Self { compute: self.compute.clone(), binder: self.binder.clone() } }
}

impl<T: 'static> Computation<T> {
    fn new<C, B>(compute: C, binder: B) -> Self
    where
        C: Fn() -> T + 'static,
        B: Fn(Listener<T>) -> Binding + 'static,
    {
        Self { compute: Rc::new(compute), binder: Rc::new(binder) }
    }
}

impl<T: 'static> Bindable for Computation<T> {
    type Element = T;

    fn value(&self) -> T { (self.compute)() }

    fn bind<L>(&self, listener: L) -> Binding
    where L: IntoListener<T> {
        (self.binder)(listener.into_listener())
    }
}

impl<T: std::fmt::Display + 'static> std::fmt::Display for Computation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.value()) }
}
