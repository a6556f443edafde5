use std::rc::Rc;

use super::Inner;
use crate::{binding::Binding, listener::IntoListener, traits::Bindable};

/// Read-only view of a [`Variable`](super::Variable).
///
/// Shares the variable's value and listeners, so binding through a `Read` is the same as binding
/// to the variable itself. A `Read` keeps the variable's state alive.
pub struct Read<T> {
    pub(crate) inner: Rc<Inner<T>>,
}

impl<T> Read<T> {
    /// Calls a closure with a borrow of the current value
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { self.inner.with(f) }

    /// Number of live bindings on the underlying variable
    pub fn subscription_count(&self) -> usize { self.inner.subscription_count() }
}

impl<T> Clone for Read<T> {
    fn clone(&self) -> Self { Self { inner: self.inner.clone() } }
}

impl<T: Clone + 'static> Bindable for Read<T> {
    type Element = T;

    fn value(&self) -> T { self.inner.value() }

    fn bind<L>(&self, listener: L) -> Binding
    where L: IntoListener<T> {
        self.inner.bind(listener.into_listener())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Read<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.with(|v| write!(f, "{}", v)) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Read<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|v| f.debug_struct("Read").field("value", v).field("subscriptions", &self.subscription_count()).finish())
    }
}
