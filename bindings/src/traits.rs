use crate::{
    binding::Binding,
    computation::Computation,
    listener::{IntoListener, Listener},
};

/// A value which can be bound to, where changes to it are published to its listeners.
///
/// ## Contract
/// - `value` is a pure read reflecting the most recently published state.
/// - `bind` calls the listener synchronously with the current value before returning
///   (replay-on-bind), then again synchronously on every subsequent change, in order.
/// - The listener stays attached until the returned [`Binding`] is released.
#[doc(alias = "Property")]
#[doc(alias = "Observable")]
pub trait Bindable {
    type Element: 'static;

    /// The current value
    fn value(&self) -> Self::Element;

    /// Bind a listener to this value. It is called immediately with the current value, and with every change after that.
    fn bind<L>(&self, listener: L) -> Binding
    where L: IntoListener<Self::Element>;

    /// Derive a computation which transforms every value of this one
    fn map<U, F>(self, transform: F) -> Computation<U>
    where
        Self: Sized + 'static,
        F: Fn(&Self::Element) -> U + 'static,
        U: 'static,
    {
        Computation::map(self, transform)
    }
}

/// Object safe counterpart of [`Bindable`], for storing heterogeneous observables of the same element type
pub trait DynBindable<T: 'static> {
    fn dyn_value(&self) -> T;
    fn dyn_bind(&self, listener: Listener<T>) -> Binding;
}

impl<S> DynBindable<S::Element> for S
where S: Bindable
{
    fn dyn_value(&self) -> S::Element { self.value() }
    fn dyn_bind(&self, listener: Listener<S::Element>) -> Binding { self.bind(listener) }
}
