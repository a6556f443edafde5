mod read;

pub use read::*;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{
    binding::Binding,
    listener::{IntoListener, Listener},
    traits::Bindable,
};

/// A stateful bindable wrapping a single value. Only the owner of the `Variable` can `set` it;
/// hand out [`Read`] views to everyone else.
///
/// # Example
/// ```rust
/// use bindings::*;
///
/// let count = Variable::new(1);
/// let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
/// let _binding = count.bind({
///     let seen = seen.clone();
///     move |value: i32| seen.borrow_mut().push(value)
/// });
///
/// count.set(2);
/// assert_eq!(*seen.borrow(), [1, 2]);
/// ```
pub struct Variable<T>(Rc<Inner<T>>);

/// State shared by a variable and its read views
pub(crate) struct Inner<T> {
    value: RefCell<T>,
    /// Keyed by subscription id, which increases monotonically, so iteration follows bind order
    listeners: RefCell<BTreeMap<usize, Listener<T>>>,
    next_id: Cell<usize>,
}

impl<T> Inner<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { f(&*self.value.borrow()) }

    fn subscription_count(&self) -> usize { self.listeners.borrow().len() }
}

impl<T: Clone + 'static> Inner<T> {
    fn value(&self) -> T { self.value.borrow().clone() }

    fn bind(self: &Rc<Self>, listener: Listener<T>) -> Binding {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        tracing::trace!(id, "binding to variable");

        listener(self.value());
        self.listeners.borrow_mut().insert(id, listener);

        // The binding must not keep the variable alive; releasing after the variable is gone does nothing
        let weak = Rc::downgrade(self);
        Binding::unbind(move || {
            if let Some(inner) = weak.upgrade() {
                // Dropping the listener can release further bindings, so do it after the borrow ends
                let removed = inner.listeners.borrow_mut().remove(&id);
                drop(removed);
            }
        })
    }

    fn set(&self, value: T) {
        let previous = self.value.replace(value.clone());
        drop(previous);

        // Snapshot the listeners so they may bind or release while we iterate
        let listeners = self.listeners.borrow().values().cloned().collect::<Vec<_>>();
        tracing::trace!(listeners = listeners.len(), "variable set");

        // clone the value for each listener except the last one
        if let Some((last, rest)) = listeners.split_last() {
            for listener in rest {
                listener(value.clone());
            }
            last(value);
        }
    }
}

impl<T> Variable<T> {
    pub fn new(value: T) -> Self { Self(Rc::new(Inner { value: RefCell::new(value), listeners: RefCell::new(BTreeMap::new()), next_id: Cell::new(0) })) }

    /// Calls a closure with a borrow of the current value.
    /// The closure must not `set` this variable.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R { self.0.with(f) }

    /// Number of live bindings on this variable
    pub fn subscription_count(&self) -> usize { self.0.subscription_count() }

    /// Readonly view of this variable
    pub fn read(&self) -> Read<T> { Read { inner: self.0.clone() } }
}

impl<T: Clone + 'static> Variable<T> {
    /// Replace the value, then call every bound listener with it in bind order.
    ///
    /// Listeners bound or released by a listener during this call may or may not observe this value.
    /// A listener which panics aborts the remaining fan-out; the value is already stored.
    pub fn set(&self, value: T) { self.0.set(value) }
}

impl<T: Clone + 'static> Bindable for Variable<T> {
    type Element = T;

    fn value(&self) -> T { self.0.value() }

    fn bind<L>(&self, listener: L) -> Binding
    where L: IntoListener<T> {
        self.0.bind(listener.into_listener())
    }
}

impl<T: Default> Default for Variable<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<T: std::fmt::Display> std::fmt::Display for Variable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { self.with(|v| write!(f, "{}", v)) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Variable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.with(|v| f.debug_struct("Variable").field("value", v).field("subscriptions", &self.subscription_count()).finish())
    }
}
