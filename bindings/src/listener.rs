use std::rc::Rc;

/// A callback invoked with each value an observable publishes.
///
/// Listeners are reference counted so a fan-out can snapshot them before calling any of them.
pub type Listener<T> = Rc<dyn Fn(T) + 'static>;

/// Trait for types that can be converted into listeners
pub trait IntoListener<T> {
    fn into_listener(self) -> Listener<T>;
}

// Implementation for closures
impl<F, T> IntoListener<T> for F
where F: Fn(T) + 'static
{
    fn into_listener(self) -> Listener<T> { Rc::new(self) }
}

// Implementation for an already erased listener, so it can be passed through without re-boxing
impl<T> IntoListener<T> for Rc<dyn Fn(T) + 'static> {
    fn into_listener(self) -> Listener<T> { self }
}

// IntoListener implementation for std::sync::mpsc channels
impl<T: 'static> IntoListener<T> for std::sync::mpsc::Sender<T> {
    fn into_listener(self) -> Listener<T> {
        Rc::new(move |value| {
            let _ = self.send(value); // Ignore send errors
        })
    }
}

// IntoListener implementation for tokio channels
#[cfg(feature = "tokio")]
impl<T: 'static> IntoListener<T> for tokio::sync::mpsc::UnboundedSender<T> {
    fn into_listener(self) -> Listener<T> {
        Rc::new(move |value| {
            let _ = self.send(value); // Ignore send errors
        })
    }
}
