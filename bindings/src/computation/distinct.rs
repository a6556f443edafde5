use std::cell::RefCell;
use std::rc::Rc;

use super::Computation;
use crate::listener::Listener;

impl<T: Clone + 'static> Computation<T> {
    /// Creates a new computation like this one, but where a value is only posted to a listener if it is
    /// not equal to the last value posted to that same listener, according to `eq`.
    ///
    /// The first value is always posted. Each binding remembers its own previous value.
    #[doc(alias = "unique_by")]
    pub fn distinct_by<E>(&self, eq: E) -> Computation<T>
    where E: Fn(&T, &T) -> bool + 'static {
        let upstream = self.binder.clone();
        let eq = Rc::new(eq);

        Computation {
            compute: self.compute.clone(),
            binder: Rc::new(move |listener: Listener<T>| {
                let previous: Rc<RefCell<Option<T>>> = Rc::new(RefCell::new(None));
                let eq = eq.clone();

                upstream(Rc::new(move |value: T| {
                    let changed = previous.borrow().as_ref().is_none_or(|previous| !eq(&value, previous));
                    if changed {
                        *previous.borrow_mut() = Some(value.clone());
                        listener(value);
                    } else {
                        tracing::trace!("suppressing repeated value");
                    }
                }))
            }),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Computation<T> {
    /// Same as [`distinct_by`](Self::distinct_by), using `==`
    #[doc(alias = "unique")]
    pub fn distinct(&self) -> Computation<T> { self.distinct_by(T::eq) }
}
