use std::cell::RefCell;
use std::rc::Rc;

use super::Computation;
use crate::{
    binding::Binding,
    listener::Listener,
    traits::Bindable,
};

/// Generates a constructor combining a fixed number of sources.
///
/// `$arity` is the number of sources. `$idx` is a source's position, used both for the source tuple and the slot tuple.
macro_rules! combinator {
    ($(#[$meta:meta])* fn $name:ident<$arity:literal>($($source:ident: $S:ident . $idx:tt),+)) => {
        impl<T: 'static> Computation<T> {
            $(#[$meta])*
            pub fn $name<$($S,)+ F>($($source: $S,)+ combinator: F) -> Self
            where
                $($S: Bindable + 'static,)+
                F: Fn($(&<$S as Bindable>::Element),+) -> T + 'static,
            {
                let sources = Rc::new(($($source,)+));
                let combinator = Rc::new(combinator);

                let compute = {
                    let sources = sources.clone();
                    let combinator = combinator.clone();
                    move || combinator($(&sources.$idx.value()),+)
                };

                let binder = move |listener: Listener<T>| {
                    tracing::trace!(sources = $arity, "binding to computation");

                    // Latest value per source, private to this binding
                    let slots: Rc<RefCell<($(Option<<$S as Bindable>::Element>,)+)>> = Rc::new(RefCell::new(Default::default()));

                    let propagate = {
                        let slots = slots.clone();
                        let combinator = combinator.clone();
                        Rc::new(move || {
                            // The listener may re-enter, so the slots are released before calling it
                            let output = match &*slots.borrow() {
                                ($(Some($source),)+) => Some(combinator($($source),+)),
                                _ => None,
                            };
                            if let Some(output) = output {
                                listener(output);
                            }
                        })
                    };

                    let bindings = vec![$({
                        let slots = slots.clone();
                        let propagate = propagate.clone();
                        sources.$idx.bind(move |value: <$S as Bindable>::Element| {
                            slots.borrow_mut().$idx = Some(value);
                            propagate();
                        })
                    }),+];

                    Binding::group(bindings)
                };

                Computation::new(compute, binder)
            }
        }
    };
}

combinator! {
    /// Create a `Computation` from a single bindable and a transform closure
    fn map<1>(a: A.0)
}

combinator! {
    /// Create a `Computation` by combining two bindables with a combinator closure
    fn combine<2>(a: A.0, b: B.1)
}

combinator! {
    /// Create a `Computation` by combining three bindables with a combinator closure
    fn combine3<3>(a: A.0, b: B.1, c: C.2)
}

combinator! {
    /// Create a `Computation` by combining four bindables with a combinator closure
    fn combine4<4>(a: A.0, b: B.1, c: C.2, d: D.3)
}
