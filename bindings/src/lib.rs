/*!
Observable values with synchronous change propagation.

# Design:
- A [`Variable`] is the source of truth for one value. Only its owner can `set` it; [`Read`] views can be handed out.
- A [`Computation`] derives a value from one to four other bindables with a pure closure. It owns no state:
  reading it always recomputes, binding to it binds to every source.
- Every bindable replays its current value to a new listener before `bind` returns, then notifies on every change.
- Binding returns a [`Binding`]. The listener stays attached until the binding is dropped, or until the
  [`BindingGroup`] it was moved into is dropped.
- Everything is single threaded and synchronous: `set` returns once every dependent listener has run.

# Basic usage

```rust
use bindings::*;
use std::{cell::RefCell, rc::Rc};

let a = Variable::new(3);
let b = Variable::new(5);
let sum = Computation::combine(a.read(), b.read(), |a, b| a + b);

let seen = Rc::new(RefCell::new(Vec::new()));
let binding = sum.bind({
    let seen = seen.clone();
    move |value: i32| seen.borrow_mut().push(value)
});

a.set(10);
b.set(4);
assert_eq!(*seen.borrow(), [8, 15, 14]);

drop(binding);
a.set(0);
assert_eq!(seen.borrow().len(), 3);
```

# Filtering repeats

```rust
use bindings::*;
use std::{cell::Cell, rc::Rc};

let a = Variable::new(1);
let parity = a.read().map(|a| a % 2).distinct();

let group = BindingGroup::new();
let posts = Rc::new(Cell::new(0));
parity
    .bind({
        let posts = posts.clone();
        move |_: i32| posts.set(posts.get() + 1)
    })
    .bind_lifetime(&group);

a.set(3); // still odd
a.set(4);
assert_eq!(posts.get(), 2);
```
*/

mod binding;
mod computation;
mod listener;
mod traits;
mod variable;

#[cfg(feature = "tokio")]
pub mod porcelain;

pub use binding::*;
pub use computation::*;
pub use listener::*;
pub use traits::*;
pub use variable::*;

#[cfg(feature = "tokio")]
pub use porcelain::*;
