use bindings::Listener;
use std::{cell::RefCell, rc::Rc};

/// Returns a listener which records every value it receives, and a check function which drains what was recorded
#[allow(unused)]
pub fn watcher<T: 'static>() -> (Listener<T>, impl Fn() -> Vec<T>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let accumulate: Listener<T> = {
        let changes = changes.clone();
        Rc::new(move |value: T| changes.borrow_mut().push(value))
    };

    let check = move || changes.borrow_mut().drain(..).collect::<Vec<T>>();

    (accumulate, check)
}

/// Route the crate's trace output to the test harness. Safe to call from every test.
#[allow(unused)]
pub fn init_tracing() { let _ = tracing_subscriber::fmt().with_test_writer().with_max_level(tracing::Level::TRACE).try_init(); }
