mod common;
use bindings::*;
use common::{init_tracing, watcher};

#[test]
fn test_variable_initial_value() {
    let int = Variable::new(5);
    assert_eq!(int.value(), 5);
}

#[test]
fn test_variable_value_change() {
    let int = Variable::new(5);
    int.set(7);
    assert_eq!(int.value(), 7);
}

#[test]
fn test_variable_notify_on_bind() {
    let int = Variable::new(5);
    let (accumulate, check) = watcher();

    let _binding = int.bind(accumulate);

    // Called before bind returned
    assert_eq!(check(), [5]);
    assert_eq!(int.value(), 5);
}

#[test]
fn test_variable_notify_on_set() {
    init_tracing();
    let int = Variable::new(5);
    let (accumulate, check) = watcher();
    let _binding = int.bind(accumulate);

    int.set(7);
    int.set(7);
    assert_eq!(check(), [5, 7, 7]); // no filtering on a variable
}

#[test]
fn test_dropped_binding_does_not_notify() {
    let int = Variable::new(5);
    let (dropped, check_dropped) = watcher();
    let (kept, check_kept) = watcher();

    let binding = int.bind(dropped);
    let _kept = int.bind(kept);
    drop(binding);

    int.set(7);
    assert_eq!(check_dropped(), [5]);
    assert_eq!(check_kept(), [5, 7]);
    assert_eq!(int.subscription_count(), 1);
}

#[test]
fn test_group_keeps_binding_alive() {
    let int = Variable::new("a");
    let (accumulate, check) = watcher();

    let group = BindingGroup::new();
    int.bind(accumulate).bind_lifetime(&group);
    int.set("b");
    assert_eq!(check(), ["a", "b"]);

    drop(group);
    int.set("c");
    assert_eq!(check(), [] as [&str; 0]);
    assert_eq!(int.subscription_count(), 0);
}

#[test]
fn test_channel_listener() {
    let int = Variable::new(1);
    let (tx, rx) = std::sync::mpsc::channel();

    let _binding = int.read().bind(tx);
    int.set(2);
    int.set(3);

    assert_eq!(rx.try_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_setting_from_a_listener() {
    // A listener on one variable driving another variable runs to completion within the outer set
    let celsius = Variable::new(0);
    let fahrenheit = std::rc::Rc::new(Variable::new(32));
    let (accumulate, check) = watcher();
    let _display = fahrenheit.bind(accumulate);

    let _convert = celsius.bind({
        let fahrenheit = fahrenheit.clone();
        move |c: i32| fahrenheit.set(c * 9 / 5 + 32)
    });
    celsius.set(100);

    assert_eq!(fahrenheit.value(), 212);
    assert_eq!(check(), [32, 32, 212]);
}

#[test]
fn test_listener_panic_propagates_to_set() {
    let int = Variable::new(0);
    let (accumulate, check) = watcher();
    let _panicky = int.bind(|value: i32| {
        if value < 0 {
            panic!("negative value {value}");
        }
    });
    let _kept = int.bind(accumulate);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| int.set(-1)));
    assert!(result.is_err());
    // Fan-out stopped at the panicking listener, which was bound first
    assert_eq!(check(), [0]);
    assert_eq!(int.value(), -1);

    int.set(1);
    assert_eq!(check(), [1]);
    assert_eq!(int.subscription_count(), 2);
}

#[test]
fn test_default_variable() {
    let int = Variable::<i32>::default();
    assert_eq!(int.value(), 0);
    assert!(Variable::<String>::default().read().with(|s| s.is_empty()));
}
