use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::mpsc::UnboundedReceiver;

use crate::{binding::Binding, traits::Bindable};

/// Trait for waiting on values asynchronously
pub trait Wait<T: 'static> {
    /// Wait for the value to equal `target_value`
    fn wait_value(&self, target_value: T) -> Waiting<T, bool>
    where T: PartialEq;

    /// Wait for a value for which `predicate` decides to stop
    fn wait_for<F, R>(&self, predicate: F) -> Waiting<T, R>
    where
        F: Fn(&T) -> R + 'static,
        R: WaitResult;
}

/// What a `wait_for` predicate decides about one value: keep waiting, or stop with an output.
pub trait WaitResult {
    type Output;
    /// `None` keeps waiting for the next value
    fn result(self) -> Option<Self::Output>;
}

impl WaitResult for bool {
    type Output = ();
    fn result(self) -> Option<()> { self.then_some(()) }
}

impl<T> WaitResult for Option<T> {
    type Output = T;
    fn result(self) -> Option<T> { self }
}

/// Future returned by [`Wait`]. It owns its binding, so it does not borrow the bindable it came from.
///
/// The binding is made when `wait_*` is called, not on first poll. Its replay puts the current value
/// first in line, so a value which already satisfies the predicate resolves on the first poll, and
/// changes made before the first poll are still seen in order. Dropping the future releases the binding.
#[must_use = "futures do nothing unless awaited"]
pub struct Waiting<T, R> {
    values: UnboundedReceiver<T>,
    predicate: Box<dyn Fn(&T) -> R>,
    _binding: Binding,
    _output: PhantomData<fn() -> R>,
}

// Nothing in a `Waiting` is structurally pinned
impl<T, R> Unpin for Waiting<T, R> {}

impl<T, R: WaitResult> Future for Waiting<T, R> {
    type Output = R::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<R::Output> {
        let this = self.get_mut();
        // Ready(None) cannot happen: the sender sits in the listener we keep bound
        while let Poll::Ready(Some(value)) = this.values.poll_recv(cx) {
            if let Some(output) = (this.predicate)(&value).result() {
                return Poll::Ready(output);
            }
        }
        Poll::Pending
    }
}

impl<S> Wait<S::Element> for S
where S: Bindable
{
    fn wait_value(&self, target_value: S::Element) -> Waiting<S::Element, bool>
    where S::Element: PartialEq {
        self.wait_for(move |value| *value == target_value)
    }

    fn wait_for<F, R>(&self, predicate: F) -> Waiting<S::Element, R>
    where
        F: Fn(&S::Element) -> R + 'static,
        R: WaitResult,
    {
        let (tx, values) = tokio::sync::mpsc::unbounded_channel();
        let binding = self.bind(tx);
        Waiting { values, predicate: Box::new(predicate), _binding: binding, _output: PhantomData }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Computation, Variable};

    #[tokio::test]
    async fn test_wait_current_value() {
        let a = Variable::new(5);
        // Already satisfied: resolves from the replayed value
        a.read().wait_value(5).await;
        assert_eq!(a.subscription_count(), 0);
    }

    #[tokio::test]
    async fn test_wait_for_option_output() {
        let a = Variable::new(1);
        let b = Variable::new(1);
        let sum = Computation::combine(a.read(), b.read(), |a, b| a + b);

        let waiting = sum.wait_for(|sum| if *sum > 10 { Some(sum * 100) } else { None });
        a.set(4);
        b.set(9);
        assert_eq!(waiting.await, 1300);
    }

    #[test]
    fn test_dropping_future_releases_binding() {
        let a = Variable::new(0);
        let mut waiting = tokio_test::task::spawn(a.read().wait_value(3));
        tokio_test::assert_pending!(waiting.poll());
        assert_eq!(a.subscription_count(), 1);

        drop(waiting);
        assert_eq!(a.subscription_count(), 0);
    }

    #[tokio::test]
    async fn test_future_outlives_bindable() {
        fn when_even(a: &Variable<i32>) -> Waiting<i32, Option<i32>> {
            let halved = Computation::map(a.read(), |a| *a / 2);
            halved.wait_for(|half| (*half % 2 == 0).then_some(*half))
        }

        let a = Variable::new(2);
        let waiting = when_even(&a);
        a.set(6);
        a.set(8);
        assert_eq!(waiting.await, 4);
        assert_eq!(a.subscription_count(), 0);
    }
}
