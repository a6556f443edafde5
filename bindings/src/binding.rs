use std::cell::RefCell;

/// A handle for one active listener registration.
///
/// A binding is either a leaf, which owns the cleanup that detaches its listener from the source,
/// or a composite, which owns the bindings of every upstream source a computation listens to.
/// Dropping the binding releases it: a leaf runs its cleanup exactly once, a composite drops
/// all of its children. There is no way to detach a listener while keeping the binding alive.
///
/// To keep a binding alive beyond the current scope, hand it to a [`BindingGroup`].
#[must_use = "the listener is detached as soon as the binding is dropped"]
pub struct Binding(Kind);

enum Kind {
    Leaf(Option<Box<dyn FnOnce()>>),
    Composite(Vec<Binding>),
}

impl Binding {
    /// Create a leaf binding which runs `unbind` when released
    pub fn unbind<F>(unbind: F) -> Self
    where F: FnOnce() + 'static {
        Self(Kind::Leaf(Some(Box::new(unbind))))
    }

    /// Create a composite binding which releases all of `bindings` when released
    pub fn group(bindings: Vec<Binding>) -> Self { Self(Kind::Composite(bindings)) }

    /// Move this binding into `group`, tying its lifetime to the group's
    pub fn bind_lifetime(self, group: &BindingGroup) { group.take(self) }
}

impl Drop for Binding {
    fn drop(&mut self) {
        // Composite children are released by dropping the Vec
        if let Kind::Leaf(unbind) = &mut self.0 {
            if let Some(unbind) = unbind.take() {
                tracing::trace!("releasing binding");
                unbind();
            }
        }
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Kind::Leaf(_) => f.write_str("Binding::Leaf"),
            Kind::Composite(children) => f.debug_tuple("Binding::Composite").field(children).finish(),
        }
    }
}

/// Owns a set of bindings and releases them all when it is dropped (or cleared).
#[derive(Default)]
pub struct BindingGroup(RefCell<Vec<Binding>>);

impl BindingGroup {
    pub fn new() -> Self { Self::default() }

    /// Take ownership of `binding`; it stays alive at least as long as this group
    pub fn take(&self, binding: Binding) { self.0.borrow_mut().push(binding) }

    pub fn len(&self) -> usize { self.0.borrow().len() }

    pub fn is_empty(&self) -> bool { self.0.borrow().is_empty() }

    /// Release every binding held so far. The group can keep taking bindings afterwards.
    pub fn clear(&self) {
        // Released bindings may touch this group from their cleanup, so drop them outside the borrow
        let bindings = std::mem::take(&mut *self.0.borrow_mut());
        drop(bindings);
    }
}

impl std::fmt::Debug for BindingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_struct("BindingGroup").field("bindings", &self.len()).finish() }
}
