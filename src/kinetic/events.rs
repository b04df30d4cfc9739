//! Pointer-enter listener registry.
//!
//! Every listener lives exactly as long as the [`Subscription`] returned when
//! it was added. Dropping the subscription (or calling
//! [`Subscription::dispose`]) removes the listener; dropping the registry
//! first makes later disposal a no-op.
//!
//! ```
//! use kinetic_folio::kinetic::PointerEvents;
//!
//! let events = PointerEvents::new();
//! let sub = events.on_enter(|now_ms| println!("enter at {now_ms}"));
//! assert_eq!(events.dispatch_enter(0), 1);
//! sub.dispose();
//! assert_eq!(events.dispatch_enter(1), 0);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<RefCell<dyn FnMut(u64)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Pointer-enter events for one rendering target. Single-threaded.
#[derive(Clone, Default)]
pub struct PointerEvents {
    inner: Rc<RefCell<Registry>>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; it fires on every pointer-enter until disposed.
    pub fn on_enter(&self, listener: impl FnMut(u64) + 'static) -> Subscription {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        reg.listeners.push((id, listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver a pointer-enter at `now_ms`. Returns how many listeners ran.
    ///
    /// Listeners are snapshotted first, so a listener may subscribe or
    /// dispose others without invalidating this dispatch. A listener may also
    /// dispatch again; the nested dispatch skips any listener that is still
    /// running, so each listener is at most one frame deep.
    pub fn dispatch_enter(&self, now_ms: u64) -> usize {
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        let mut ran = 0;
        for listener in &snapshot {
            let Ok(mut f) = listener.try_borrow_mut() else {
                tracing::trace!(now_ms, "skipping listener already in dispatch");
                continue;
            };
            (&mut *f)(now_ms);
            ran += 1;
        }
        ran
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl std::fmt::Debug for PointerEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped ownership of one listener.
#[must_use = "dropping a Subscription removes its listener immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the listener now.
    pub fn dispose(self) {
        // Drop does the work.
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        let Some(reg) = self.registry.upgrade() else {
            return false;
        };
        let registered = reg.borrow().listeners.iter().any(|(id, _)| *id == self.id);
        registered
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(reg) = self.registry.upgrade() {
            reg.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn listener_fires_on_every_enter() {
        let events = PointerEvents::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let _sub = events.on_enter(move |_| h.set(h.get() + 1));

        events.dispatch_enter(0);
        events.dispatch_enter(5);
        events.dispatch_enter(9);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn dropped_subscription_receives_nothing() {
        let events = PointerEvents::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let sub = events.on_enter(move |_| h.set(h.get() + 1));
        assert!(sub.is_active());
        drop(sub);

        assert_eq!(events.dispatch_enter(0), 0);
        assert_eq!(hits.get(), 0);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn dispose_only_removes_its_own_listener() {
        let events = PointerEvents::new();
        let a = events.on_enter(|_| {});
        let b = events.on_enter(|_| {});
        a.dispose();
        assert!(b.is_active());
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn disposing_after_registry_is_gone_is_harmless() {
        let events = PointerEvents::new();
        let sub = events.on_enter(|_| {});
        drop(events);
        assert!(!sub.is_active());
        sub.dispose();
    }

    #[test]
    fn listener_sees_dispatch_time() {
        let events = PointerEvents::new();
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let _sub = events.on_enter(move |t| s.set(t));
        events.dispatch_enter(1234);
        assert_eq!(seen.get(), 1234);
    }

    #[test]
    fn nested_dispatch_skips_the_running_listener() {
        let events = PointerEvents::new();
        let nested_ran = Rc::new(Cell::new(usize::MAX));
        let inner = events.clone();
        let n = Rc::clone(&nested_ran);
        let _redispatch = events.on_enter(move |t| {
            if t == 0 {
                n.set(inner.dispatch_enter(t + 1));
            }
        });
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let _counter = events.on_enter(move |_| h.set(h.get() + 1));

        assert_eq!(events.dispatch_enter(0), 2);
        assert_eq!(nested_ran.get(), 1);
        assert_eq!(hits.get(), 2);
    }
}
