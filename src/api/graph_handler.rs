use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::ScopeRect;

/// Callback invoked with the current scope after every graph change.
pub type GraphListener = Box<dyn FnMut(ScopeRect)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Default)]
struct ListenerRegistry {
    next_id: u64,
    // Insertion order is dispatch order.
    listeners: IndexMap<ListenerId, Rc<RefCell<GraphListener>>>,
}

/// Parent controller that owns the scope rectangle and announces changes.
///
/// Single-threaded: listeners are shared through `Rc`, so neither the handler
/// nor its subscriptions are `Send`.
pub struct GraphHandler {
    scope_rect: ScopeRect,
    registry: Rc<RefCell<ListenerRegistry>>,
}

impl GraphHandler {
    #[must_use]
    pub fn new(scope_rect: ScopeRect) -> Self {
        Self {
            scope_rect,
            registry: Rc::new(RefCell::new(ListenerRegistry::default())),
        }
    }

    #[must_use]
    pub fn scope_rect(&self) -> ScopeRect {
        self.scope_rect
    }

    /// Replaces the scope and notifies every listener.
    pub fn set_scope_rect(&mut self, scope_rect: ScopeRect) -> usize {
        self.scope_rect = scope_rect;
        self.notify()
    }

    /// Registers `listener`; it stays registered until the returned token is
    /// dropped or `unsubscribe`d.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl FnMut(ScopeRect) + 'static) -> GraphSubscription {
        let listener: GraphListener = Box::new(listener);
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id = registry.next_id.saturating_add(1);
        registry
            .listeners
            .insert(id, Rc::new(RefCell::new(listener)));
        debug!(
            listener = id.raw(),
            count = registry.listeners.len(),
            "graph listener subscribed"
        );

        GraphSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Fires the change notification and returns how many listeners ran.
    ///
    /// Listeners added during dispatch first run on the next notification.
    /// Listeners removed during dispatch are not called once removed.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<(ListenerId, Rc<RefCell<GraphListener>>)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        trace!(listeners = snapshot.len(), "notify graph update");

        let mut delivered = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().listeners.contains_key(&id) {
                continue;
            }
            let Ok(mut callback) = listener.try_borrow_mut() else {
                warn!(listener = id.raw(), "skipping re-entrant graph notification");
                continue;
            };
            (*callback)(self.scope_rect);
            delivered += 1;
        }
        delivered
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl fmt::Debug for GraphHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphHandler")
            .field("scope_rect", &self.scope_rect)
            .field("listener_count", &self.listener_count())
            .finish()
    }
}

/// Registration token returned by `GraphHandler::subscribe`.
///
/// Dropping it removes the listener. Outliving the handler is fine.
#[derive(Debug)]
pub struct GraphSubscription {
    id: ListenerId,
    registry: Weak<RefCell<ListenerRegistry>>,
}

impl GraphSubscription {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Returns `true` while the handler is alive and still holds this listener.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().listeners.contains_key(&self.id))
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for GraphSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let Ok(mut registry) = registry.try_borrow_mut() else {
            warn!(
                listener = self.id.raw(),
                "graph registry busy; listener not removed"
            );
            return;
        };
        let removed = registry.listeners.shift_remove(&self.id);
        let count = registry.listeners.len();
        // The listener may own other subscriptions whose drop needs the registry.
        drop(registry);
        if removed.is_some() {
            debug!(listener = self.id.raw(), count, "graph listener unsubscribed");
        }
        drop(removed);
    }
}
