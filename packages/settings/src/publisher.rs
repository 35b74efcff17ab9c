// ABOUTME: Change notification channel owned by a settings container
// ABOUTME: Single-threaded fan-out of a no-argument "will change" signal

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Handle returned by [`ChangePublisher::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Publishes "something changed" to every subscriber
///
/// Callbacks run synchronously inside [`send`](Self::send) and may read the
/// owning container. Subscriptions added while a send is in progress are
/// first called on the next send.
#[derive(Default)]
pub struct ChangePublisher {
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
    next_id: Cell<u64>,
    sent: Cell<u64>,
}

impl fmt::Debug for ChangePublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePublisher")
            .field("subscribers", &self.subscribers.borrow().len())
            .field("sent", &self.sent.get())
            .finish()
    }
}

impl ChangePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn send(&self) {
        self.sent.set(self.sent.get() + 1);

        // Snapshot so callbacks can subscribe or unsubscribe without a borrow conflict
        let callbacks: Vec<Callback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in callbacks {
            callback();
        }
    }

    /// Total number of sends since creation
    pub fn send_count(&self) -> u64 {
        self.sent.get()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
