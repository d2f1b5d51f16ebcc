//! The boundary to whoever owns the picker's value.
//!
//! Local changes leave through [`StateChannel::write`]. External changes
//! arrive as explicit "replace local value" messages held in a
//! [`Mailbox`]; the owner never mutates the picker's state directly.

use alloc::{boxed::Box, rc::Rc, vec::Vec};
use core::cell::RefCell;
use core::fmt;

use serde_json::Value;

use crate::SyncError;

/// Callback invoked with each externally changed value.
pub type ChangeHandler = Box<dyn Fn(Value)>;

/// Two-way channel to the external owner of a picker value.
pub trait StateChannel {
    /// Current stored value.
    ///
    /// # Errors
    ///
    /// Returns an error when the owner cannot be read.
    fn read(&self) -> Result<Value, SyncError>;

    /// Stores a new value. Fire-and-forget: no acknowledgment is awaited.
    ///
    /// # Errors
    ///
    /// Returns an error when the owner rejects the value.
    fn write(&self, value: Value) -> Result<(), SyncError>;

    /// Registers `handler` for values changed by the owner. The handler
    /// stays registered until the returned [`Subscription`] is dropped.
    fn subscribe(&self, handler: ChangeHandler) -> Subscription;
}

impl<C: StateChannel + ?Sized> StateChannel for Rc<C> {
    fn read(&self) -> Result<Value, SyncError> {
        (**self).read()
    }

    fn write(&self, value: Value) -> Result<(), SyncError> {
        (**self).write(value)
    }

    fn subscribe(&self, handler: ChangeHandler) -> Subscription {
        (**self).subscribe(handler)
    }
}

/// Keeps a change handler registered while alive.
#[must_use]
pub struct Subscription {
    guard: Option<Box<dyn core::any::Any>>,
}

impl Subscription {
    /// Holds `guard` (a watcher guard, a closure, anything whose drop
    /// unregisters) for the lifetime of the subscription.
    pub fn new<G: 'static>(guard: G) -> Self {
        Self {
            guard: Some(Box::new(guard)),
        }
    }

    /// A subscription that never delivers anything.
    pub const fn none() -> Self {
        Self { guard: None }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.guard.is_some())
            .finish()
    }
}

/// The newest external value not yet applied. Later notifications overwrite
/// earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    latest: Rc<RefCell<Option<Value>>>,
}

impl Mailbox {
    /// A handler that stores the value it receives, replacing any pending one.
    #[must_use]
    pub fn handler(&self) -> ChangeHandler {
        let latest = Rc::clone(&self.latest);
        Box::new(move |value| *latest.borrow_mut() = Some(value))
    }

    /// Takes the pending value, if any.
    pub fn take_latest(&self) -> Option<Value> {
        self.latest.borrow_mut().take()
    }

    /// Whether a value is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.latest.borrow().is_some()
    }

    /// Whether nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_pending()
    }
}

type Listeners = Rc<RefCell<Vec<(u64, Rc<dyn Fn(Value)>)>>>;

/// An in-memory owner, e.g. a form record held by the host process.
///
/// Writes notify every subscriber synchronously, including the writer's own
/// subscription; pickers skip such echoes because they equal their local
/// value.
#[derive(Clone, Default)]
pub struct MemoryChannel {
    value: Rc<RefCell<Value>>,
    listeners: Listeners,
    next_id: Rc<RefCell<u64>>,
}

impl MemoryChannel {
    /// Creates an owner holding `initial`.
    #[must_use]
    pub fn new(initial: Value) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            ..Self::default()
        }
    }

    /// Current stored value.
    #[must_use]
    pub fn get(&self) -> Value {
        self.value.borrow().clone()
    }

    /// Changes the value from the owner's side and notifies subscribers.
    pub fn set(&self, value: Value) {
        *self.value.borrow_mut() = value.clone();
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(value.clone());
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for MemoryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryChannel")
            .field("value", &self.value.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl StateChannel for MemoryChannel {
    fn read(&self) -> Result<Value, SyncError> {
        Ok(self.get())
    }

    fn write(&self, value: Value) -> Result<(), SyncError> {
        self.set(value);
        Ok(())
    }

    fn subscribe(&self, handler: ChangeHandler) -> Subscription {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.listeners.borrow_mut().push((id, Rc::from(handler)));

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(Unsubscribe(Some(Box::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        }))))
    }
}

struct Unsubscribe(Option<Box<dyn FnOnce()>>);

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.0.take() {
            unsubscribe();
        }
    }
}
