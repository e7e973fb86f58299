use std::any::Any;
use std::cmp::Reverse;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::AppResult;
use crate::input::KeyInput;

/// A keyboard-command handler installed in a [`DispatchRegistry`].
///
/// Returning `Ok(true)` claims the event and stops dispatch. `Ok(false)` and
/// `Err(_)` both let the event fall through to the next handler.
pub trait KeyHandler<C> {
    fn handle(&mut self, ctx: &mut C, input: &mut KeyInput) -> AppResult<bool>;
}

impl<C, F> KeyHandler<C> for F
where
    F: FnMut(&mut C, &mut KeyInput) -> AppResult<bool>,
{
    fn handle(&mut self, ctx: &mut C, input: &mut KeyInput) -> AppResult<bool> {
        self(ctx, input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: String,
    pub priority: i32,
    /// Registration order; breaks ties between equal priorities.
    pub sequence: u64,
}

struct Entry<C> {
    id: String,
    priority: i32,
    sequence: u64,
    enabled: bool,
    handler: Box<dyn KeyHandler<C>>,
}

impl<C> Entry<C> {
    fn order_key(&self) -> (Reverse<i32>, u64) {
        (Reverse(self.priority), self.sequence)
    }
}

/// Ordered set of named key handlers sharing one input device.
///
/// Entries are kept sorted by `(priority DESC, sequence ASC)`. Only
/// [`DispatchRegistry::unregister`] removes an entry; disabled entries keep
/// their slot and return to it when re-enabled.
pub struct DispatchRegistry<C> {
    entries: Vec<Entry<C>>,
    next_sequence: u64,
}

impl<C> Default for DispatchRegistry<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_sequence: 0,
        }
    }
}

impl<C> DispatchRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler` under `id`, replacing any entry with the same id.
    ///
    /// A replacement keeps the sequence number of the entry it replaces.
    pub fn register<H>(
        &mut self,
        id: impl Into<String>,
        priority: i32,
        handler: H,
        enabled: bool,
    ) -> Registration
    where
        H: KeyHandler<C> + 'static,
    {
        let id = id.into();
        let sequence = match self.position(&id) {
            Some(index) => {
                let previous = self.entries.remove(index);
                tracing::debug!(
                    id = %id,
                    old_priority = previous.priority,
                    new_priority = priority,
                    "replacing key handler registration"
                );
                previous.sequence
            }
            None => self.take_sequence(),
        };

        let entry = Entry {
            id: id.clone(),
            priority,
            sequence,
            enabled,
            handler: Box::new(handler),
        };
        let key = entry.order_key();
        let insert_at = self.entries.partition_point(|e| e.order_key() < key);
        self.entries.insert(insert_at, entry);

        Registration {
            id,
            priority,
            sequence,
        }
    }

    /// Removes the entry for `id`. Returns whether anything was removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Toggles participation in dispatch. Returns `false` when `id` is not
    /// installed.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn is_enabled(&self, id: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.enabled)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids of enabled handlers in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.id.as_str())
            .collect()
    }

    /// Offers `input` to enabled handlers from highest to lowest priority
    /// until one claims it. Returns whether the event was claimed.
    ///
    /// A handler that errors or panics is logged and skipped.
    pub fn dispatch(&mut self, ctx: &mut C, input: &mut KeyInput) -> bool {
        for entry in self.entries.iter_mut().filter(|entry| entry.enabled) {
            let result = catch_unwind(AssertUnwindSafe(|| entry.handler.handle(ctx, input)));
            match result {
                Ok(Ok(true)) => {
                    tracing::trace!(id = %entry.id, key = ?input.key_code(), "key claimed");
                    return true;
                }
                Ok(Ok(false)) => {}
                Ok(Err(err)) => {
                    tracing::warn!(id = %entry.id, error = %err, "key handler failed");
                }
                Err(payload) => {
                    tracing::error!(
                        id = %entry.id,
                        panic = panic_message(payload.as_ref()),
                        "key handler panicked"
                    );
                }
            }
        }
        false
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn take_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        sequence
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
