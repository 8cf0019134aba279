// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Subscription registry for synchronous change notification.
//!
//! The model owns its state privately and publishes changes through a
//! [`Subscribers`] list: callbacks registered with [`Subscribers::subscribe`]
//! are invoked synchronously, in registration order, once per effective
//! mutation. There is no batching, debouncing, or async dispatch; the
//! registry assumes a single-threaded caller such as a UI event loop.

use smallvec::SmallVec;
use std::fmt;

/// Identifies one registered subscriber.
///
/// Returned by [`Subscribers::subscribe`] and redeemed by
/// [`Subscribers::unsubscribe`]. Ids are never reused within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// An ordered list of subscriber callbacks.
pub struct Subscribers<E> {
    next_id: u64,
    entries: SmallVec<[(SubscriptionId, Callback<E>); 2]>,
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Subscribers<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: SmallVec::new(),
        }
    }

    /// Registers a callback and returns its id.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes the callback registered under `id`.
    /// Returns `false` if the id is unknown or already unsubscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(position) => {
                self.entries.remove(position);
                true
            }
            None => false,
        }
    }

    /// Invokes every callback with `event`, in registration order.
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    /// Returns the number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let first = Rc::clone(&seen);
        subscribers.subscribe(move |event: &u32| first.borrow_mut().push(("first", *event)));
        let second = Rc::clone(&seen);
        subscribers.subscribe(move |event: &u32| second.borrow_mut().push(("second", *event)));

        subscribers.notify(&7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::new();

        let sink = Rc::clone(&seen);
        let id = subscribers.subscribe(move |event: &u32| sink.borrow_mut().push(*event));

        subscribers.notify(&1);
        assert!(subscribers.unsubscribe(id));
        subscribers.notify(&2);

        assert_eq!(*seen.borrow(), vec![1]);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut subscribers: Subscribers<u32> = Subscribers::new();
        let id = subscribers.subscribe(|_| {});
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut subscribers: Subscribers<u32> = Subscribers::new();
        let first = subscribers.subscribe(|_| {});
        subscribers.unsubscribe(first);
        let second = subscribers.subscribe(|_| {});
        assert_ne!(first, second);
        assert_eq!(subscribers.len(), 1);
    }
}
