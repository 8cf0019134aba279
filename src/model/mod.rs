// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The card stack model: ordered entries plus a current-position cursor.
//!
//! [`CardStackModel`] owns a sequence of [`StackEntry`] in insertion order
//! (index 0 is the first card) and an optional cursor to the current entry.
//! Entries before the cursor have been swiped and carry a direction; entries
//! at or after it are pending. The cursor is `None` when the stack is empty
//! or every entry has been swiped.
//!
//! All mutation is synchronous and single-threaded; the caller (typically a
//! UI event loop) serializes access. No operation fails: invalid
//! preconditions degrade to silent no-ops that skip both the swipe
//! completion callback and subscriber notification.

use crate::events::StackEvent;
use crate::identity::Identifiable;
use crate::observe::{Subscribers, SubscriptionId};
use std::fmt;
use tracing::trace;

/// One wrapped item plus the direction it was dismissed with, if any.
///
/// Entries are passive data holders; only the owning [`CardStackModel`]
/// mutates them, and only their direction field, via swipe and unswipe.
#[derive(Debug, Clone)]
pub struct StackEntry<T, D> {
    element: T,
    direction: Option<D>,
}

impl<T: Identifiable, D> StackEntry<T, D> {
    fn new(element: T) -> Self {
        Self {
            element,
            direction: None,
        }
    }

    /// Returns the identity key, delegated to the wrapped element.
    pub fn id(&self) -> T::Id {
        self.element.id()
    }

    /// Returns the wrapped element.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Returns the direction this entry was swiped with, or `None` while it
    /// is still pending.
    pub fn direction(&self) -> Option<&D> {
        self.direction.as_ref()
    }

    /// Returns `true` if this entry has been swiped away.
    pub fn is_swiped(&self) -> bool {
        self.direction.is_some()
    }
}

/// Entry equality compares identity keys only. Two entries with the same
/// key but different directions or element state are considered equal.
impl<T: Identifiable, D> PartialEq for StackEntry<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// The observable card stack model.
///
/// Created from an initial element list (possibly empty), with the cursor at
/// the first entry. A view layer reads [`entries`](Self::entries) and
/// [`current_index`](Self::current_index) to render the visible cards,
/// drives the stack through [`swipe`](Self::swipe),
/// [`unswipe`](Self::unswipe), [`add_element`](Self::add_element),
/// [`remove_from_data`](Self::remove_from_data), and
/// [`set_elements`](Self::set_elements) in response to gestures, and
/// re-renders on the events delivered to [`subscribe`](Self::subscribe)d
/// callbacks.
pub struct CardStackModel<T, D> {
    entries: Vec<StackEntry<T, D>>,
    current_index: Option<usize>,
    subscribers: Subscribers<StackEvent<D>>,
}

impl<T, D> fmt::Debug for CardStackModel<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardStackModel")
            .field("num_entries", &self.entries.len())
            .field("current_index", &self.current_index)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

impl<T: Identifiable, D> CardStackModel<T, D> {
    /// Creates a model wrapping `elements` in order, all pending.
    /// The cursor starts at 0, or `None` for an empty list.
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        let entries: Vec<_> = elements.into_iter().map(StackEntry::new).collect();
        let current_index = if entries.is_empty() { None } else { Some(0) };
        Self {
            entries,
            current_index,
            subscribers: Subscribers::new(),
        }
    }

    /// Returns the entries in stack order.
    pub fn entries(&self) -> &[StackEntry<T, D>] {
        &self.entries
    }

    /// Returns the cursor position, or `None` when the stack is empty or
    /// exhausted.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the entry at the cursor position, if any.
    pub fn current(&self) -> Option<&StackEntry<T, D>> {
        self.entries.get(self.current_index?)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when there is no current entry: the stack is empty or
    /// every entry has been swiped.
    pub fn is_exhausted(&self) -> bool {
        self.current_index.is_none()
    }

    /// Returns the entry's signed offset relative to the cursor: 0 for the
    /// frontmost card, negative for already-swiped entries, positive for
    /// upcoming ones. Entries are matched by identity; `None` for an
    /// unknown key.
    pub fn index_in_stack(&self, entry: &StackEntry<T, D>) -> Option<isize> {
        let id = entry.id();
        let position = self.entries.iter().position(|other| other.id() == id)?;
        let effective = self.current_index.unwrap_or(self.entries.len());
        Some(position as isize - effective as isize)
    }

    /// Registers a callback invoked synchronously after every effective
    /// mutation, in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StackEvent<D>) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Removes a subscriber. Returns `false` for an unknown id.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Replaces all entries with fresh pending entries wrapping `elements`
    /// in order, and resets the cursor to 0 (or `None` for an empty list).
    /// A hard reset: prior swipe history is discarded, not merged.
    pub fn set_elements(&mut self, elements: impl IntoIterator<Item = T>) {
        self.entries = elements.into_iter().map(StackEntry::new).collect();
        self.current_index = if self.entries.is_empty() { None } else { Some(0) };
        let count = self.entries.len();
        trace!(count, "set_elements");
        self.notify(StackEvent::Reset { count });
    }

    /// Appends a fresh pending entry at the end. The cursor is left
    /// untouched, even on a previously empty or exhausted stack.
    pub fn add_element(&mut self, element: T) {
        self.entries.push(StackEntry::new(element));
        let index = self.entries.len() - 1;
        trace!(index, "add_element");
        self.notify(StackEvent::Added { index });
    }

    /// Removes the entry at the cursor position.
    ///
    /// The position argument is accepted but ignored; removal always
    /// targets the cursor, and the cursor is left numerically unchanged, so
    /// afterwards it may point at a different entry or past the end of the
    /// shrunk sequence (see DESIGN.md). A no-op when the stack is exhausted
    /// or the cursor is already out of bounds.
    pub fn remove_from_data(&mut self, _at: usize) {
        let Some(index) = self.current_index else {
            return;
        };
        if index >= self.entries.len() {
            return;
        }
        self.entries.remove(index);
        trace!(index, "remove_from_data");
        self.notify(StackEvent::Removed { index });
    }

    /// Reverts the most recent swipe: clears the direction on the entry
    /// immediately before the cursor (the last entry, when the stack is
    /// exhausted) and steps the cursor back onto it. A silent no-op when
    /// nothing has been swiped yet. Only ever steps back one position.
    pub fn unswipe(&mut self) {
        let effective = self.current_index.unwrap_or(self.entries.len());
        let Some(previous) = effective.checked_sub(1) else {
            return;
        };
        self.entries[previous].direction = None;
        self.current_index = Some(previous);
        trace!(current_index = previous, "unswipe");
        self.notify(StackEvent::Unswiped {
            current_index: previous,
        });
    }

    fn notify(&mut self, event: StackEvent<D>) {
        self.subscribers.notify(&event);
    }
}

impl<T: Identifiable, D: Clone> CardStackModel<T, D> {
    /// Dismisses the current entry with `direction` and advances the
    /// cursor, to `None` when this was the last entry. The completion
    /// callback runs synchronously after the state change (and after
    /// subscriber notification), receiving the direction. A no-op that
    /// skips both the callback and notification when there is no current
    /// entry.
    pub fn swipe(&mut self, direction: D, completion: impl FnOnce(&D)) {
        let Some(index) = self.current_index else {
            return;
        };
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        entry.direction = Some(direction.clone());

        let next = index + 1;
        self.current_index = if next < self.entries.len() {
            Some(next)
        } else {
            None
        };

        trace!(index, current_index = ?self.current_index, "swipe");
        self.notify(StackEvent::Swiped {
            direction: direction.clone(),
            current_index: self.current_index,
        });
        completion(&direction);
    }
}

impl<T: Identifiable, D> Default for CardStackModel<T, D> {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

/// Model equality compares the entry sequences, which themselves compare
/// by identity only. Cursor position and swipe directions do not
/// participate.
impl<T: Identifiable, D> PartialEq for CardStackModel<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
