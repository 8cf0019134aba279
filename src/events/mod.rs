// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Change events published to stack subscribers.

use std::fmt;

/// A change notification emitted after a mutating stack operation.
///
/// Events describe what changed and where the cursor landed; a view layer
/// typically marks itself dirty on any event and re-reads the model's
/// accessors when it next renders. Calls whose preconditions do not hold
/// emit no event at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackEvent<D> {
    /// The entries were replaced wholesale and the cursor reset.
    Reset {
        /// Number of entries after the replacement.
        count: usize,
    },
    /// An entry was appended at the end of the stack.
    Added {
        /// Position of the new entry.
        index: usize,
    },
    /// The entry at the cursor position was removed.
    Removed {
        /// Position the entry was removed from.
        index: usize,
    },
    /// The current entry was dismissed.
    Swiped {
        /// The direction the entry was dismissed with.
        direction: D,
        /// Cursor position after the swipe; `None` when the stack is
        /// exhausted.
        current_index: Option<usize>,
    },
    /// The most recent swipe was reverted.
    Unswiped {
        /// Cursor position after stepping back.
        current_index: usize,
    },
}

impl<D> StackEvent<D> {
    /// Returns the short name of the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StackEvent::Reset { .. } => "reset",
            StackEvent::Added { .. } => "added",
            StackEvent::Removed { .. } => "removed",
            StackEvent::Swiped { .. } => "swiped",
            StackEvent::Unswiped { .. } => "unswiped",
        }
    }
}

impl<D: fmt::Debug> fmt::Display for StackEvent<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEvent::Reset { count } => write!(f, "reset({})", count),
            StackEvent::Added { index } => write!(f, "added({})", index),
            StackEvent::Removed { index } => write!(f, "removed({})", index),
            StackEvent::Swiped {
                direction,
                current_index,
            } => write!(f, "swiped({:?} -> {:?})", direction, current_index),
            StackEvent::Unswiped { current_index } => {
                write!(f, "unswiped(-> {})", current_index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::SwipeDirection;

    #[test]
    fn test_event_kind() {
        let event: StackEvent<SwipeDirection> = StackEvent::Reset { count: 3 };
        assert_eq!(event.kind(), "reset");

        let event = StackEvent::Swiped {
            direction: SwipeDirection::Left,
            current_index: Some(1),
        };
        assert_eq!(event.kind(), "swiped");
    }

    #[test]
    fn test_event_display() {
        let event: StackEvent<SwipeDirection> = StackEvent::Reset { count: 3 };
        assert_eq!(event.to_string(), "reset(3)");

        let event = StackEvent::Swiped {
            direction: SwipeDirection::Right,
            current_index: None,
        };
        assert_eq!(event.to_string(), "swiped(Right -> None)");

        let event: StackEvent<SwipeDirection> = StackEvent::Unswiped { current_index: 2 };
        assert_eq!(event.to_string(), "unswiped(-> 2)");
    }
}
