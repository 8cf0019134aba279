// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Observable presentation-layer state model for swipeable card stack UI
//! widgets (dating-app-style card decks). The crate tracks an ordered
//! collection of identity-bearing items, which item is current, and the
//! direction each dismissed item was swiped with. A declarative view layer
//! subscribes to the model and re-renders on every state change; gesture
//! recognition, animation, and rendering live outside this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base;
pub mod direction;
pub mod events;
pub mod identity;
pub mod model;
pub mod observe;

pub use direction::SwipeDirection;
pub use events::StackEvent;
pub use identity::Identifiable;
pub use model::{CardStackModel, StackEntry};
pub use observe::SubscriptionId;
