// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Error types for the card stack crate.
//!
//! Stack operations themselves never fail; invalid preconditions degrade to
//! silent no-ops. Errors only arise on the parsing surfaces around the
//! model, such as reading a [`SwipeDirection`](crate::SwipeDirection) from a
//! string.

/// A result type alias for card stack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the card stack crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A direction name did not match any known swipe direction.
    #[error("unknown swipe direction: {0:?}")]
    UnknownDirection(String),

    /// A generic error with a message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a new error with a message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Message(msg.into())
    }
}
