// Copyright (c) 2025, Card Stack Contributors. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Identity capability for items placed on a card stack.

/// A type with a stable identity key.
///
/// The stack matches entries by this key (for example when computing visual
/// stacking offsets), so the key must not change for the lifetime of the
/// item, and the caller is responsible for keeping keys unique within one
/// stack. The crate performs no uniqueness validation of its own.
///
/// ```
/// use card_stack::Identifiable;
///
/// struct Profile {
///     user_id: u64,
///     name: String,
/// }
///
/// impl Identifiable for Profile {
///     type Id = u64;
///
///     fn id(&self) -> u64 {
///         self.user_id
///     }
/// }
/// ```
pub trait Identifiable {
    /// The identity key type.
    type Id: PartialEq;

    /// Returns the identity key of this value.
    fn id(&self) -> Self::Id;
}
