//! Records that keep their identity while their attributes change.

use core::fmt::Debug;
use core::hash::Hash;

/// A record addressed by a stable identifier.
///
/// Stores key clients and users by [`Entity::id`]; two records with the same
/// id are the same client or user even if their other fields differ.
pub trait Entity {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> &Self::Id;

    /// True when both records refer to the same client or user.
    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
