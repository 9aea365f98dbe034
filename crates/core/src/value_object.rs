//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. In this
/// crate they are also the place where format validation lives: a value object
/// that exists has already been validated (see [`crate::EmailAddress`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
