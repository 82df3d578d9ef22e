//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Stock snapshots are the typical example: two snapshots holding the same
/// counts are interchangeable, no matter which product they were read from.
/// Value objects are immutable; to "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
