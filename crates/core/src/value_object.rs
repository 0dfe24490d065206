//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their contents.
///
/// `ItemName` and `Quantity` implement it; neither carries identity, so two
/// instances holding the same value are interchangeable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
