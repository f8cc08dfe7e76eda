//! Dedicated transitions for the Product actor.

/// Fixed state changes for a [`Product`](crate::model::Product).
///
/// There is no "mark available". Reverting goes through the general update
/// with `isSoldOut: false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductTransition {
    /// Sets `is_sold_out` to true, whatever its current value.
    MarkSoldOut,
}
