//! Ordering policies for [`Tree`][crate::tree::Tree].
//!
//! A tree decides left/right placement on insert by asking its policy
//! whether one value sorts strictly before another. The policy is chosen
//! when the tree is constructed and applied uniformly for the tree's
//! whole lifetime; [`Natural`] (the `Ord` ordering of the value type) is
//! the default, and any `Fn(&T, &T) -> bool` closure also works.

/// A strict total order over values of type `T`.
///
/// Implementations must be consistent: for any `a` and `b`, at most one
/// of `is_less(a, b)` and `is_less(b, a)` holds, and the relation is
/// transitive. The tree only ever asks "does the inserted value sort
/// strictly before this node's value?" so a single method suffices.
pub trait TotalOrder<T> {
    /// Returns `true` when `a` sorts strictly before `b`.
    fn is_less(&self, a: &T, b: &T) -> bool;
}

/// The natural ordering of `T` as given by its [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use ordtree::order::{Natural, TotalOrder};
///
/// assert!(Natural.is_less(&1, &2));
/// assert!(!Natural.is_less(&2, &2));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T> TotalOrder<T> for Natural
where
    T: Ord,
{
    fn is_less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Any `Fn(&T, &T) -> bool` closure is usable as an ad-hoc order.
///
/// # Examples
///
/// ```
/// use ordtree::order::TotalOrder;
///
/// let reversed = |a: &i32, b: &i32| b < a;
/// assert!(reversed.is_less(&2, &1));
/// ```
impl<T, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn is_less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_matches_ord() {
        assert!(Natural.is_less(&-1, &0));
        assert!(!Natural.is_less(&0, &-1));
        assert!(!Natural.is_less(&0, &0));
    }

    #[test]
    fn closure_order() {
        let by_length = |a: &&str, b: &&str| a.len() < b.len();
        assert!(by_length.is_less(&"ab", &"abc"));
        assert!(!by_length.is_less(&"abc", &"ab"));
    }
}
