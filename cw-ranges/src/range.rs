use std::cmp;
use std::fmt;

use crate::error::Error;

/// An inclusive range of codepoints that all share one property value.
///
/// A `RangeProperty` always satisfies `start() <= end()`. The only way to get
/// one is through [`RangeProperty::new`](#method.new), which refuses inverted
/// bounds, or through [`merge`](#method.merge), which widens two valid ranges.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RangeProperty<T> {
    start: u32,
    end: u32,
    property: T,
}

impl<T> RangeProperty<T> {
    /// Create a new range covering `start..=end` tagged with `property`.
    ///
    /// This returns an error if `start` is greater than `end`.
    pub fn new(
        start: u32,
        end: u32,
        property: T,
    ) -> Result<RangeProperty<T>, Error> {
        if start > end {
            return Err(Error::invalid_range(start, end));
        }
        Ok(RangeProperty { start, end, property })
    }

    /// The first codepoint in this range.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// The last codepoint in this range. Inclusive.
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Both bounds of this range as an inclusive `(start, end)` pair.
    pub fn bounds(&self) -> (u32, u32) {
        (self.start, self.end)
    }

    /// The property shared by every codepoint in this range.
    pub fn property(&self) -> &T {
        &self.property
    }

    /// Returns true if and only if the given codepoint is in this range.
    pub fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }

    /// Return a range with the same bounds and a different property.
    ///
    /// The bounds were already validated, so this cannot fail.
    pub fn with_property<U>(&self, property: U) -> RangeProperty<U> {
        RangeProperty { start: self.start, end: self.end, property }
    }

    /// Consume this range, returning its property.
    pub fn into_property(self) -> T {
        self.property
    }
}

impl<T: PartialEq> RangeProperty<T> {
    /// Returns true if and only if `self` and `other` share a property and
    /// either overlap or touch, with no codepoint between them.
    ///
    /// Two equal properties one codepoint apart are not mergeable: the
    /// missing codepoint may belong to a different property.
    pub fn can_merge(&self, other: &RangeProperty<T>) -> bool {
        if self.property != other.property {
            return false;
        }
        !(self.end.saturating_add(1) < other.start
            || other.end.saturating_add(1) < self.start)
    }
}

impl<T: Clone> RangeProperty<T> {
    /// Create a range spanning both `self` and `other`, keeping the property
    /// of `self`.
    ///
    /// This does not check whether the two can be merged. Callers should
    /// consult [`can_merge`](#method.can_merge) first; otherwise the result
    /// covers any gap between the two and drops the property of `other`.
    pub fn merge(&self, other: &RangeProperty<T>) -> RangeProperty<T> {
        RangeProperty {
            start: cmp::min(self.start, other.start),
            end: cmp::max(self.end, other.end),
            property: self.property.clone(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for RangeProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{:04X};{}", self.start, self.property)
        } else {
            write!(
                f,
                "{:04X}..{:04X};{}",
                self.start, self.end, self.property
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RangeProperty;

    fn range(
        start: u32,
        end: u32,
        prop: &'static str,
    ) -> RangeProperty<&'static str> {
        RangeProperty::new(start, end, prop).unwrap()
    }

    #[test]
    fn inverted_bounds() {
        let err = RangeProperty::new(5, 3, "X").unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn single_codepoint() {
        let r = range(0x41, 0x41, "Lu");
        assert_eq!(r.bounds(), (0x41, 0x41));
        assert!(r.contains(0x41));
        assert!(!r.contains(0x42));
    }

    #[test]
    fn merge_adjacent() {
        let a = range(1, 5, "A");
        let b = range(6, 10, "A");
        assert!(a.can_merge(&b));
        assert!(b.can_merge(&a));
        assert_eq!(a.merge(&b), range(1, 10, "A"));
    }

    #[test]
    fn merge_overlapping() {
        let a = range(1, 8, "A");
        let b = range(4, 10, "A");
        assert!(a.can_merge(&b));
        assert_eq!(b.merge(&a), range(1, 10, "A"));
    }

    #[test]
    fn gap_is_not_mergeable() {
        let a = range(1, 5, "A");
        let b = range(7, 10, "A");
        assert!(!a.can_merge(&b));
        assert!(!b.can_merge(&a));
    }

    #[test]
    fn different_property_is_not_mergeable() {
        let a = range(1, 5, "A");
        let b = range(6, 10, "B");
        assert!(!a.can_merge(&b));
    }

    #[test]
    fn no_overflow_at_top() {
        let a = range(u32::MAX - 1, u32::MAX, "A");
        let b = range(0, 3, "A");
        assert!(!a.can_merge(&b));
        assert!(!b.can_merge(&a));
    }

    #[test]
    fn display() {
        assert_eq!(range(0x300, 0x36F, "Mn").to_string(), "0300..036F;Mn");
        assert_eq!(range(0xAD, 0xAD, "Cf").to_string(), "00AD;Cf");
    }
}
