use std::slice;

use crate::error::Error;
use crate::range::RangeProperty;

/// An ordered list of disjoint, maximal codepoint ranges.
///
/// Ranges are added in strictly ascending order with
/// [`add`](#method.add). Each insertion is merged into the most recently added
/// range whenever the two share a property and touch, so no two
/// consecutive ranges in the list can ever be merged. Memory use is bounded
/// by the number of output ranges, not input ranges.
///
/// The list has no explicit "finish" step. The most recent range stays
/// pending until the next insertion proves it complete, and reading the list
/// simply includes it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangeList<T> {
    completed: Vec<RangeProperty<T>>,
    in_progress: Option<RangeProperty<T>>,
}

impl<T> RangeList<T> {
    /// Create an empty range list.
    pub fn new() -> RangeList<T> {
        RangeList { completed: vec![], in_progress: None }
    }

    /// Return an iterator over every range in this list in ascending order.
    ///
    /// The iterator borrows the list, so it can be created any number of
    /// times and always yields the same sequence.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            completed: self.completed.iter(),
            in_progress: self.in_progress.as_ref(),
        }
    }

    /// The number of ranges in this list.
    pub fn len(&self) -> usize {
        self.completed.len() + self.in_progress.iter().count()
    }

    /// Returns true if and only if no range has been added to this list.
    pub fn is_empty(&self) -> bool {
        self.in_progress.is_none()
    }

    /// The last range in this list, if any.
    ///
    /// This is the range that the next call to `add` may be merged into.
    pub fn last(&self) -> Option<&RangeProperty<T>> {
        self.in_progress.as_ref()
    }
}

impl<T: Clone + PartialEq> RangeList<T> {
    /// Build a list by adding every range yielded by `ranges` in order.
    ///
    /// This stops at the first range that cannot be added.
    pub fn from_ranges<I>(ranges: I) -> Result<RangeList<T>, Error>
    where
        I: IntoIterator<Item = RangeProperty<T>>,
    {
        let mut list = RangeList::new();
        for range in ranges {
            list.add(range)?;
        }
        Ok(list)
    }

    /// Add a range to the end of this list.
    ///
    /// The range must start strictly after the end of the last range in the
    /// list. Otherwise an error is returned and the list is left unchanged.
    /// Duplicate, overlapping and backwards ranges are all rejected.
    pub fn add(&mut self, range: RangeProperty<T>) -> Result<(), Error> {
        let last = match self.in_progress.take() {
            None => {
                self.in_progress = Some(range);
                return Ok(());
            }
            Some(last) => last,
        };
        if range.start() <= last.end() {
            let err = Error::ordering_violation(last.bounds(), range.bounds());
            self.in_progress = Some(last);
            return Err(err);
        }
        if last.can_merge(&range) {
            self.in_progress = Some(last.merge(&range));
        } else {
            self.completed.push(last);
            self.in_progress = Some(range);
        }
        Ok(())
    }

    /// Return an owned copy of every range in this list.
    pub fn to_vec(&self) -> Vec<RangeProperty<T>> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RangeList<T> {
    fn default() -> RangeList<T> {
        RangeList::new()
    }
}

impl<'a, T> IntoIterator for &'a RangeList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a RangeProperty<T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for RangeList<T> {
    type IntoIter = IntoIter<T>;
    type Item = RangeProperty<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            completed: self.completed.into_iter(),
            in_progress: self.in_progress,
        }
    }
}

/// An iterator over the ranges of a [`RangeList`](struct.RangeList.html).
///
/// `'a` is the lifetime of the list being read.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    completed: slice::Iter<'a, RangeProperty<T>>,
    in_progress: Option<&'a RangeProperty<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a RangeProperty<T>;

    fn next(&mut self) -> Option<&'a RangeProperty<T>> {
        match self.completed.next() {
            Some(range) => Some(range),
            None => self.in_progress.take(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.completed.len() + self.in_progress.iter().count();
        (len, Some(len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An owning iterator over the ranges of a
/// [`RangeList`](struct.RangeList.html).
#[derive(Debug)]
pub struct IntoIter<T> {
    completed: std::vec::IntoIter<RangeProperty<T>>,
    in_progress: Option<RangeProperty<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = RangeProperty<T>;

    fn next(&mut self) -> Option<RangeProperty<T>> {
        match self.completed.next() {
            Some(range) => Some(range),
            None => self.in_progress.take(),
        }
    }
}
