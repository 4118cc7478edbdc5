use crate::error::Error;
use crate::list::RangeList;

/// Rebuild `list` with every property replaced by `mapping(property)`.
///
/// Ranges are re-added to a fresh list in their original order, so any
/// neighbours whose new properties are equal, and which touch, are merged.
/// Mapping every general category to "is zero width" this way leaves one
/// range per contiguous run of zero width categories.
///
/// The source list is ascending and disjoint, so this only fails if that
/// no longer holds.
pub fn transform<T, U, F>(
    list: &RangeList<T>,
    mut mapping: F,
) -> Result<RangeList<U>, Error>
where
    U: Clone + PartialEq,
    F: FnMut(&T) -> U,
{
    try_transform(list, |prop| Ok::<U, Error>(mapping(prop)))
}

/// Like [`transform`](fn.transform.html), but with a mapping that may fail.
///
/// The first error returned by `mapping` is returned unchanged and no list
/// is produced.
pub fn try_transform<T, U, E, F>(
    list: &RangeList<T>,
    mut mapping: F,
) -> Result<RangeList<U>, E>
where
    U: Clone + PartialEq,
    E: From<Error>,
    F: FnMut(&T) -> Result<U, E>,
{
    let mut new_list = RangeList::new();
    for range in list {
        let property = mapping(range.property())?;
        new_list.add(range.with_property(property))?;
    }
    Ok(new_list)
}
