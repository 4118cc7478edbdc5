use std::collections::BTreeMap;
use std::path::Path;

use cw_parse::{self, UcdFileByRange};
use cw_ranges::{RangeList, RangeProperty};

use crate::error::Result;

/// Parse the UCD file `D` from the given directory into a range list keyed
/// by each record's property value.
pub fn parse_range_list<D, P>(ucd_dir: P) -> Result<RangeList<String>>
where
    D: UcdFileByRange,
    P: AsRef<Path>,
{
    let rows: Vec<D> = cw_parse::parse(&ucd_dir)?;
    tracing::debug!(
        file = %D::relative_file_path().display(),
        rows = rows.len(),
        "parsed UCD file"
    );
    if rows.is_empty() {
        tracing::warn!(
            file = %D::relative_file_path().display(),
            "UCD file has no records, emitting an empty table"
        );
    }
    let list = to_range_list(rows)?;
    tracing::debug!(
        file = %D::relative_file_path().display(),
        ranges = list.len(),
        "built range list"
    );
    Ok(list)
}

/// Build a range list from parsed records, sorting them first when the file
/// they come from is not in ascending order.
pub fn to_range_list<D: UcdFileByRange>(
    rows: Vec<D>,
) -> Result<RangeList<String>> {
    if D::ASCENDING {
        ranges_in_order(&rows)
    } else {
        ranges_sorted(rows)
    }
}

/// Build a range list from records that are already in ascending order.
///
/// Overlapping or out of order records are an error.
pub fn ranges_in_order<D: UcdFileByRange>(
    rows: &[D],
) -> Result<RangeList<String>> {
    let mut list = RangeList::new();
    for row in rows {
        let (start, end) = row.range();
        list.add(RangeProperty::new(start, end, row.property().to_string())?)?;
    }
    Ok(list)
}

/// Sort records by the start of their range, then build a range list.
pub fn ranges_sorted<D: UcdFileByRange>(
    mut rows: Vec<D>,
) -> Result<RangeList<String>> {
    rows.sort_by_key(|row| row.range().0);
    ranges_in_order(&rows)
}

/// Keep only the ranges whose property passes the given predicate.
///
/// The result is still a valid range list: dropping ranges only widens the
/// gaps between those that remain.
pub fn retain<T, F>(list: &RangeList<T>, mut keep: F) -> Result<RangeList<T>>
where
    T: Clone + PartialEq,
    F: FnMut(&T) -> bool,
{
    let mut kept = RangeList::new();
    for range in list.iter().filter(|r| keep(r.property())) {
        kept.add(range.clone())?;
    }
    Ok(kept)
}

/// Group the ranges of a list by property value.
pub fn by_property<T>(
    list: &RangeList<T>,
) -> Result<BTreeMap<T, RangeList<T>>>
where
    T: Clone + Ord,
{
    let mut groups: BTreeMap<T, RangeList<T>> = BTreeMap::new();
    for range in list {
        groups
            .entry(range.property().clone())
            .or_insert_with(RangeList::new)
            .add(range.clone())?;
    }
    Ok(groups)
}

/// Print every property value in the list, along with how many codepoints
/// and ranges carry it.
pub fn print_property_values(list: &RangeList<String>) -> Result<()> {
    let mut counts: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for range in list {
        let entry = counts.entry(range.property().as_str()).or_insert((0, 0));
        entry.0 += (range.end() - range.start()) as u64 + 1;
        entry.1 += 1;
    }
    for (name, (codepoints, ranges)) in counts {
        println!("{} (codepoints: {}, ranges: {})", name, codepoints, ranges);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use cw_parse::{DerivedGeneralCategory, EastAsianWidth};

    use super::{
        by_property, parse_range_list, ranges_in_order, retain, to_range_list,
    };
    use crate::error::Error;

    fn gc(lines: &[&str]) -> Vec<DerivedGeneralCategory> {
        lines.iter().map(|line| line.parse().unwrap()).collect()
    }

    fn bounds<T>(list: &cw_ranges::RangeList<T>) -> Vec<(u32, u32)> {
        list.iter().map(|r| r.bounds()).collect()
    }

    #[test]
    fn grouped_input_is_sorted() {
        // DerivedGeneralCategory.txt lists all Cn first, then Lu, and so on.
        let grouped = gc(&[
            "0378..0379    ; Cn",
            "0380..0383    ; Cn",
            "0041..005A    ; Lu",
            "0370          ; Lu",
            "0061..007A    ; Ll",
            "0371          ; Ll",
            "0372          ; Lu",
            "0373          ; Ll",
        ]);
        let mut sorted = grouped.clone();
        sorted.sort_by_key(|row| row.codepoints.bounds().0);

        let from_grouped = to_range_list(grouped).unwrap();
        let from_sorted = ranges_in_order(&sorted).unwrap();
        assert_eq!(from_grouped, from_sorted);
        assert_eq!(
            bounds(&from_grouped),
            vec![
                (0x41, 0x5A),
                (0x61, 0x7A),
                (0x370, 0x370),
                (0x371, 0x371),
                (0x372, 0x372),
                (0x373, 0x373),
                (0x378, 0x379),
                (0x380, 0x383),
            ]
        );
    }

    #[test]
    fn ascending_input_merges() {
        let rows: Vec<EastAsianWidth> = vec![
            "1100..115F;W".parse().unwrap(),
            "1160..11FF;N".parse().unwrap(),
            "231A..231B;W".parse().unwrap(),
            "231C..231F;N".parse().unwrap(),
            "2320..2328;N".parse().unwrap(),
        ];
        let list = to_range_list(rows).unwrap();
        assert_eq!(
            bounds(&list),
            vec![
                (0x1100, 0x115F),
                (0x1160, 0x11FF),
                (0x231A, 0x231B),
                (0x231C, 0x2328),
            ]
        );
    }

    #[test]
    fn overlapping_input_is_rejected() {
        let rows: Vec<EastAsianWidth> = vec![
            "1100..115F;W".parse().unwrap(),
            "1150..1160;N".parse().unwrap(),
        ];
        assert!(to_range_list(rows).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = parse_range_list::<EastAsianWidth, _>("/nonexistent/ucd")
            .unwrap_err();
        match err {
            Error::Parse(ref e) => assert!(e.is_io_error()),
            ref other => panic!("expected an I/O error, got {:?}", other),
        }
        assert!(err.to_string().contains("EastAsianWidth.txt"));
    }

    #[test]
    fn groups_and_retains() {
        let rows = gc(&[
            "0300..036F;Mn",
            "0370..0373;Lu",
            "0374..0375;Mn",
            "0488..0489;Me",
        ]);
        let list = to_range_list(rows).unwrap();

        let groups = by_property(&list).unwrap();
        assert_eq!(
            bounds(&groups["Mn"]),
            vec![(0x300, 0x36F), (0x374, 0x375)]
        );
        assert_eq!(bounds(&groups["Me"]), vec![(0x488, 0x489)]);

        // With Lu gone, both Mn ranges stay separate: the gap is real.
        let marks = retain(&list, |p| p.starts_with('M')).unwrap();
        assert_eq!(
            bounds(&marks),
            vec![(0x300, 0x36F), (0x374, 0x375), (0x488, 0x489)]
        );
    }
}
