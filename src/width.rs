use std::fmt;

use cw_parse::{DerivedGeneralCategory, EastAsianWidth};
use cw_ranges::{self, RangeList, RangeProperty};

use crate::args::ArgMatches;
use crate::error::Result;
use crate::util::{parse_range_list, retain};

/// General categories whose codepoints occupy no column.
pub const DEFAULT_ZERO_WIDTH: &[&str] = &["Mn", "Me"];

/// East_Asian_Width classes whose codepoints occupy two columns.
pub const DEFAULT_DOUBLE_WIDTH: &[&str] = &["W", "F"];

/// The number of terminal columns a classified codepoint occupies.
///
/// Narrow is the default for every codepoint not in a width table, so it has
/// no variant.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Width {
    Zero,
    Wide,
}

impl Width {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Width::Zero => "Zero",
            Width::Wide => "Wide",
        }
    }
}

impl AsRef<str> for Width {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    let zero_cats = args.values("zero-width", DEFAULT_ZERO_WIDTH);
    let wide_classes = args.values("double-width", DEFAULT_DOUBLE_WIDTH);
    let table = args.value_of("table").unwrap_or("all");

    let zero = if table == "double" {
        RangeList::new()
    } else {
        let gc = parse_range_list::<DerivedGeneralCategory, _>(&dir)?;
        zero_width_ranges(&gc, zero_cats.as_slice())?
    };
    let wide = if table == "zero" {
        RangeList::new()
    } else {
        let eaw = parse_range_list::<EastAsianWidth, _>(&dir)?;
        double_width_ranges(&eaw, wide_classes.as_slice())?
    };
    tracing::debug!(
        zero = zero.len(),
        wide = wide.len(),
        "classified codepoint widths"
    );

    let mut wtr = args.writer("width")?;
    match table {
        "zero" => wtr.ranges("ZERO_WIDTH", &zero)?,
        "double" => wtr.ranges("DOUBLE_WIDTH", &wide)?,
        "all" if args.is_present("enum") => {
            let widths = width_table(&zero, &wide)?;
            wtr.ranges_to_enum(args.name(), &widths)?;
        }
        "all" => {
            wtr.names(&["DOUBLE_WIDTH", "ZERO_WIDTH"])?;
            wtr.ranges("DOUBLE_WIDTH", &wide)?;
            wtr.ranges("ZERO_WIDTH", &zero)?;
        }
        other => return err!("unrecognized width table: {:?}", other),
    }
    Ok(())
}

/// Return the ranges of codepoints whose general category is in
/// `categories`.
///
/// Neighbouring ranges of different zero width categories, such as `Mn`
/// followed immediately by `Me`, come out as a single range.
pub fn zero_width_ranges<S: AsRef<str>>(
    gc: &RangeList<String>,
    categories: &[S],
) -> Result<RangeList<bool>> {
    classify(gc, categories)
}

/// Return the ranges of codepoints whose East_Asian_Width class is in
/// `classes`.
pub fn double_width_ranges<S: AsRef<str>>(
    eaw: &RangeList<String>,
    classes: &[S],
) -> Result<RangeList<bool>> {
    classify(eaw, classes)
}

fn classify<S: AsRef<str>>(
    list: &RangeList<String>,
    values: &[S],
) -> Result<RangeList<bool>> {
    let marked = cw_ranges::transform(list, |value| {
        values.iter().any(|v| v.as_ref() == value.as_str())
    })?;
    retain(&marked, |&yes| yes)
}

/// Combine zero and double width ranges into one table.
///
/// A codepoint in both sets is zero width. Codepoints in neither are narrow
/// and do not appear in the table.
pub fn width_table(
    zero: &RangeList<bool>,
    wide: &RangeList<bool>,
) -> Result<RangeList<Width>> {
    let zero: Vec<(u32, u32)> =
        zero.iter().filter(|r| *r.property()).map(|r| r.bounds()).collect();
    let mut pieces: Vec<(u32, u32, Width)> =
        zero.iter().map(|&(s, e)| (s, e, Width::Zero)).collect();

    let mut i = 0;
    for range in wide.iter().filter(|r| *r.property()) {
        let (mut start, end) = range.bounds();
        while i < zero.len() && zero[i].1 < start {
            i += 1;
        }
        // Cut every overlapping zero width range out of this one.
        let mut j = i;
        loop {
            if j >= zero.len() || zero[j].0 > end {
                pieces.push((start, end, Width::Wide));
                break;
            }
            let (zstart, zend) = zero[j];
            if zstart > start {
                pieces.push((start, zstart - 1, Width::Wide));
            }
            if zend >= end {
                break;
            }
            start = zend + 1;
            j += 1;
        }
    }
    pieces.sort_by_key(|&(start, _, _)| start);

    let mut table = RangeList::new();
    for (start, end, width) in pieces {
        table.add(RangeProperty::new(start, end, width)?)?;
    }
    Ok(table)
}
