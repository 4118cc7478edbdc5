use cw_parse::EastAsianWidth;

use crate::args::ArgMatches;
use crate::error::Result;
use crate::util::{
    by_property, parse_range_list, print_property_values, retain,
};

/// Every East_Asian_Width value, by its abbreviated name.
pub const WIDTHS: &[&str] = &["A", "F", "H", "N", "Na", "W"];

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    let list = parse_range_list::<EastAsianWidth, _>(dir)?;
    if args.is_present("list-widths") {
        return print_property_values(&list);
    }

    let filter = args.filter(|name| WIDTHS.contains(&name))?;
    let list = retain(&list, |width| filter.contains(width))?;

    let mut wtr = args.writer("east_asian_width")?;
    if args.is_present("inc") {
        wtr.ranges(args.name(), &list)?;
    } else if args.is_present("enum") {
        wtr.ranges_to_enum(args.name(), &list)?;
    } else {
        let by_width = by_property(&list)?;
        wtr.names(by_width.keys())?;
        for (name, ranges) in by_width {
            wtr.ranges(&name, &ranges)?;
        }
    }
    Ok(())
}
