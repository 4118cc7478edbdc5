use cw_parse::DerivedGeneralCategory;

use crate::args::ArgMatches;
use crate::error::Result;
use crate::util::{
    by_property, parse_range_list, print_property_values, retain,
};

/// Every General_Category value, by its abbreviated name.
pub const CATEGORIES: &[&str] = &[
    "Cc", "Cf", "Cn", "Co", "Cs", "Ll", "Lm", "Lo", "Lt", "Lu", "Mc", "Me",
    "Mn", "Nd", "Nl", "No", "Pc", "Pd", "Pe", "Pf", "Pi", "Po", "Ps", "Sc",
    "Sk", "Sm", "So", "Zl", "Zp", "Zs",
];

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    let list = parse_range_list::<DerivedGeneralCategory, _>(dir)?;
    if args.is_present("list-categories") {
        return print_property_values(&list);
    }

    let filter = args.filter(|name| CATEGORIES.contains(&name))?;
    let list = retain(&list, |cat| filter.contains(cat))?;

    let mut wtr = args.writer("general_category")?;
    if args.is_present("inc") {
        wtr.ranges(args.name(), &list)?;
    } else if args.is_present("enum") {
        wtr.ranges_to_enum(args.name(), &list)?;
    } else {
        let by_cat = by_property(&list)?;
        wtr.names(by_cat.keys())?;
        for (name, ranges) in by_cat {
            wtr.ranges(&name, &ranges)?;
        }
    }
    Ok(())
}
