/*!
The `cw-ranges` crate builds minimal, ordered lists of codepoint ranges that
are tagged with a property.

A [`RangeList`](struct.RangeList.html) is fed
[`RangeProperty`](struct.RangeProperty.html) values in strictly ascending
order. Every insertion eagerly merges the new range into its predecessor when
both share a property and touch, so the list is always in its
smallest normalized form. Reading the list never needs a post-processing pass.

[`transform`](fn.transform.html) rebuilds a list under a new property mapping.
Neighbouring ranges whose mapped properties coincide merge on the way, which
is how many fine grained categories collapse into a few coarse classes.

```
use cw_ranges::{RangeList, RangeProperty};

let mut list = RangeList::new();
list.add(RangeProperty::new(0x41, 0x41, "Lu")?)?;
list.add(RangeProperty::new(0x42, 0x42, "Lu")?)?;
list.add(RangeProperty::new(0x43, 0x43, "Ll")?)?;

let bounds: Vec<(u32, u32)> = list.iter().map(|r| r.bounds()).collect();
assert_eq!(bounds, vec![(0x41, 0x42), (0x43, 0x43)]);
# Ok::<(), cw_ranges::Error>(())
```
*/

#![deny(missing_docs)]

pub use crate::error::{Error, ErrorKind};
pub use crate::list::{IntoIter, Iter, RangeList};
pub use crate::range::RangeProperty;
pub use crate::transform::{transform, try_transform};

mod error;
mod list;
mod range;
mod transform;
