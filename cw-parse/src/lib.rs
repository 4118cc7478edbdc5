/*!
A library for parsing the Unicode character database files that character
width tables are derived from.

Every supported file uses the same line grammar: blank lines and `#` comments
are skipped, and data lines associate a codepoint or an inclusive codepoint
range with a property value:

```text
0300..036F    ; Mn # [112] COMBINING GRAVE ACCENT..COMBINING LATIN SMALL LETTER X
3000;F           # Zs         IDEOGRAPHIC SPACE
```
*/

#![deny(missing_docs)]

pub use crate::common::{
    parse, parse_codepoint_association, Codepoint, CodepointRange,
    Codepoints, UcdFile, UcdFileByRange, UcdLineParser,
};
pub use crate::error::{Error, ErrorKind};

pub use crate::east_asian_width::EastAsianWidth;
pub use crate::general_category::DerivedGeneralCategory;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::parse(format!($($tt)*)))
    }
}

mod common;
mod error;

mod east_asian_width;
mod general_category;
