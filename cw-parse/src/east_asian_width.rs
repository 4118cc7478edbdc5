use std::path::Path;
use std::str::FromStr;

use crate::common::{
    parse_codepoint_association, Codepoints, UcdFile, UcdFileByRange,
};
use crate::error::Error;

/// A single row in the `EastAsianWidth.txt` file, describing the value of the
/// `East_Asian_Width` property.
///
/// Rows in this file appear in ascending codepoint order. All code points,
/// assigned or unassigned, that are not listed are given the value "N".
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EastAsianWidth {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: Codepoints,
    /// One of "A", "F", "H", "N", "Na", "W".
    pub width: String,
}

impl UcdFile for EastAsianWidth {
    fn relative_file_path() -> &'static Path {
        Path::new("EastAsianWidth.txt")
    }
}

impl UcdFileByRange for EastAsianWidth {
    const ASCENDING: bool = true;

    fn range(&self) -> (u32, u32) {
        self.codepoints.bounds()
    }

    fn property(&self) -> &str {
        &self.width
    }
}

impl FromStr for EastAsianWidth {
    type Err = Error;

    fn from_str(line: &str) -> Result<EastAsianWidth, Error> {
        let (codepoints, width) = parse_codepoint_association(line)?;
        Ok(EastAsianWidth { codepoints, width: width.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::EastAsianWidth;
    use crate::common::UcdFileByRange;

    #[test]
    fn parse_single() {
        let line = "27E7;Na          # Pe         MATHEMATICAL RIGHT WHITE SQUARE BRACKET\n";
        let row: EastAsianWidth = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x27E7);
        assert_eq!(row.width, "Na");
    }

    #[test]
    fn parse_range() {
        let line = "1F300..1F320;W   # So    [33] CYCLONE..SHOOTING STAR\n";
        let row: EastAsianWidth = line.parse().unwrap();
        assert_eq!(row.range(), (0x1F300, 0x1F320));
        assert_eq!(row.property(), "W");
    }

    #[test]
    fn parse_spaced() {
        // Newer versions of the file pad the semicolon with spaces.
        let line = "3000           ; F  # Zs         IDEOGRAPHIC SPACE";
        let row: EastAsianWidth = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x3000);
        assert_eq!(row.width, "F");
    }
}
