use std::path::Path;
use std::str::FromStr;

use crate::common::{
    parse_codepoint_association, Codepoints, UcdFile, UcdFileByRange,
};
use crate::error::Error;

/// A single row in the `extracted/DerivedGeneralCategory.txt` file.
///
/// This file gives the derived values of the General_Category property,
/// including `Cn` for unassigned codepoints. Rows are grouped by category
/// and only ascending within a group, so they need sorting before use.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DerivedGeneralCategory {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: Codepoints,
    /// The derived General_Category of the codepoints in this entry.
    pub general_category: String,
}

impl UcdFile for DerivedGeneralCategory {
    fn relative_file_path() -> &'static Path {
        Path::new("extracted/DerivedGeneralCategory.txt")
    }
}

impl UcdFileByRange for DerivedGeneralCategory {
    const ASCENDING: bool = false;

    fn range(&self) -> (u32, u32) {
        self.codepoints.bounds()
    }

    fn property(&self) -> &str {
        &self.general_category
    }
}

impl FromStr for DerivedGeneralCategory {
    type Err = Error;

    fn from_str(line: &str) -> Result<DerivedGeneralCategory, Error> {
        let (codepoints, general_category) =
            parse_codepoint_association(line)?;
        Ok(DerivedGeneralCategory {
            codepoints,
            general_category: general_category.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DerivedGeneralCategory;

    #[test]
    fn parse_single() {
        let line = "038B          ; Cn #       <reserved-038B>\n";
        let row: DerivedGeneralCategory = line.parse().unwrap();
        assert_eq!(row.codepoints, 0x038B);
        assert_eq!(row.general_category, "Cn");
    }

    #[test]
    fn parse_range() {
        let line = "0300..036F    ; Mn # [112] COMBINING GRAVE ACCENT..COMBINING LATIN SMALL LETTER X";
        let row: DerivedGeneralCategory = line.parse().unwrap();
        assert_eq!(row.codepoints, (0x0300, 0x036F));
        assert_eq!(row.general_category, "Mn");
    }

    #[test]
    fn parse_lowercase_hex() {
        let line = "fe00..fe0f;Mn";
        let row: DerivedGeneralCategory = line.parse().unwrap();
        assert_eq!(row.codepoints, (0xFE00, 0xFE0F));
        assert_eq!(row.general_category, "Mn");
    }
}
