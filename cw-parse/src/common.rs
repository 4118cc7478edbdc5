use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, ErrorKind};

/// Parse a particular file in the UCD into a sequence of rows.
///
/// The given directory should be the directory to the UCD.
pub fn parse<P, D>(ucd_dir: P) -> Result<Vec<D>, Error>
where
    P: AsRef<Path>,
    D: UcdFile,
{
    let mut xs = vec![];
    for result in D::from_dir(ucd_dir)? {
        let x = result?;
        xs.push(x);
    }
    Ok(xs)
}

/// Parse a line that associates a codepoint or codepoint range with a single
/// property value.
///
/// The line may end with a `#` comment, and any `;` separated fields after
/// the property value are ignored. Whitespace around every field is trimmed.
///
/// This returns the codepoints along with the property value.
pub fn parse_codepoint_association<'a>(
    line: &'a str,
) -> Result<(Codepoints, &'a str), Error> {
    lazy_static! {
        static ref PARTS: Regex = Regex::new(
            r"(?x)
            ^
            \s*(?P<codepoints>[^\s;]+)\s*;
            \s*(?P<property>[^\s;\x23]+)\s*
            (?:;[^\x23]*)?
            (?:\x23.*)?
            $
            "
        )
        .unwrap();
    };

    let caps = match PARTS.captures(line.trim()) {
        Some(caps) => caps,
        None => return err!("invalid codepoint association line"),
    };
    let property = match caps.name("property") {
        Some(property) => property.as_str().trim(),
        None => return err!("missing property value"),
    };
    Ok((caps["codepoints"].parse()?, property))
}

/// Describes a single UCD file.
pub trait UcdFile:
    Clone + fmt::Debug + Default + Eq + FromStr<Err = Error> + PartialEq
{
    /// The file path corresponding to this file, relative to the UCD
    /// directory.
    fn relative_file_path() -> &'static Path;

    /// The full file path corresponding to this file given the UCD directory
    /// path.
    fn file_path<P: AsRef<Path>>(ucd_dir: P) -> PathBuf {
        ucd_dir.as_ref().join(Self::relative_file_path())
    }

    /// Create an iterator over each record in this UCD file.
    ///
    /// The parameter should correspond to the directory containing the UCD.
    fn from_dir<P: AsRef<Path>>(
        ucd_dir: P,
    ) -> Result<UcdLineParser<File, Self>, Error> {
        UcdLineParser::from_path(Self::file_path(ucd_dir))
    }
}

/// Describes a single UCD file where every record associates one contiguous
/// range of codepoints with one property value.
pub trait UcdFileByRange: UcdFile {
    /// Whether the records of this file appear in ascending codepoint order.
    ///
    /// When this is false, records must be sorted by the start of their
    /// range before they can be added to a range list.
    const ASCENDING: bool;

    /// The inclusive `(start, end)` codepoint range of this record.
    fn range(&self) -> (u32, u32);

    /// The property value shared by every codepoint in this record.
    fn property(&self) -> &str;
}

/// A line oriented parser for a particular UCD file.
///
/// Callers can build a line parser via the
/// [`UcdFile::from_dir`](trait.UcdFile.html) method.
///
/// The `R` type parameter refers to the underlying `io::Read` implementation
/// from which the UCD data is read.
///
/// The `D` type parameter refers to the type of the record parsed out of each
/// line.
#[derive(Debug)]
pub struct UcdLineParser<R, D> {
    path: Option<PathBuf>,
    rdr: io::BufReader<R>,
    line: String,
    line_number: u64,
    _data: PhantomData<D>,
}

impl<D> UcdLineParser<File, D> {
    /// Create a new parser from the given file path.
    pub(crate) fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<UcdLineParser<File, D>, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(e, path))?;
        Ok(UcdLineParser::new(Some(path.to_path_buf()), file))
    }
}

impl<R: io::Read, D> UcdLineParser<R, D> {
    /// Create a new parser that parses the reader given.
    ///
    /// The path, when present, is attached to every error produced by this
    /// parser.
    pub fn new(path: Option<PathBuf>, rdr: R) -> UcdLineParser<R, D> {
        UcdLineParser {
            path,
            rdr: io::BufReader::new(rdr),
            line: String::new(),
            line_number: 0,
            _data: PhantomData,
        }
    }
}

impl<R: io::Read, D: FromStr<Err = Error>> Iterator for UcdLineParser<R, D> {
    type Item = Result<D, Error>;

    fn next(&mut self) -> Option<Result<D, Error>> {
        loop {
            self.line_number += 1;
            self.line.clear();
            let n = match self.rdr.read_line(&mut self.line) {
                Err(err) => {
                    return Some(Err(Error {
                        kind: ErrorKind::Io(err),
                        line: None,
                        path: self.path.clone(),
                    }))
                }
                Ok(n) => n,
            };
            if n == 0 {
                return None;
            }
            let data = match self.line.find('#') {
                Some(i) => &self.line[..i],
                None => &self.line[..],
            };
            if !data.trim().is_empty() {
                break;
            }
        }
        let line_number = self.line_number;
        Some(self.line.parse().map_err(|mut err: Error| {
            err.line = Some(line_number);
            err.path = self.path.clone();
            err
        }))
    }
}

/// A representation of either a single codepoint or a range of codepoints.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Codepoints {
    /// A single codepoint.
    Single(Codepoint),
    /// A range of codepoints.
    Range(CodepointRange),
}

impl Codepoints {
    /// The inclusive `(start, end)` bounds of these codepoints.
    ///
    /// A single codepoint has equal bounds.
    pub fn bounds(&self) -> (u32, u32) {
        match *self {
            Codepoints::Single(cp) => (cp.value(), cp.value()),
            Codepoints::Range(r) => (r.start.value(), r.end.value()),
        }
    }
}

impl Default for Codepoints {
    fn default() -> Codepoints {
        Codepoints::Single(Codepoint::default())
    }
}

impl FromStr for Codepoints {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codepoints, Error> {
        if s.contains("..") {
            CodepointRange::from_str(s).map(Codepoints::Range)
        } else {
            Codepoint::from_str(s).map(Codepoints::Single)
        }
    }
}

impl fmt::Display for Codepoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Codepoints::Single(ref x) => x.fmt(f),
            Codepoints::Range(ref x) => x.fmt(f),
        }
    }
}

impl PartialEq<u32> for Codepoints {
    fn eq(&self, other: &u32) -> bool {
        match *self {
            Codepoints::Single(ref x) => x == other,
            Codepoints::Range(ref x) => x == &(*other, *other),
        }
    }
}

impl PartialEq<(u32, u32)> for Codepoints {
    fn eq(&self, other: &(u32, u32)) -> bool {
        match *self {
            Codepoints::Single(ref x) => &(x.value(), x.value()) == other,
            Codepoints::Range(ref x) => x == other,
        }
    }
}

/// A range of Unicode codepoints. The range is inclusive; both ends of the
/// range are guaranteed to be valid codepoints, and the start is never after
/// the end.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CodepointRange {
    /// The start of the codepoint range.
    pub start: Codepoint,
    /// The end of the codepoint range.
    pub end: Codepoint,
}

impl FromStr for CodepointRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<CodepointRange, Error> {
        lazy_static! {
            static ref PARTS: Regex = Regex::new(
                r"^(?P<start>[A-Fa-f0-9]+)\.\.(?P<end>[A-Fa-f0-9]+)$"
            )
            .unwrap();
        }
        let caps = match PARTS.captures(s) {
            Some(caps) => caps,
            None => return err!("invalid codepoint range: '{}'", s),
        };
        let start = caps["start"].parse().or_else(|err| {
            err!("failed to parse '{}' as a codepoint range: {}", s, err)
        })?;
        let end = caps["end"].parse().or_else(|err| {
            err!("failed to parse '{}' as a codepoint range: {}", s, err)
        })?;
        if start > end {
            return err!(
                "invalid codepoint range '{}': start is after end",
                s
            );
        }
        Ok(CodepointRange { start, end })
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl PartialEq<(u32, u32)> for CodepointRange {
    fn eq(&self, other: &(u32, u32)) -> bool {
        &(self.start.value(), self.end.value()) == other
    }
}

/// A single Unicode codepoint.
///
/// This type's string representation is a hexadecimal number. It is
/// guaranteed to be in the range `[0, 10FFFF]`.
///
/// Note that unlike Rust's `char` type, this may be a surrogate codepoint.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Codepoint(u32);

impl Codepoint {
    /// Create a new codepoint from a `u32`.
    ///
    /// If the given number is not a valid codepoint, then this returns an
    /// error.
    pub fn from_u32(n: u32) -> Result<Codepoint, Error> {
        if n > 0x10FFFF {
            err!("{:x} is not a valid Unicode codepoint", n)
        } else {
            Ok(Codepoint(n))
        }
    }

    /// Return the underlying `u32` codepoint value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Codepoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codepoint, Error> {
        // UCD files write every codepoint with 4 to 6 hex digits.
        if s.len() < 4
            || s.len() > 6
            || !s.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return err!("invalid codepoint: '{}'", s);
        }
        match u32::from_str_radix(s, 16) {
            Ok(n) => Codepoint::from_u32(n),
            Err(err) => err!(
                "failed to parse '{}' as a hexadecimal codepoint: {}",
                s,
                err
            ),
        }
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl PartialEq<u32> for Codepoint {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{
        parse_codepoint_association, Codepoint, CodepointRange, Codepoints,
        UcdLineParser,
    };
    use crate::east_asian_width::EastAsianWidth;

    #[test]
    fn codepoint_hex_case() {
        let lower: Codepoint = "1f600".parse().unwrap();
        let upper: Codepoint = "1F600".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper, 0x1F600);
        assert_eq!(upper.to_string(), "1F600");
    }

    #[test]
    fn codepoint_invalid() {
        assert!("".parse::<Codepoint>().is_err());
        assert!("+41".parse::<Codepoint>().is_err());
        assert!("00G1".parse::<Codepoint>().is_err());
        assert!("110000".parse::<Codepoint>().is_err());
    }

    #[test]
    fn codepoint_digit_count() {
        assert!("41".parse::<Codepoint>().is_err());
        assert!("041".parse::<Codepoint>().is_err());
        assert!("0000041".parse::<Codepoint>().is_err());
        assert_eq!("0041".parse::<Codepoint>().unwrap(), 0x41);
        assert_eq!("10FFFF".parse::<Codepoint>().unwrap(), 0x10FFFF);
        assert!("41..005A".parse::<CodepointRange>().is_err());
    }

    #[test]
    fn codepoint_range() {
        let range: CodepointRange = "0300..036F".parse().unwrap();
        assert_eq!(range, (0x300, 0x36F));
        assert!("036F..0300".parse::<CodepointRange>().is_err());
        assert!("0300...036F".parse::<CodepointRange>().is_err());
    }

    #[test]
    fn codepoints_bounds() {
        let single: Codepoints = "00AD".parse().unwrap();
        let range: Codepoints = "1100..115F".parse().unwrap();
        assert_eq!(single.bounds(), (0xAD, 0xAD));
        assert_eq!(range.bounds(), (0x1100, 0x115F));
    }

    #[test]
    fn association_trailing_fields() {
        let line = "0041..005A;Lu;ignored ; fields # LATIN CAPITAL A..Z";
        let (cps, prop) = parse_codepoint_association(line).unwrap();
        assert_eq!(cps, (0x41, 0x5A));
        assert_eq!(prop, "Lu");
    }

    #[test]
    fn association_whitespace() {
        let line = "   3000   ;   F   # Zs IDEOGRAPHIC SPACE\n";
        let (cps, prop) = parse_codepoint_association(line).unwrap();
        assert_eq!(cps, 0x3000);
        assert_eq!(prop, "F");
    }

    #[test]
    fn association_invalid() {
        assert!(parse_codepoint_association("0041").is_err());
        assert!(parse_codepoint_association("0041;").is_err());
        assert!(parse_codepoint_association("ZZZZ;Lu").is_err());
    }

    #[test]
    fn line_parser_skips_comments() {
        let data = "\
# EastAsianWidth-15.0.0.txt
# comment line

0000..001F;N     # Cc    [32] <control-0000>..<control-001F>
   # indented comment
1100..115F;W     # Lo    [96] HANGUL CHOSEONG KIYEOK..HANGUL CHOSEONG FILLER
";
        let rows = UcdLineParser::new(None, Cursor::new(data))
            .collect::<Result<Vec<EastAsianWidth>, _>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].codepoints, (0x0000, 0x001F));
        assert_eq!(rows[1].width, "W");
    }

    #[test]
    fn line_parser_reports_line_number() {
        let data = "# header\n0041;Na\nnot a line\n";
        let results: Vec<Result<EastAsianWidth, _>> =
            UcdLineParser::new(None, Cursor::new(data)).collect();
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.line(), Some(3));
    }
}
