use std::char;
use std::collections::BTreeSet;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use byteorder::{BigEndian as BE, ByteOrder};
use cw_ranges::RangeList;
use fst::raw::Fst;
use fst::{Map, MapBuilder, Set, SetBuilder};

use crate::error::Result;

#[derive(Clone, Debug)]
pub struct WriterBuilder(WriterOptions);

#[derive(Clone, Debug)]
struct WriterOptions {
    name: String,
    table_name: String,
    columns: u64,
    char_literals: bool,
    fst_dir: Option<PathBuf>,
    emit_c: bool,
    emit_inc: bool,
}

impl WriterBuilder {
    /// Create a new builder for range table writers.
    ///
    /// The name given corresponds to the Rust module name to use when
    /// applicable.
    pub fn new(name: &str) -> WriterBuilder {
        WriterBuilder(WriterOptions {
            name: name.to_string(),
            table_name: name.to_uppercase(),
            columns: 79,
            char_literals: false,
            fst_dir: None,
            emit_c: false,
            emit_inc: false,
        })
    }

    /// Create a new writer from this builder's configuration.
    pub fn from_writer<W: io::Write + 'static>(&self, wtr: W) -> Writer {
        Writer {
            wtr: LineWriter::new(Box::new(wtr), self.0.columns as usize),
            wrote_header: false,
            opts: self.0.clone(),
        }
    }

    /// Create a new writer that writes to stdout.
    pub fn from_stdout(&self) -> Writer {
        self.from_writer(io::stdout())
    }

    /// Create a new writer that writes FSTs to a directory.
    ///
    /// The Rust source that loads the FSTs is written next to them, in a file
    /// named after this builder's name.
    pub fn from_fst_dir<P: AsRef<Path>>(&self, fst_dir: P) -> Result<Writer> {
        let mut opts = self.0.clone();
        opts.fst_dir = Some(fst_dir.as_ref().to_path_buf());
        let mut fpath = fst_dir.as_ref().join(rust_module_name(&opts.name));
        fpath.set_extension("rs");
        Ok(Writer {
            wtr: LineWriter::new(
                Box::new(File::create(fpath)?),
                opts.columns as usize,
            ),
            wrote_header: false,
            opts,
        })
    }

    /// Set the value to use as the table name where applicable. If not
    /// provided, an uppercase version of the string passed to the constructor
    /// is used.
    ///
    /// When emitting C code, this is also used as the prefix for all
    /// identifiers emitted by the writer (unless it is empty, in which case
    /// they will be emitted unprefixed).
    pub fn table_name(&mut self, name: &str) -> &mut WriterBuilder {
        self.0.table_name = name.into();
        self
    }

    /// Set the column limit to use when writing source code.
    ///
    /// Note that this is adhered to on a "best effort" basis.
    pub fn columns(&mut self, columns: u64) -> &mut WriterBuilder {
        self.0.columns = columns;
        self
    }

    /// When printing Rust source code, emit `char` literals instead of `u32`
    /// literals. Any codepoints that aren't Unicode scalar values (i.e.,
    /// surrogate codepoints) are silently dropped when writing.
    pub fn char_literals(&mut self, yes: bool) -> &mut WriterBuilder {
        self.0.char_literals = yes;
        self
    }

    /// Emit C code, instead of Rust code.
    pub fn emit_c(&mut self, yes: bool) -> &mut WriterBuilder {
        self.0.emit_c = yes;
        self
    }

    /// Emit only the brace initializers of a `{begin, end}` range array, one
    /// per line, suitable for `#include` inside a C or C++ array definition.
    pub fn emit_inc(&mut self, yes: bool) -> &mut WriterBuilder {
        self.0.emit_inc = yes;
        self
    }
}

/// A writer of codepoint range tables.
///
/// A writer takes range lists as input and writes them in one of several
/// output formats: Rust slices, C arrays, bare initializer fragments or FSTs.
pub struct Writer {
    wtr: LineWriter<Box<dyn io::Write + 'static>>,
    wrote_header: bool,
    opts: WriterOptions,
}

impl Writer {
    /// Write a sorted sequence of string names that map to range tables.
    pub fn names<I: IntoIterator<Item = T>, T: AsRef<str>>(
        &mut self,
        names: I,
    ) -> Result<()> {
        self.ensure_not_inc("table index")?;
        self.header()?;
        self.separator()?;
        let mut names: Vec<String> =
            names.into_iter().map(|name| name.as_ref().to_string()).collect();
        names.sort();

        if self.opts.emit_c {
            return self.emit_c_name_data(names);
        }
        let ty = if self.opts.fst_dir.is_some() {
            "::fst::Set".to_string()
        } else {
            let charty = self.rust_codepoint_type();
            format!("&'static [({}, {})]", charty, charty)
        };

        writeln!(
            self.wtr,
            "pub const BY_NAME: &'static [(&'static str, {})] = &[",
            ty,
        )?;
        for name in names {
            let rustname = rust_const_name(&name);
            self.wtr.write_str(&format!("({:?}, {}), ", name, rustname))?;
        }
        writeln!(self.wtr, "];")?;
        Ok(())
    }

    fn c_const_name(&self, name: &str) -> String {
        // Collisions matter more in C than in Rust, so every table is
        // prefixed with the main table name unless that would double it.
        let name = rust_const_name(name);
        // An empty prefix would produce `_FOO`, which is reserved in C.
        if !self.opts.table_name.is_empty()
            && !self.opts.table_name.starts_with(&name)
        {
            return format!("{}_{}", self.opts.table_name, name);
        }
        name
    }

    // Zero length arrays are rejected by MSVC, and empty braces are not a
    // valid initializer in C. So every array gets a FOO_SIZE constant with
    // its real size and is declared one element longer, padded with `0`.
    fn begin_c_array(
        &mut self,
        name: &str,
        size: usize,
        item_type: &str,
        type_array_length: Option<usize>,
    ) -> Result<()> {
        let id = self.c_const_name(name);
        writeln!(self.wtr, "#define {}_SIZE {}", id, size)?;
        writeln!(self.wtr)?;
        if let Some(len) = type_array_length {
            writeln!(
                self.wtr,
                "CW_GENERATE_DATA_LINKAGE const {} {}[{}_SIZE + 1][{}] = {{",
                item_type, id, id, len
            )?;
        } else {
            writeln!(
                self.wtr,
                "CW_GENERATE_DATA_LINKAGE const {} {}[{}_SIZE + 1] = {{",
                item_type, id, id
            )?;
        }
        if size == 0 {
            self.wtr.write_str("0")?
        }
        Ok(())
    }

    fn end_c_array(&mut self) -> Result<()> {
        writeln!(self.wtr, "}};")?;
        Ok(())
    }

    fn emit_c_name_data(&mut self, names: Vec<String>) -> Result<()> {
        let struct_ty_name =
            self.c_const_name("name_entry").to_ascii_lowercase();
        writeln!(self.wtr, "struct {} {{", struct_ty_name)?;
        writeln!(self.wtr, "  char const *name;")?;
        writeln!(self.wtr, "  unsigned int table_size;")?;
        writeln!(self.wtr, "  const unsigned int (*table)[2];")?;
        writeln!(self.wtr, "}};\n")?;
        self.begin_c_array(
            "BY_NAME",
            names.len(),
            &format!("struct {}", struct_ty_name),
            None,
        )?;
        for name in names {
            let tabname = self.c_const_name(&name);
            self.wtr.write_str(&format!(
                "{{{:?}, {}_SIZE, {}}}, ",
                name, tabname, tabname
            ))?;
        }
        self.end_c_array()
    }

    fn ensure_not_c(&self, emitting: &str) -> Result<()> {
        if self.opts.emit_c {
            err!("cannot emit a {} as C code", emitting)
        } else {
            Ok(())
        }
    }

    fn ensure_not_inc(&self, emitting: &str) -> Result<()> {
        if self.opts.emit_inc {
            err!("cannot emit a {} as an initializer fragment", emitting)
        } else {
            Ok(())
        }
    }

    /// Write the ranges of a range list as a set of codepoints.
    ///
    /// Properties are ignored: every range in the list is written. Callers
    /// that want a subset should filter the list first.
    ///
    /// When writing an FST, every codepoint is explicitly represented.
    pub fn ranges<T>(
        &mut self,
        name: &str,
        list: &RangeList<T>,
    ) -> Result<()> {
        let table: Vec<(u32, u32)> =
            list.iter().map(|r| r.bounds()).collect();
        self.ranges_table(name, &table)
    }

    /// Write a sorted, non-overlapping sequence of inclusive ranges.
    pub fn ranges_table(
        &mut self,
        name: &str,
        table: &[(u32, u32)],
    ) -> Result<()> {
        self.header()?;
        self.separator()?;

        let name = rust_const_name(name);
        if self.opts.emit_inc {
            self.inc_ranges(table)?;
        } else if self.opts.fst_dir.is_some() {
            let mut builder = SetBuilder::memory();
            for &(start, end) in table {
                builder.extend_iter((start..=end).map(u32_key))?;
            }
            let set = Set::from_bytes(builder.into_inner()?)?;
            self.fst(&name, set.as_fst(), false)?;
        } else {
            self.ranges_slice(&name, table)?;
        }
        self.wtr.flush()?;
        Ok(())
    }

    fn inc_ranges(&mut self, table: &[(u32, u32)]) -> Result<()> {
        for &(start, end) in table {
            writeln!(self.wtr, "{{0x{:04X}, 0x{:04X}}},", start, end)?;
        }
        Ok(())
    }

    fn c_ranges_array(
        &mut self,
        name: &str,
        table: &[(u32, u32)],
    ) -> Result<()> {
        self.begin_c_array(name, table.len(), "unsigned int", Some(2))?;
        for &(start, end) in table {
            self.wtr.write_str(&format!("{{{}, {}}}, ", start, end))?;
        }
        self.end_c_array()?;
        Ok(())
    }

    fn ranges_slice(
        &mut self,
        name: &str,
        table: &[(u32, u32)],
    ) -> Result<()> {
        if self.opts.emit_c {
            return self.c_ranges_array(name, table);
        }
        let ty = self.rust_codepoint_type();
        writeln!(
            self.wtr,
            "pub const {}: &'static [({}, {})] = &[",
            name, ty, ty
        )?;
        for &(start, end) in table {
            let range = (self.rust_codepoint(start), self.rust_codepoint(end));
            if let (Some(start), Some(end)) = range {
                self.wtr.write_str(&format!("({}, {}), ", start, end))?;
            }
        }
        writeln!(self.wtr, "];")?;
        Ok(())
    }

    /// Write a range list as a map from codepoint range to one of the
    /// distinct property values in the list. This emits two items: the
    /// sorted property values, and a table from codepoint range to the index
    /// of its value.
    pub fn ranges_to_enum<T: AsRef<str>>(
        &mut self,
        name: &str,
        list: &RangeList<T>,
    ) -> Result<()> {
        self.ensure_not_c("range->enum map")?;
        self.ensure_not_inc("range->enum map")?;
        self.header()?;
        self.separator()?;

        let variants: Vec<&str> = list
            .iter()
            .map(|r| r.property().as_ref())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .collect();
        writeln!(
            self.wtr,
            "pub const {}_ENUM: &'static [&'static str] = &[",
            rust_const_name(name)
        )?;
        for variant in &variants {
            self.wtr.write_str(&format!("{:?}, ", variant))?;
        }
        writeln!(self.wtr, "];")?;

        let mut table = vec![];
        for range in list {
            let prop = range.property().as_ref();
            // Every property was collected into `variants` above.
            let index = variants.binary_search(&prop).unwrap_or(0);
            table.push((range.start(), range.end(), index as u64));
        }
        self.ranges_to_unsigned_integer(name, &table)?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Write a map that associates ranges of codepoints with an arbitrary
    /// integer.
    ///
    /// The smallest numeric type is used when applicable.
    pub fn ranges_to_unsigned_integer(
        &mut self,
        name: &str,
        table: &[(u32, u32, u64)],
    ) -> Result<()> {
        self.ensure_not_inc("range->unsigned int map")?;
        self.header()?;
        self.separator()?;

        let name = rust_const_name(name);
        if self.opts.fst_dir.is_some() {
            let mut builder = MapBuilder::memory();
            for &(start, end, value) in table {
                for cp in start..=end {
                    builder.insert(u32_key(cp), value)?;
                }
            }
            let map = Map::from_bytes(builder.into_inner()?)?;
            self.fst(&name, map.as_fst(), true)?;
        } else {
            self.ranges_to_unsigned_integer_slice(&name, table)?;
        }
        self.wtr.flush()?;
        Ok(())
    }

    fn ranges_to_unsigned_integer_slice(
        &mut self,
        name: &str,
        table: &[(u32, u32, u64)],
    ) -> Result<()> {
        self.ensure_not_c("range->unsigned int map")?;
        let cp_ty = self.rust_codepoint_type();
        let num_ty = match table.iter().map(|&(_, _, n)| n).max() {
            None => "u8",
            Some(max_num) => smallest_unsigned_type(max_num),
        };

        writeln!(
            self.wtr,
            "pub const {}: &'static [({}, {}, {})] = &[",
            name, cp_ty, cp_ty, num_ty
        )?;
        for &(start, end, num) in table {
            let range = (self.rust_codepoint(start), self.rust_codepoint(end));
            if let (Some(start), Some(end)) = range {
                let src = format!("({}, {}, {}), ", start, end, num);
                self.wtr.write_str(&src)?;
            }
        }
        writeln!(self.wtr, "];")?;
        Ok(())
    }

    fn fst(&mut self, const_name: &str, fst: &Fst, map: bool) -> Result<()> {
        self.ensure_not_c("fst")?;
        let fst_dir = match self.opts.fst_dir {
            Some(ref fst_dir) => fst_dir.clone(),
            None => return err!("no FST directory was configured"),
        };
        let fst_file_name = format!("{}.fst", rust_module_name(const_name));
        let fst_file_path = fst_dir.join(&fst_file_name);
        File::create(fst_file_path)?.write_all(&fst.to_vec())?;

        let ty = if map { "Map" } else { "Set" };
        writeln!(self.wtr, "lazy_static! {{")?;
        writeln!(
            self.wtr,
            "  pub static ref {}: ::fst::{} = ",
            const_name, ty
        )?;
        writeln!(
            self.wtr,
            "    ::fst::{}::from(::fst::raw::Fst::from_static_slice(",
            ty
        )?;
        writeln!(
            self.wtr,
            "      include_bytes!({:?})).unwrap());",
            fst_file_name
        )?;
        writeln!(self.wtr, "}}")?;
        Ok(())
    }

    fn header(&mut self) -> Result<()> {
        if self.wrote_header {
            return Ok(());
        }
        self.wrote_header = true;
        let mut argv = vec![];
        argv.push(
            env::current_exe()?
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "cw-generate".to_string()),
        );
        for arg in env::args_os().skip(1) {
            let x = arg.to_string_lossy();
            if x.contains('\n') {
                argv.push("[snip (arg too long)]".to_string());
            } else {
                argv.push(x.into_owned());
            }
        }
        // Use /* and not //, since C and C++ fragments are emitted too.
        writeln!(
            self.wtr,
            "/* DO NOT EDIT THIS FILE. IT WAS AUTOMATICALLY GENERATED BY:"
        )?;
        writeln!(self.wtr, " *")?;
        writeln!(self.wtr, " *  {}", argv.join(" "))?;
        writeln!(self.wtr, " *")?;
        if self.opts.emit_inc {
            writeln!(
                self.wtr,
                " * Each line is a {{begin, end}} inclusive codepoint range."
            )?;
            writeln!(self.wtr, " */")?;
            return Ok(());
        }
        if !self.opts.emit_c {
            writeln!(self.wtr, " */")?;
            return Ok(());
        }

        writeln!(
            self.wtr,
            " * Note: The final item of each array is padding, so you must"
        )?;
        writeln!(
            self.wtr,
            " * use its corresponding <arr>_SIZE constant, rather than"
        )?;
        writeln!(
            self.wtr,
            " * using sizeof or similar to determine the size."
        )?;
        writeln!(self.wtr, " */")?;
        writeln!(self.wtr)?;

        writeln!(self.wtr, "#ifndef CW_GENERATE_DATA_LINKAGE")?;
        writeln!(self.wtr, "#define CW_GENERATE_DATA_LINKAGE static")?;
        writeln!(self.wtr, "#endif")?;
        writeln!(self.wtr)?;

        Ok(())
    }

    fn separator(&mut self) -> Result<()> {
        if self.opts.emit_inc {
            return Ok(());
        }
        writeln!(self.wtr)?;
        Ok(())
    }

    /// Return valid Rust source code that represents the given codepoint.
    ///
    /// The source code returned is either a u32 literal or a char literal,
    /// depending on the configuration. If the configuration demands a char
    /// literal and the given codepoint is a surrogate, then return None.
    fn rust_codepoint(&self, cp: u32) -> Option<String> {
        if self.opts.char_literals {
            char::from_u32(cp).map(|c| format!("{:?}", c))
        } else {
            Some(cp.to_string())
        }
    }

    /// Return valid Rust source code indicating the type of the codepoint
    /// that we emit based on this writer's configuration.
    fn rust_codepoint_type(&self) -> &'static str {
        if self.opts.char_literals {
            "char"
        } else {
            "u32"
        }
    }
}

#[derive(Debug)]
struct LineWriter<W> {
    wtr: W,
    line: String,
    columns: usize,
    indent: String,
}

impl<W: io::Write> LineWriter<W> {
    fn new(wtr: W, columns: usize) -> LineWriter<W> {
        LineWriter {
            wtr,
            line: String::new(),
            columns,
            indent: "  ".to_string(),
        }
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        if self.line.len() + s.len() > self.columns {
            self.flush_line()?;
        }
        if self.line.is_empty() {
            self.line.push_str(&self.indent);
        }
        self.line.push_str(s);
        Ok(())
    }

    fn flush_line(&mut self) -> io::Result<()> {
        if self.line.is_empty() {
            return Ok(());
        }
        self.wtr.write_all(self.line.trim_end().as_bytes())?;
        self.wtr.write_all(b"\n")?;
        self.line.clear();
        Ok(())
    }
}

impl<W: io::Write> io::Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.flush_line()?;
        self.wtr.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_line()?;
        self.wtr.flush()
    }
}

/// Heuristically produce an appropriate constant Rust name.
fn rust_const_name(s: &str) -> String {
    // Property values are short ASCII tokens like `Mn` or `Na`, and the
    // names given on the command line may use `-`.
    let mut s = s.replace('.', "_").replace('-', "_");
    s.make_ascii_uppercase();
    s
}

/// Heuristically produce an appropriate module Rust name.
fn rust_module_name(s: &str) -> String {
    let mut s = s.replace('-', "_");
    s.make_ascii_lowercase();
    s
}

/// Return the given u32 encoded in big-endian.
pub fn u32_key(cp: u32) -> [u8; 4] {
    let mut key = [0; 4];
    BE::write_u32(&mut key, cp);
    key
}

/// Return a string representing the smallest unsigned integer type for the
/// given value.
fn smallest_unsigned_type(n: u64) -> &'static str {
    if n <= ::std::u8::MAX as u64 {
        "u8"
    } else if n <= ::std::u16::MAX as u64 {
        "u16"
    } else if n <= ::std::u32::MAX as u64 {
        "u32"
    } else {
        "u64"
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use cw_ranges::{RangeList, RangeProperty};

    use super::{
        rust_const_name, smallest_unsigned_type, u32_key, WriterBuilder,
    };

    /// A cloneable in-memory sink so tests can read back what a writer
    /// produced after the writer took ownership of its half.
    #[derive(Clone, Default)]
    struct Buffer(Rc<RefCell<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn list(ranges: &[(u32, u32, &'static str)]) -> RangeList<&'static str> {
        let mut list = RangeList::new();
        for &(start, end, prop) in ranges {
            list.add(RangeProperty::new(start, end, prop).unwrap()).unwrap();
        }
        list
    }

    fn body(out: &str) -> Vec<&str> {
        out.lines()
            .skip_while(|line| !line.ends_with("*/"))
            .skip(1)
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn rust_slice() {
        let buf = Buffer::default();
        let mut wtr =
            WriterBuilder::new("zero_width").from_writer(buf.clone());
        let zero = list(&[(0x300, 0x36F, "Mn"), (0x488, 0x489, "Me")]);
        wtr.ranges("zero_width", &zero).unwrap();

        let out = buf.contents();
        assert!(out.starts_with("/* DO NOT EDIT THIS FILE."));
        assert_eq!(
            body(&out),
            vec![
                "pub const ZERO_WIDTH: &'static [(u32, u32)] = &[",
                "  (768, 879), (1160, 1161),",
                "];",
            ]
        );
    }

    #[test]
    fn char_literals() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("wide")
            .char_literals(true)
            .from_writer(buf.clone());
        wtr.ranges("wide", &list(&[(0x3000, 0x3000, "F")])).unwrap();
        assert!(buf.contents().contains("('\\u{3000}', '\\u{3000}'),"));
    }

    #[test]
    fn inc_fragment() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("double_width")
            .emit_inc(true)
            .from_writer(buf.clone());
        let wide = list(&[(0x1100, 0x115F, "W"), (0x3000, 0x3000, "F")]);
        wtr.ranges("double_width", &wide).unwrap();

        let out = buf.contents();
        assert_eq!(
            body(&out),
            vec!["{0x1100, 0x115F},", "{0x3000, 0x3000},"]
        );
    }

    #[test]
    fn inc_rejects_enum() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("eaw")
            .emit_inc(true)
            .from_writer(buf.clone());
        let eaw = list(&[(0x1100, 0x115F, "W")]);
        assert!(wtr.ranges_to_enum("eaw", &eaw).is_err());
        assert!(wtr.names(vec!["W"]).is_err());
    }

    #[test]
    fn c_array() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("zero_width")
            .emit_c(true)
            .from_writer(buf.clone());
        wtr.ranges("zero_width", &list(&[(0x300, 0x36F, "Mn")])).unwrap();

        let out = buf.contents();
        assert!(out.contains("#define ZERO_WIDTH_SIZE 1"));
        assert!(out.contains(
            "CW_GENERATE_DATA_LINKAGE const unsigned int \
             ZERO_WIDTH[ZERO_WIDTH_SIZE + 1][2] = {"
        ));
        assert!(out.contains("{768, 879},"));
    }

    #[test]
    fn c_empty_array_is_padded() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("zero_width")
            .emit_c(true)
            .from_writer(buf.clone());
        let empty: RangeList<&str> = RangeList::new();
        wtr.ranges("zero_width", &empty).unwrap();
        let out = buf.contents();
        assert!(out.contains("#define ZERO_WIDTH_SIZE 0"));
        assert!(out.contains("[ZERO_WIDTH_SIZE + 1][2] = {\n  0\n};"));
    }

    #[test]
    fn enum_table() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("eaw").from_writer(buf.clone());
        let eaw = list(&[
            (0x0000, 0x001F, "N"),
            (0x0020, 0x007E, "Na"),
            (0x00A1, 0x00A1, "A"),
        ]);
        wtr.ranges_to_enum("east_asian_width", &eaw).unwrap();

        let out = buf.contents();
        assert!(out.contains(
            "pub const EAST_ASIAN_WIDTH_ENUM: &'static [&'static str] = &["
        ));
        assert!(out.contains("\"A\", \"N\", \"Na\","));
        assert!(out.contains(
            "pub const EAST_ASIAN_WIDTH: &'static [(u32, u32, u8)] = &["
        ));
        assert!(out.contains("(0, 31, 1), (32, 126, 2), (161, 161, 0),"));
    }

    #[test]
    fn enum_table_rejects_c() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("eaw")
            .emit_c(true)
            .from_writer(buf.clone());
        assert!(wtr.ranges_to_enum("eaw", &list(&[(0, 1, "N")])).is_err());
    }

    #[test]
    fn names_index() {
        let buf = Buffer::default();
        let mut wtr = WriterBuilder::new("gc").from_writer(buf.clone());
        wtr.names(vec!["Mn", "Me"]).unwrap();
        assert!(buf.contents().contains("(\"Me\", ME), (\"Mn\", MN),"));
    }

    #[test]
    fn helpers() {
        assert_eq!(rust_const_name("zero-width"), "ZERO_WIDTH");
        assert_eq!(u32_key(0x1F600), [0x00, 0x01, 0xF6, 0x00]);
        assert_eq!(smallest_unsigned_type(255), "u8");
        assert_eq!(smallest_unsigned_type(256), "u16");
        assert_eq!(smallest_unsigned_type(1 << 40), "u64");
    }
}
