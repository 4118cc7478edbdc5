use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::ops;

use crate::error::Result;
use crate::writer::{Writer, WriterBuilder};

/// Wraps clap matches and provides convenient accessors to various parameters.
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ops::Deref for ArgMatches<'a> {
    type Target = clap::ArgMatches<'a>;
    fn deref(&self) -> &clap::ArgMatches<'a> {
        self.0
    }
}

impl<'a> ArgMatches<'a> {
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    pub fn ucd_dir(&self) -> Result<&OsStr> {
        match self.value_of_os("ucd-dir") {
            Some(x) => Ok(x),
            None => err!("missing UCD directory"),
        }
    }

    pub fn writer(&self, name: &str) -> Result<Writer> {
        let mut builder = WriterBuilder::new(name);
        builder
            .columns(79)
            .char_literals(self.is_present("chars"))
            .emit_c(self.is_present("emit-c"))
            .emit_inc(self.is_present("inc"));
        if let Some(p) = self.value_of_os("fst-dir") {
            return builder.from_fst_dir(p);
        }
        if self.is_present("emit-c") {
            builder.table_name(self.name());
        }
        Ok(builder.from_stdout())
    }

    pub fn name(&self) -> &str {
        self.value_of("name").unwrap_or("")
    }

    /// Build a filter from the `--include` and `--exclude` flags.
    ///
    /// Both flags take a comma separated list of property values. Every value
    /// is checked against `known`, so a typo is reported rather than
    /// silently producing an empty table.
    pub fn filter<F>(&self, mut known: F) -> Result<Filter>
    where
        F: FnMut(&str) -> bool,
    {
        let mut parse = |flag: &str| -> Result<Option<BTreeSet<String>>> {
            let list = match self.value_of_lossy(flag) {
                None => return Ok(None),
                Some(list) => list,
            };
            let mut set = BTreeSet::new();
            for name in list.split(',').map(str::trim) {
                if name.is_empty() {
                    continue;
                }
                if !known(name) {
                    return err!("unrecognized property value: {:?}", name);
                }
                set.insert(name.to_string());
            }
            Ok(Some(set))
        };
        let included = parse("include")?;
        let excluded = parse("exclude")?;
        Ok(Filter { included, excluded })
    }

    /// Parse a comma separated list of property values from the given flag,
    /// falling back to `default` when the flag is absent.
    pub fn values(&self, flag: &str, default: &[&str]) -> Vec<String> {
        match self.value_of_lossy(flag) {
            None => default.iter().map(|s| s.to_string()).collect(),
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A filter over property values, built from `--include` and `--exclude`.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    included: Option<BTreeSet<String>>,
    excluded: Option<BTreeSet<String>>,
}

impl Filter {
    /// Returns true if and only if the given property value should be
    /// emitted. Exclusion overrides inclusion.
    pub fn contains(&self, name: &str) -> bool {
        let included = match self.included {
            None => true,
            Some(ref set) => set.contains(name),
        };
        let excluded = match self.excluded {
            None => false,
            Some(ref set) => set.contains(name),
        };
        included && !excluded
    }
}
