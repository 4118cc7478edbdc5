use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
cw-generate is a tool that generates the codepoint range tables used to
compute the display width of characters.

Each table is a sorted sequence of maximal, non-overlapping codepoint ranges
that can be searched via binary search. Tables can be emitted as Rust source,
as C arrays, as bare initializer fragments suitable for including into a C++
array of code_point_range, or as FSTs.

Set RUST_LOG=debug to see how many records and ranges each step produced.";

const ABOUT_GENERAL_CATEGORY: &'static str = "\
general-category produces one table of codepoint ranges for each
General_Category value found in extracted/DerivedGeneralCategory.txt.
";

const ABOUT_EAST_ASIAN_WIDTH: &'static str = "\
east-asian-width produces one table of codepoint ranges for each
East_Asian_Width value found in EastAsianWidth.txt. Codepoints not listed in
that file have the value N and do not appear in any table.
";

const ABOUT_WIDTH: &'static str = "\
width produces the zero width and double width tables consumed by a
character width library.

Zero width codepoints are those whose General_Category is one of the
categories given by --zero-width. Double width codepoints are those whose
East_Asian_Width is one of the classes given by --double-width. A codepoint
in both sets is zero width. Every other codepoint is narrow and is not
emitted.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    // Various common flags and arguments.
    let flag_name = |default| {
        Arg::with_name("name")
            .long("name")
            .help("Set the name of the table in the emitted code.")
            .takes_value(true)
            .default_value(default)
    };
    let flag_chars = Arg::with_name("chars").long("chars").help(
        "Write codepoints as character literals. If a codepoint \
         cannot be written as a character literal, then it is \
         silently dropped.",
    );
    let flag_fst_dir = Arg::with_name("fst-dir")
        .long("fst-dir")
        .help("Emit the table as a FST in Rust source code.")
        .takes_value(true);
    let flag_emit_c = Arg::with_name("emit-c")
        .long("emit-c")
        .conflicts_with_all(&["fst-dir", "chars", "inc"])
        .help("Emit the tables as C arrays instead of Rust slices.");
    let flag_inc = Arg::with_name("inc")
        .long("inc")
        .conflicts_with_all(&["fst-dir", "chars", "enum"])
        .help(
            "Emit each range as a bare '{0xXXXX, 0xYYYY},' line, suitable \
             for including into a C++ array of code_point_range.",
        );
    let ucd_dir = Arg::with_name("ucd-dir")
        .required(true)
        .help("Directory containing the Unicode character database files.");
    let flag_include = |what| {
        Arg::with_name("include").long("include").takes_value(true).help(what)
    };
    let flag_exclude = |what| {
        Arg::with_name("exclude").long("exclude").takes_value(true).help(what)
    };

    // Subcommands.
    let cmd_general_category = SubCommand::with_name("general-category")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the General_Category property tables.")
        .before_help(ABOUT_GENERAL_CATEGORY)
        .arg(ucd_dir.clone())
        .arg(flag_fst_dir.clone())
        .arg(flag_name("GENERAL_CATEGORY"))
        .arg(flag_chars.clone())
        .arg(flag_emit_c.clone())
        .arg(flag_inc.clone())
        .arg(
            Arg::with_name("enum").long("enum").help(
                "Emit a single table that maps codepoints to categories.",
            ),
        )
        .arg(flag_include(
            "A comma separated list of categories to include. \
             When absent, all categories are included.",
        ))
        .arg(flag_exclude(
            "A comma separated list of categories to exclude. \
             When absent, no categories are excluded. This overrides \
             categories specified with the --include flag.",
        ))
        .arg(
            Arg::with_name("list-categories")
                .long("list-categories")
                .help("List every category present in the UCD."),
        );
    let cmd_east_asian_width = SubCommand::with_name("east-asian-width")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the East_Asian_Width property tables.")
        .before_help(ABOUT_EAST_ASIAN_WIDTH)
        .arg(ucd_dir.clone())
        .arg(flag_fst_dir.clone())
        .arg(flag_name("EAST_ASIAN_WIDTH"))
        .arg(flag_chars.clone())
        .arg(flag_emit_c.clone())
        .arg(flag_inc.clone())
        .arg(Arg::with_name("enum").long("enum").help(
            "Emit a single table that maps codepoints to East Asian widths.",
        ))
        .arg(flag_include(
            "A comma separated list of widths to include. \
             When absent, all widths are included.",
        ))
        .arg(flag_exclude(
            "A comma separated list of widths to exclude. \
             When absent, no widths are excluded. This overrides \
             widths specified with the --include flag.",
        ))
        .arg(
            Arg::with_name("list-widths")
                .long("list-widths")
                .help("List every East Asian width present in the UCD."),
        );
    let cmd_width = SubCommand::with_name("width")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the zero width and double width tables.")
        .before_help(ABOUT_WIDTH)
        .arg(ucd_dir.clone())
        .arg(flag_fst_dir.clone())
        .arg(flag_name("WIDTH"))
        .arg(flag_chars.clone())
        .arg(flag_emit_c.clone())
        .arg(flag_inc.clone())
        .arg(
            Arg::with_name("table")
                .long("table")
                .takes_value(true)
                .possible_values(&["zero", "double", "all"])
                .default_value("all")
                .help("Which width table to emit."),
        )
        .arg(
            Arg::with_name("enum")
                .long("enum")
                .conflicts_with_all(&["emit-c", "inc"])
                .help(
                    "With --table all, emit a single table that maps \
                     codepoints to Zero or Wide.",
                ),
        )
        .arg(
            Arg::with_name("zero-width")
                .long("zero-width")
                .takes_value(true)
                .help(
                    "A comma separated list of general categories whose \
                     codepoints are zero width. Defaults to Mn,Me.",
                ),
        )
        .arg(
            Arg::with_name("double-width")
                .long("double-width")
                .takes_value(true)
                .help(
                    "A comma separated list of East Asian widths whose \
                     codepoints are double width. Defaults to W,F.",
                ),
        );

    App::new("cw-generate")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .subcommand(cmd_general_category)
        .subcommand(cmd_east_asian_width)
        .subcommand(cmd_width)
}

#[cfg(test)]
mod tests {
    use super::app;

    #[test]
    fn width_defaults() {
        let matches = app()
            .get_matches_from_safe(vec!["cw-generate", "width", "/ucd"])
            .unwrap();
        let m = matches.subcommand_matches("width").unwrap();
        assert_eq!(m.value_of("ucd-dir"), Some("/ucd"));
        assert_eq!(m.value_of("table"), Some("all"));
        assert_eq!(m.value_of("name"), Some("WIDTH"));
        assert!(!m.is_present("enum"));
    }

    #[test]
    fn width_rejects_unknown_table() {
        let result = app().get_matches_from_safe(vec![
            "cw-generate",
            "width",
            "/ucd",
            "--table",
            "narrow",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn emit_c_conflicts_with_inc() {
        let result = app().get_matches_from_safe(vec![
            "cw-generate",
            "general-category",
            "/ucd",
            "--emit-c",
            "--inc",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn inc_conflicts_with_enum() {
        for cmd in &["general-category", "east-asian-width", "width"] {
            let result = app().get_matches_from_safe(vec![
                "cw-generate",
                *cmd,
                "/ucd",
                "--inc",
                "--enum",
            ]);
            assert!(result.is_err(), "{} accepted --inc --enum", cmd);
        }
    }

    #[test]
    fn include_and_exclude() {
        let matches = app()
            .get_matches_from_safe(vec![
                "cw-generate",
                "east-asian-width",
                "/ucd",
                "--include",
                "W,F,A",
                "--exclude",
                "A",
            ])
            .unwrap();
        let m = matches.subcommand_matches("east-asian-width").unwrap();
        assert_eq!(m.value_of("include"), Some("W,F,A"));
        assert_eq!(m.value_of("exclude"), Some("A"));
    }
}
