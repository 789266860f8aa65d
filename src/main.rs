use std::ffi::OsString;
use std::io;

use clap::{CommandFactory, Parser};
use log::debug;
use uni_lookup::{DisplayConfig, ModeFlags, Resolver, Ucd};

const USAGE: &str = "\
  uni [-n] <search>    search for codepoints with names matching <search>
  uni [-n] /regex/     search for codepoints with names matching regular expression /regex/
  uni [-p] U+<xxxx>    display codepoint U+<xxxx>
  uni [-c] <string>    display each codepoint in <string>
  uni -x <hex>         decode UTF-8 string from <hex> and display codepoints if valid";

#[derive(Parser, Debug)]
#[command(name = "uni", version, about = "Look up Unicode codepoints", override_usage = USAGE)]
struct Cli {
    /// Display each codepoint in the argument
    #[arg(short = 'c')]
    string: bool,

    /// Search for codepoints by name
    #[arg(short = 'n')]
    name: bool,

    /// Display the given U+xxxx codepoints
    #[arg(short = 'p')]
    point: bool,

    /// Decode UTF-8 from hex and display codepoints
    #[arg(short = 'x')]
    hex: bool,

    /// Display UTF-8 sequences alongside codepoints
    #[arg(short = '8', long = "utf8")]
    utf8: bool,

    /// Display UTF-16 sequences alongside codepoints (also -16)
    #[arg(long = "utf16")]
    utf16: bool,

    #[arg(trailing_var_arg = true)]
    args: Vec<OsString>,
}

/// Accept the two-digit `-16` flag clap cannot express as a short option.
fn normalize_args(raw: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut in_flags = true;
    raw.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || !in_flags {
                return arg;
            }
            if arg.as_os_str() == "-16" {
                return OsString::from("--utf16");
            }
            if !arg.to_string_lossy().starts_with('-') || arg.as_os_str() == "--" {
                in_flags = false;
            }
            arg
        })
        .collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    debug!("{:?}", cli);

    let flags = ModeFlags {
        string: cli.string,
        name: cli.name,
        codepoint: cli.point,
        hex: cli.hex,
    };
    let config = DisplayConfig::new(cli.utf8, cli.utf16);

    let result = flags.select().and_then(|mode| {
        let stdout = io::stdout().lock();
        let mut resolver = Resolver::new(&Ucd, config, stdout, io::stderr());
        resolver.run(mode, cli.args.as_slice())
    });

    if let Err(e) = result {
        eprintln!("uni: {}", e);
        if e.is_usage() {
            eprintln!("{}", Cli::command().render_help());
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn rewrites_sixteen_flag_before_search_terms() {
        assert_eq!(
            normalize_args(os(&["uni", "-16", "U+1F600"])),
            os(&["uni", "--utf16", "U+1F600"])
        );
        assert_eq!(
            normalize_args(os(&["uni", "-c", "-16", "x", "-16"])),
            os(&["uni", "-c", "--utf16", "x", "-16"])
        );
    }

    #[test]
    fn parses_flags_and_terms() {
        let cli = Cli::parse_from(normalize_args(os(&["uni", "-8", "-x", "c3", "a9"])));
        assert!(cli.utf8 && cli.hex && !cli.utf16);
        assert_eq!(cli.args, os(&["c3", "a9"]));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
