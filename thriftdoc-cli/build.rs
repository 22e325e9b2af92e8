use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the built-in formats registered by thriftdoc-babel
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_FORMATS: &[&str] = &["markdown", "json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("thriftdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render parsed Thrift IDL documents as markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the parsed Thrift document (JSON)")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output format")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .help("Document name used for the title")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("no-toc")
                .long("no-toc")
                .help("Do not emit the table-of-contents marker")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a thriftdoc.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "thriftdoc", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "thriftdoc", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "thriftdoc", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
