// Command-line interface for thriftdoc
//
// This binary renders a parsed Thrift IDL document (the JSON syntax tree produced by a thrift
// parser) as a markdown reference page.
//
// The core capabilities use the thriftdoc-babel crate; this binary only wires files,
// configuration and logging around it.
//
// Usage:
//  thriftdoc <input> [--to <format>] [--output <file>] [--name <name>] [--no-toc]
//  thriftdoc --list-formats                 - List available output formats
//
// The output format is taken from --to, then from the extension of --output, then from
// `convert.format` in the configuration.

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::path::Path;
use thriftdoc_babel::schema::from_json;
use thriftdoc_babel::{FormatRegistry, TransformOptions};
use thriftdoc_config::{Loader, ThriftdocConfig, LOCAL_CONFIG_FILE};
use tracing::{debug, info};

fn build_cli() -> Command {
    Command::new("thriftdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render parsed Thrift IDL documents as markdown")
        .long_about(
            "thriftdoc turns the JSON syntax tree of a Thrift IDL file into a markdown\n\
            reference page: namespaces, typedefs, constants, enumerations, structures\n\
            and services.\n\n\
            Examples:\n  \
            thriftdoc meta.thrift.json                    # Markdown to stdout\n  \
            thriftdoc meta.thrift.json -o meta.md         # Markdown to a file\n  \
            thriftdoc meta.thrift.json --to json          # Document tree as JSON\n  \
            thriftdoc meta.thrift.json --no-toc           # Without the TOC marker",
        )
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
                .help("Output format (defaults to the configured format)")
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
                .help("Document name used for the title (defaults to the input file name)")
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
                .value_name("PATH")
                .help("Path to a thriftdoc.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    handle_convert_command(&matches, &config);
}

/// Handle the default (and only) conversion command
fn handle_convert_command(matches: &ArgMatches, config: &ThriftdocConfig) {
    let Some(input) = matches.get_one::<String>("input") else {
        eprintln!("Error: an input file is required. Use --help for usage information.");
        std::process::exit(1);
    };
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    let registry = FormatRegistry::default();

    let to = resolve_format(
        &registry,
        matches.get_one::<String>("to").map(|s| s.as_str()),
        output,
        config,
    );
    if let Err(e) = registry.get(&to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let name = document_name(input, matches.get_one::<String>("name").map(|s| s.as_str()));
    let options = transform_options(config, matches.get_flag("no-toc"));
    debug!(input = %input, format = %to, name = %name, "converting");

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let result = registry
        .serialize(&name, &doc, &to, &options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!(path, "wrote output");
        }
        None => print!("{result}"),
    }
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:");
    for format_name in registry.list_formats() {
        match registry.get(&format_name) {
            Ok(format) if !format.description().is_empty() => {
                println!("  {format_name:<10} {}", format.description());
            }
            _ => println!("  {format_name}"),
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ThriftdocConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// `--to`, else the extension of `--output`, else `convert.format`.
fn resolve_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    output: Option<&str>,
    config: &ThriftdocConfig,
) -> String {
    if let Some(format) = explicit {
        return format.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.format.clone())
}

/// The explicit name, else the input's file name.
fn document_name(input: &str, explicit: Option<&str>) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    Path::new(input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string())
}

fn transform_options(config: &ThriftdocConfig, no_toc: bool) -> TransformOptions {
    let mut options = TransformOptions::from(&config.render);
    if no_toc {
        options.table_of_contents = false;
    }
    options
}
