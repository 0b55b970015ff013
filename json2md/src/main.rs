//! # json2md
//!
//! A CLI tool that converts decoded CodeQL query results into a Markdown
//! table, rewriting analyzed-source locations into GitHub permalinks.
//!
//! ## Usage
//!
//! ```bash
//! # Basic conversion (writes output.md)
//! json2md results.json
//!
//! # Rewrite file: locations under the analyzed source tree into permalinks
//! json2md results.json \
//!     --nwo acme/widget \
//!     --src /home/runner/work/widget/widget \
//!     --ref main \
//!     -o results.md
//! ```
//!
//! The input is the JSON written by
//! `codeql bqrs decode --format=json --entities=all`. The `--src` prefix is
//! the `sourceLocationPrefix` reported by `codeql resolve database`; without
//! it no location matches and rewriting is disabled.

use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use json2mdlib::{convert_file, ConvertOptions, Json2mdError};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("json2md")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert decoded CodeQL query results (JSON) into a Markdown table")
        .arg(Arg::new("input").required(true).help("Input JSON file"))
        .arg(
            Arg::new("src")
                .long("src")
                .value_name("prefix")
                .help("Source location prefix to rewrite into permalinks"),
        )
        .arg(
            Arg::new("nwo")
                .long("nwo")
                .value_name("owner/repo")
                .help("Repository name with owner, used in the heading and permalinks"),
        )
        .arg(
            Arg::new("ref")
                .long("ref")
                .value_name("revision")
                .help("Revision to embed in permalinks [default: HEAD]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .default_value("output.md")
                .help("Output Markdown file"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| Json2mdError::User("missing required argument: input".to_string()))?;
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("output.md");

    let mut options = ConvertOptions::new();
    if let Some(nwo) = matches.get_one::<String>("nwo") {
        options = options.nwo(nwo);
    }
    if let Some(src) = matches.get_one::<String>("src") {
        options = options.source_prefix(src);
    }
    if let Some(git_ref) = matches.get_one::<String>("ref") {
        options = options.git_ref(git_ref);
    }

    convert_file(input, output, &options)?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // User errors get a single clean line on stdout; everything
            // else surfaces with full diagnostics on stderr.
            if let Some(Json2mdError::User(message)) = err.downcast_ref::<Json2mdError>() {
                println!("{message}");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
