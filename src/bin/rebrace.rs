//! Command-line interface for rebrace
//! Compiles a bracketed pattern into a regular expression, or dumps the
//! parsed syntax tree.
//!
//! Usage:
//!   rebrace `<pattern>`                      - Compile a pattern given as an argument
//!   rebrace --file `<path>`                  - Compile a pattern read from a file
//!   rebrace --format ast-json `<pattern>`    - Print the syntax tree as JSON

use clap::{Arg, Command};
use std::fs;
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("rebrace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile a bracketed pattern into a regular expression")
        .arg(
            Arg::new("pattern")
                .help("Pattern text; reads stdin when neither this nor --file is given")
                .index(1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .help("Read the pattern from a file")
                .conflicts_with("pattern"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format ('regex' or 'ast-json')")
                .default_value("regex"),
        )
        .get_matches();

    let source = match read_source(&matches) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let format = matches.get_one::<String>("format").expect("has a default");
    match format.as_str() {
        "regex" => match rebrace::compile(&source) {
            Ok(regex) => println!("{}", regex),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        "ast-json" => match rebrace::parse(&source) {
            Ok(ast) => {
                let json =
                    serde_json::to_string_pretty(&ast).expect("syntax tree serializes to JSON");
                println!("{}", json);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        other => {
            eprintln!("Error: unknown output format '{}'", other);
            process::exit(1);
        }
    }
}

/// Read the pattern from the positional argument, a file, or stdin.
fn read_source(matches: &clap::ArgMatches) -> Result<String, std::io::Error> {
    if let Some(pattern) = matches.get_one::<String>("pattern") {
        return Ok(pattern.clone());
    }
    if let Some(path) = matches.get_one::<String>("file") {
        // A trailing newline would otherwise parse as an outer literal.
        return Ok(fs::read_to_string(path)?
            .trim_end_matches('\n')
            .to_string());
    }
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(source.trim_end_matches('\n').to_string())
}
