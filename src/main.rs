//! Command-line front end for the GCL playground.
//!
//! Prints the typeset HTML for a program given on the command line or read from a file. The
//! arguments are handed to the compiler the same way a browser host hands them over, so passing
//! zero or several programs prints the host's error paragraph.

use clap::{Parser as ClapParser, ValueEnum};
use colored::Colorize;
use gcl_playground::{compile_args, parse};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[command(name = "gclp", version, about, long_about = None)]
struct Args {
    /// Program text to compile. Exactly one is expected
    #[arg(conflicts_with = "file")]
    sources: Vec<String>,

    /// Read the program from a file instead (`-` for standard input)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// If the program is malformed, also print a diagnostic to stderr and exit with failure
    #[arg(long)]
    check: bool,

    /// When to colour diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn read_source(path: &Path) -> std::io::Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match args.color {
        ColorChoice::Auto => {
            if !std::io::stderr().is_terminal() {
                colored::control::set_override(false);
            }
        }
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
    }

    let (sources, filename) = match &args.file {
        Some(path) => match read_source(path) {
            Ok(source) => (vec![source], path.display().to_string()),
            Err(err) => {
                eprintln!(
                    "{} can't read {}: {}",
                    "error:".red().bold(),
                    path.display(),
                    err
                );
                return ExitCode::FAILURE;
            }
        },
        None => (args.sources, "<argument>".to_owned()),
    };
    log::info!("compiling {} source(s) from {}", sources.len(), filename);

    println!("{}", compile_args(&sources));

    if args.check {
        let [source] = sources.as_slice() else {
            eprintln!(
                "{} expected exactly one program, got {}",
                "error:".red().bold(),
                sources.len()
            );
            return ExitCode::FAILURE;
        };
        if let Err(partial) = parse(source) {
            eprint!("{}", partial.error.diagnostic(&filename, source));
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
