use std::{fs, path::PathBuf, process};

use clap::{Parser, Subcommand};
use quill::{format_source, lint_source, run_program};

/// quill is a small scripting language with a tree-walking interpreter, a
/// formatter and a linter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Executes a script.
    Run {
        /// Path to the script file.
        file: PathBuf,
    },
    /// Prints the script formatted in the canonical style.
    Format {
        /// Path to the script file.
        file: PathBuf,
    },
    /// Reports style violations in the script.
    Lint {
        /// Path to the script file.
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let file = match &args.command {
        Command::Run { file } | Command::Format { file } | Command::Lint { file } => file,
    };
    let source = fs::read_to_string(file).unwrap_or_else(|_| {
        eprintln!(
            "Failed to read the input file '{}'. Perhaps this file does not exist?",
            file.display()
        );
        process::exit(1);
    });

    match args.command {
        Command::Run { .. } => {
            if let Err(e) = run_program(&source) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        Command::Format { .. } => match format_source(&source) {
            Ok(formatted) => print!("{formatted}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
        Command::Lint { .. } => match lint_source(&source) {
            Ok(violations) => {
                for violation in &violations {
                    eprintln!("{violation}");
                }
                if !violations.is_empty() {
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        },
    }
}
