//! tstrip: TypeScript type-stripping transpiler CLI.
//!
//! Usage:
//!   tstrip [options] [file...]
//!
//! Each input file is transpiled to JavaScript next to the source
//! (`.ts` → `.js`, `.tsx` → `.jsx`) or under `--outDir`.

use clap::Parser as ClapParser;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use tstrip_transpiler::{output_path, transpile_files, TranspileOptions};

#[derive(ClapParser, Debug)]
#[command(
    name = "tstrip",
    about = "tstrip - a TypeScript type-stripping transpiler",
    disable_version_flag = true
)]
struct Cli {
    /// TypeScript files to transpile.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Redirect output structure to the directory.
    #[arg(long = "outDir")]
    out_dir: Option<PathBuf>,

    /// Treat all inputs as JSX regardless of extension.
    #[arg(long)]
    jsx: bool,

    /// Token budget for each disambiguation lookahead.
    #[arg(long = "maxLookahead", default_value_t = 256)]
    max_lookahead: usize,

    /// List files as they are written.
    #[arg(long = "listFiles")]
    list_files: bool,

    /// Enable colored diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("tstrip Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if cli.files.is_empty() {
        print_error("No input files given.");
        process::exit(1);
    }

    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let start = Instant::now();
    let options = TranspileOptions {
        jsx: if cli.jsx { Some(true) } else { None },
        max_lookahead: cli.max_lookahead,
    };

    let results = transpile_files(&cli.files, &options);
    let use_color = cli.pretty && stderr_is_terminal();

    let mut error_count = 0usize;
    let mut io_failure = false;

    for (input, result) in cli.files.iter().zip(results) {
        let output = match result {
            Ok(output) => output,
            Err(error) => {
                print_error(&error.to_string());
                io_failure = true;
                continue;
            }
        };

        for diagnostic in output.diagnostics.diagnostics() {
            print_diagnostic(diagnostic, use_color);
        }
        error_count += output.diagnostics.error_count();

        // Output is written even when invalid; the exit code is the
        // signal that it must not be trusted.
        let destination = match &cli.out_dir {
            Some(dir) => {
                let file_name = output_path(input)
                    .file_name()
                    .map(|n| n.to_os_string())
                    .unwrap_or_default();
                dir.join(file_name)
            }
            None => output_path(input),
        };
        if let Some(parent) = destination.parent() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                print_error(&format!("failed to create {}: {}", parent.display(), error));
                io_failure = true;
                continue;
            }
        }
        if let Err(error) = std::fs::write(&destination, &output.js) {
            print_error(&format!("failed to write {}: {}", destination.display(), error));
            io_failure = true;
            continue;
        }
        if cli.list_files {
            println!("{}", destination.display());
        }
    }

    let elapsed = start.elapsed();
    if error_count > 0 {
        let plural = if error_count == 1 { "" } else { "s" };
        if use_color {
            eprintln!("\n{}Found {} error{}.{}", RED, error_count, plural, RESET);
        } else {
            eprintln!("\nFound {} error{}.", error_count, plural);
        }
        return 2;
    }
    if io_failure {
        return 1;
    }

    if use_color {
        eprintln!(
            "{}Transpiled {} file(s) in {:.2}s.{}",
            GRAY,
            cli.files.len(),
            elapsed.as_secs_f64(),
            RESET
        );
    }
    0
}

fn print_diagnostic(diagnostic: &tstrip_diagnostics::Diagnostic, use_color: bool) {
    if use_color {
        let color = if diagnostic.is_error() { RED } else { YELLOW };
        let category = if diagnostic.is_error() { "error" } else { "warning" };
        if let Some(ref file) = diagnostic.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(span) = diagnostic.span {
                eprint!("({})", span.start);
            }
            eprint!(": ");
        }
        eprintln!(
            "{}{}{}{} {}TS{}{}: {}",
            BOLD, color, category, RESET, CYAN, diagnostic.code, RESET, diagnostic.message_text
        );
    } else {
        eprintln!("{}", diagnostic);
    }
}

fn print_error(message: &str) {
    if stderr_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, message);
    } else {
        eprintln!("error: {}", message);
    }
}

fn stderr_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
