use std::{fs, io, process::ExitCode};

use clap::Parser;
use kava::{interpreter::stdlib::HostIo, parse_source, run_source};

/// kava runs small Java programs: imports, classes, static and instance
/// methods, and arithmetic or string expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells kava to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed program back out as source instead of running it.
    #[arg(long)]
    dump_ast: bool,

    contents: String,
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, only when it is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(filter)
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let result = if args.dump_ast {
        parse_source(&script).map(|program| print!("{program}"))
    } else {
        run_source(&script, &HostIo::stdio())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
