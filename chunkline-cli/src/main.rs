//! `chunks` - split a text file into escaped, word-boundary chunks

use chunkline_cli::commands::ChunkArgs;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match ChunkArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors go to stderr with status 1; --help and --version succeed.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
