//! Binary entrypoint for the `seqlink` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match seqlink::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
