mod cli;
mod error;
mod note;
mod transpose;

use std::process::ExitCode;

use tracing::{debug, error, info};

use crate::cli::parse_arguments;
use crate::error::Error;
use crate::note::{read_notes, render_notes};
use crate::transpose::transpose;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "transposition aborted");
            eprintln!("{}", err);
            if err.is_usage() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

/// Primary entry point of the program.
fn run() -> Result<(), Error> {
    let args = parse_arguments()?;
    let notes = read_notes(&args.input_file)?;
    debug!(path = %args.input_file.display(), notes = notes.len(), "read notes");

    let transposed = transpose(&notes, args.semitones)?;
    println!("{}", render_notes(&transposed));
    info!(
        notes = transposed.len(),
        semitones = args.semitones,
        "transposition completed successfully"
    );
    Ok(())
}
