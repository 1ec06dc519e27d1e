//! Shapes CLI - perimeter and area calculator

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shape_calc::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
