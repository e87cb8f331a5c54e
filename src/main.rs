//! Binary entry point: reads an AST XML document from a file path argument
//! or, if none is given, from stdin, then runs it.

use std::io::Read;
use std::process::ExitCode;

use sol25::{diagnostics, driver, error::SolError, xml};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            diagnostics::report(&err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run() -> Result<(), SolError> {
    let source = read_source()?;
    let program = xml::load_program(&source)?;
    driver::run(&program)
}

fn read_source() -> Result<String, SolError> {
    let mut args = std::env::args().skip(1);
    match args.next() {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| SolError::Structure(format!("could not read '{path}': {e}"))),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| SolError::Structure(format!("could not read standard input: {e}")))?;
            Ok(buf)
        }
    }
}
