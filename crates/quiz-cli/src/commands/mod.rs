pub mod convert;
pub mod inspect;
pub mod report;

use std::error::Error;

use quiz_core::errors::FileFailure;
use quiz_core::serde::to_canonical_json_bytes;
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let bytes = to_canonical_json_bytes(value)?;
    print!("{}", String::from_utf8(bytes)?);
    Ok(())
}

fn render_failures(out: &mut String, failures: &[FileFailure]) {
    use std::fmt::Write;

    if failures.is_empty() {
        return;
    }
    let _ = writeln!(out, "\nFailures ({}):", failures.len());
    for failure in failures {
        let _ = writeln!(out, "  {failure}");
    }
}
