//! # Unconditional to-do printing.
//!
//! ## Output format
//! ```text
//! \x1b[1mTODO:\x1b[0m <formatted message>\n
//! ```

use std::io::{self, Write};

use crate::format::{format_message, Value};
use crate::print::style::{BOLD, RESET};

/// Writes one `TODO` line to the given sink.
///
/// The whole line is handed to the sink in a single write.
pub fn write_todo<W: Write>(out: &mut W, values: &[Value]) -> io::Result<()> {
    let line = format!("{BOLD}TODO:{RESET} {}\n", format_message(values));
    out.write_all(line.as_bytes())
}

/// Prints one `TODO` line to stdout.
///
/// Stdout write errors are ignored; this call never fails.
pub fn print_todo(values: &[Value]) {
    let _ = write_todo(&mut io::stdout().lock(), values);
}
