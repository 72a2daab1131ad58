//! # Unconditional error printing.
//!
//! No verbosity gate: callers reach for this when something already went
//! wrong. The error value is rendered via its `Display` impl and is not
//! validated or classified here.
//!
//! ## Output format
//! ```text
//! \x1b[1mERROR:\x1b[0m <message>: <error text>\n
//! ```

use std::error::Error;
use std::io::{self, Write};

use crate::print::style::{BOLD, RESET};

/// Writes one `ERROR` line to the given sink.
///
/// The whole line is handed to the sink in a single write.
pub fn write_error<W: Write>(out: &mut W, message: &str, err: &dyn Error) -> io::Result<()> {
    let line = format!("{BOLD}ERROR:{RESET} {message}: {err}\n");
    out.write_all(line.as_bytes())
}

/// Prints one `ERROR` line to stdout.
///
/// Stdout write errors are ignored; this call never fails and never
/// suppresses output.
pub fn print_error(message: &str, err: &dyn Error) {
    let _ = write_error(&mut io::stdout().lock(), message, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("disk quota exceeded")]
    struct QuotaError;

    fn error_line(message: &str, err: &dyn Error) -> String {
        let mut out = Vec::new();
        write_error(&mut out, message, err).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_error_line_format() {
        assert_eq!(
            error_line("failed to save report", &QuotaError),
            "\x1b[1mERROR:\x1b[0m failed to save report: disk quota exceeded\n"
        );
    }

    #[test]
    fn test_io_error_renders_its_display_text() {
        let err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        assert_eq!(
            error_line("read config", &err),
            "\x1b[1mERROR:\x1b[0m read config: file not found\n"
        );
    }

    #[test]
    fn test_empty_message_still_prints_both_parts() {
        assert_eq!(
            error_line("", &QuotaError),
            "\x1b[1mERROR:\x1b[0m : disk quota exceeded\n"
        );
    }
}
