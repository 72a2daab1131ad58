//! # Verbosity-gated info printing.
//!
//! [`Messenger`] is the configuration surface for conditional output: a
//! single `verbose` flag. When the flag is off, info printing produces
//! zero bytes — not even a newline.
//!
//! ## Output format
//! ```text
//! \x1b[1mINFO\x1b[0m: <formatted message>\n
//! ```
//!
//! ## Example
//! ```rust
//! use messenger_utils::{msg, Messenger};
//!
//! let messenger = Messenger::new(true);
//! messenger.print_info(&msg!["cache warmed in", 125_u64, "ms"]);
//!
//! let quiet = Messenger::default();
//! quiet.print_info(&msg!["never shown"]);
//! ```

use std::io::{self, Write};

use crate::format::{format_message, Value};
use crate::print::style::{BOLD, RESET};

/// Conditional info printer.
///
/// The default is quiet; flip [`Messenger::verbose`] (or construct with
/// [`Messenger::new`]) to enable output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Messenger {
    /// Whether info printing is enabled.
    pub verbose: bool,
}

impl Messenger {
    /// Creates a messenger with the given verbosity.
    #[inline]
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Writes one `INFO` line to the given sink, if verbose.
    ///
    /// The whole line (label, body, newline) is handed to the sink in a
    /// single write. When `verbose` is off this is a no-op returning
    /// `Ok(())`. An empty value sequence still produces the labelled
    /// empty line.
    pub fn write_info<W: Write>(&self, out: &mut W, values: &[Value]) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        let line = format!("{BOLD}INFO{RESET}: {}\n", format_message(values));
        out.write_all(line.as_bytes())
    }

    /// Prints one `INFO` line to stdout, if verbose.
    ///
    /// When quiet, stdout is never touched. Stdout write errors are
    /// ignored; this call never fails.
    pub fn print_info(&self, values: &[Value]) {
        if !self.verbose {
            return;
        }
        let _ = self.write_info(&mut io::stdout().lock(), values);
    }
}
