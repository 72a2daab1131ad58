//! Terminal styling constants.

/// Starts bold text.
pub const BOLD: &str = "\x1b[1m";

/// Resets all styling.
pub const RESET: &str = "\x1b[0m";
