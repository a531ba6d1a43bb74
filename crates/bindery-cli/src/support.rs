//! Shared command helpers.

/// Prints a fatal error to stderr and exits non-zero.
pub fn fail(message: impl AsRef<str>) -> ! {
    eprintln!("error: {}", message.as_ref());
    std::process::exit(1);
}

/// Prints an informational line to stderr unless `--quiet` was given.
///
/// Reports go to stdout; keeping chatter on stderr leaves stdout parseable
/// in `--json` mode.
pub fn info(quiet: bool, message: impl AsRef<str>) {
    if !quiet {
        eprintln!("{}", message.as_ref());
    }
}
