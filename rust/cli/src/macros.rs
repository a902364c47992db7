//! Macros for common CLI error handling patterns.

/// Write to a stream and exit with error code if writing fails.
///
/// Handles the common pattern of attempting to write to stderr/stdout and
/// returning an error exit code if the write operation fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Parse a JSON line or continue to the next iteration on error.
///
/// Handles the common pattern of parsing JSONL records where parse errors
/// should be logged and the iteration should continue.
///
/// # Examples
///
/// ```ignore
/// let record: RoundRecord = parse_json_or_continue!(line, err, line_num);
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                let _ =
                    $crate::ui::write_error($err, &format!("Failed to parse {}: {}", $context, e));
                continue;
            }
        }
    };
}
