use serde_json::Value;
use std::io::{self, Read};

/// Read a JSON request piped into `jsk`, e.g. `echo '{...}' | jsk gst`.
/// Returns None when stdin is a TTY or the pipe is empty, so direct flags
/// can take over.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut piped = String::new();
    io::stdin().read_to_string(&mut piped)?;

    let trimmed = piped.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(trimmed)?))
}
