//! NDJSON output for `--json` mode.
//!
//! Every line written is one self-contained JSON object; see [`events`] for
//! the shapes.

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

/// Write a typed event followed by a newline.
pub fn write_event<T: Serialize, W: Write + ?Sized>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
