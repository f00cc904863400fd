//! Flat numeric dumps — one line of comma-separated values.
//!
//! The only persistence format the formation experiments need: iteration
//! counts, error trajectories, and intensity vectors are written as a single
//! comma-joined line and read back by splitting on commas. No schema, no
//! framing, no escaping — the values themselves never contain commas.
//!
//! Requires the `std` feature.

use core::fmt::Display;
use core::str::FromStr;
use std::fs;
use std::io;
use std::path::Path;

/// Write `values` to `path` as one comma-separated line.
///
/// Overwrites any existing file. `f64` values round-trip exactly through
/// their `Display` form.
pub fn write_series<T: Display>(path: impl AsRef<Path>, values: &[T]) -> io::Result<()> {
    let line: Vec<String> = values.iter().map(ToString::to_string).collect();
    fs::write(path, line.join(","))
}

/// Read a comma-separated line from `path` and parse every entry as `T`.
///
/// An empty (or whitespace-only) file reads as an empty series. Any
/// unparseable entry is reported as [`io::ErrorKind::InvalidData`] with the
/// offending token in the message.
pub fn read_series<T: FromStr>(path: impl AsRef<Path>) -> io::Result<Vec<T>> {
    let text = fs::read_to_string(path)?;
    let line = text.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }
    line.split(',')
        .map(|token| {
            token.trim().parse::<T>().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unparseable series entry `{token}`"),
                )
            })
        })
        .collect()
}
