//! Filename sanitization.
//!
//! Candidate filenames are derived from URLs controlled by whoever posted
//! them, so they are validated before touching the filesystem.

use crate::error::{Error, Result};

/// Characters replaced with `_` rather than rejected outright.
const REPLACED: [char; 7] = [':', '*', '?', '"', '<', '>', '|'];

/// Validates a URL-derived filename and replaces characters the
/// filesystem may choke on.
///
/// Anything that could escape the feed directory is rejected, not
/// repaired: traversal sequences, path separators and null bytes.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let reject = |why: &str| Err(Error::InvalidFilename(format!("{}: '{}'", why, name)));

    if name.contains("..") {
        return reject("Path traversal detected");
    }
    if name.contains('/') || name.contains('\\') {
        return reject("Path separators not allowed in filename");
    }
    if name.contains('\0') {
        return reject("Null bytes not allowed in filename");
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if REPLACED.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
