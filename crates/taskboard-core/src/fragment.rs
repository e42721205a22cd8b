//! URL Fragment Codec
//!
//! The fragment after `#` carries the active project name.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'%');

/// Project name from a `location.hash` value (with or without the `#`).
pub fn decode(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Fragment text for a project name, without the leading `#`.
pub fn encode(name: &str) -> String {
    utf8_percent_encode(name, FRAGMENT).to_string()
}
