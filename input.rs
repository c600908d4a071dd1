use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, warn};

/// Resolve a WHATWG encoding label such as `latin1` or `shift_jis`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| anyhow!("unknown encoding label `{}`", label))
}

/// Decode raw bytes to text.
///
/// Without an explicit encoding a BOM decides, falling back to UTF-8. An
/// explicit encoding always wins; only its own BOM is stripped.
/// Malformed sequences are replaced with U+FFFD.
pub fn decode(bytes: &[u8], encoding: Option<&'static Encoding>, source: &str) -> String {
    let (text, used, had_errors) = match encoding {
        Some(enc) => {
            let (text, had_errors) = enc.decode_with_bom_removal(bytes);
            (text, enc, had_errors)
        }
        None => UTF_8.decode(bytes),
    };
    debug!(source, encoding = used.name(), bytes = bytes.len(), "decoded input");
    if had_errors {
        warn!(source, encoding = used.name(), "malformed byte sequences replaced");
    }
    text.into_owned()
}

pub fn read_file(path: &Path, encoding: Option<&'static Encoding>) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(decode(&bytes, encoding, &path.display().to_string()))
}

pub fn read_stdin(encoding: Option<&'static Encoding>) -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read from stdin")?;
    Ok(decode(&bytes, encoding, "stdin"))
}
