use anyhow::{Context, Result};

/// Parse a hex digest such as `4e1f...` or an OpenSSH MD5 fingerprint
/// `MD5:16:27:ac:...`. Case-insensitive; colons are ignored.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("MD5:")
        .or_else(|| trimmed.strip_prefix("md5:"))
        .unwrap_or(trimmed);
    let digits = body.replace(':', "");

    hex::decode(digits).with_context(|| format!("invalid hex digest '{input}'"))
}
