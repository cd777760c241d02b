//! Flag value parsers shared by several commands.

/// Parse a byte quantity with a unit (`256M`, `1G`, `512MB`) into megabytes.
pub fn parse_megabytes(value: &str) -> Result<u64, String> {
    let upper = value.trim().to_ascii_uppercase();
    let (digits, multiplier) = if let Some(n) = upper.strip_suffix("GB") {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix('G') {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix("MB") {
        (n, 1)
    } else if let Some(n) = upper.strip_suffix('M') {
        (n, 1)
    } else {
        return Err(megabytes_error());
    };
    digits
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(multiplier))
        .ok_or_else(megabytes_error)
}

fn megabytes_error() -> String {
    "Byte quantity must be an integer with a unit of measurement like M, MB, G, or GB".to_string()
}

/// Inclusive port range: `8080` or `8080-8090`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

pub fn parse_port_range(value: &str) -> Result<PortRange, String> {
    let invalid = || format!("invalid port or port range: {}", value);
    let (start, end) = match value.split_once('-') {
        Some((start, end)) => (start, end),
        None => (value, value),
    };
    let start = start.trim().parse::<u16>().map_err(|_| invalid())?;
    let end = end.trim().parse::<u16>().map_err(|_| invalid())?;
    if start > end {
        return Err(invalid());
    }
    Ok(PortRange { start, end })
}

/// `key=value` for push `--var`.
pub fn parse_var(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.is_empty() => Ok((key.to_string(), val.to_string())),
        _ => Err(format!("invalid variable '{}', expected key=value", value)),
    }
}
