//! Byte size formatting and parsing

use crate::error::{Error, Result};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a size in bytes to human-readable format.
///
/// Divides by 1024 per step and always prints one decimal place,
/// so `0` is `"0.0 B"` and `1536` is `"1.5 KB"`. Anything past terabytes is PB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} PB", size)
}

/// Parse a size filter string like "300M", "1.5g" or "512" into bytes.
///
/// A trailing K/M/G/T (any case) multiplies by 1024^1..4 and allows a decimal
/// mantissa. Without a unit the string must be a plain integer byte count.
pub fn parse_size(input: &str) -> Result<u64> {
    let invalid = || Error::InvalidSizeFormat {
        input: input.to_string(),
    };

    let s = input.trim();
    let Some(last) = s.chars().last() else {
        return Err(invalid());
    };

    let exponent = match last.to_ascii_uppercase() {
        'K' => 1,
        'M' => 2,
        'G' => 3,
        'T' => 4,
        _ => return s.parse::<u64>().map_err(|_| invalid()),
    };

    let mantissa: f64 = s[..s.len() - 1].trim().parse().map_err(|_| invalid())?;
    if !mantissa.is_finite() || mantissa < 0.0 {
        return Err(invalid());
    }

    let bytes = mantissa * 1024f64.powi(exponent);
    if bytes > u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(bytes as u64)
}
