//! Command-line value parsers.

/// Parsed `--sequence` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSequence(pub Vec<u8>);

impl ByteSequence {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

/// Parses a file size with an optional size suffix.
///
/// Accepts numeric values with optional suffixes: `K` (KiB), `M` (MiB), or `G` (GiB).
/// All suffixes are case-insensitive. Values without a suffix are interpreted as bytes.
///
/// # Parameters
///
/// * `s` - The size string to parse (e.g., "1024", "1K", "2M", "1G")
///
/// # Returns
///
/// The size in bytes as a [`u64`].
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - The input string is empty
/// - The numeric part is not made of decimal digits only, or does not fit a [`u64`]
/// - The suffix is not one of K, M, G, or a digit
/// - The result would overflow [`u64`] after applying the multiplier
/// - The result is zero
pub fn parse_size(s: &str) -> Result<u64, String> {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let s = s.trim();
    if s.is_empty() {
        return Err("Empty size".to_string());
    }

    let (number_part, multiplier) = if let Some(last_char) = s.chars().last() {
        match last_char.to_ascii_uppercase() {
            'K' => (&s[..s.len() - 1], KB),
            'M' => (&s[..s.len() - 1], MB),
            'G' => (&s[..s.len() - 1], GB),
            _ if last_char.is_ascii_digit() => (s, 1),
            _ => return Err(format!("Invalid size suffix: {last_char}")),
        }
    } else {
        (s, 1)
    };

    if !number_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("Invalid size number: {number_part}"));
    }
    let number: u64 = number_part
        .parse()
        .map_err(|_| format!("Invalid size number: {number_part}"))?;

    let size = number
        .checked_mul(multiplier)
        .ok_or_else(|| "Size too large".to_string())?;

    if size == 0 {
        return Err("Size must be greater than zero".to_string());
    }
    Ok(size)
}

/// Parses a single byte value.
///
/// Values prefixed with `0x` are hexadecimal, anything else is decimal.
///
/// # Errors
///
/// Returns an error if the value is not a number in `0..=255`.
pub fn parse_byte(s: &str) -> Result<u8, String> {
    let s = s.trim();
    let invalid = || format!("Invalid byte value: {s} (expected 0-255 or 0x00-0xFF)");

    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }
    u8::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// Parses a byte sequence written as a hex string, e.g. `000102030f`.
///
/// An optional `0x` prefix is accepted. Each byte takes exactly two hex digits.
///
/// # Errors
///
/// Returns an error if the string is empty, has an odd number of digits, or
/// contains non-hex characters.
pub fn parse_sequence(s: &str) -> Result<ByteSequence, String> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if digits.is_empty() {
        return Err("Empty byte sequence".to_string());
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) || digits.len() % 2 != 0 {
        return Err(format!(
            "Invalid byte sequence: {s} (expected an even number of hex digits)"
        ));
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("Invalid byte sequence: {s}"))
        })
        .collect::<Result<Vec<u8>, String>>()
        .map(ByteSequence)
}
