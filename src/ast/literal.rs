//! Decoding of raw literal text into values, and rebuilding raw text from values.
//!
//! Decoding follows the Java 7 lexical rules: radix prefixes, underscores
//! between digits, `l`/`f`/`d` suffixes, and `\uXXXX`, octal and named
//! escapes in char and string literals.

use crate::error::{Error, Result};

/// Whether raw text starts with a `0x`/`0X` radix prefix
pub fn is_hex_prefixed(raw: &str) -> bool {
    raw.starts_with("0x") || raw.starts_with("0X")
}

fn strip_underscores(kind: &'static str, raw: &str, digits: &str) -> Result<String> {
    if digits.starts_with('_') || digits.ends_with('_') {
        return Err(Error::literal_error(kind, raw, "underscore must sit between digits"));
    }
    Ok(digits.chars().filter(|&c| c != '_').collect())
}

/// Decode an integral literal into its value and whether it carries a long suffix.
///
/// Non-decimal literals may use the full unsigned range of their type, which
/// wraps to negative values just like javac does.
pub fn decode_integral(raw: &str) -> Result<(i64, bool)> {
    const KIND: &str = "integral";
    let (body, long) = match raw.strip_suffix(['l', 'L']) {
        Some(body) => (body, true),
        None => (raw, false),
    };
    if body.is_empty() {
        return Err(Error::literal_error(KIND, raw, "no digits"));
    }

    let (radix, digits) = if let Some(rest) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        (16, strip_underscores(KIND, raw, rest)?)
    } else if let Some(rest) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        (2, strip_underscores(KIND, raw, rest)?)
    } else if body.len() > 1 && body.starts_with('0') {
        let rest = &body[1..];
        if rest.ends_with('_') {
            return Err(Error::literal_error(KIND, raw, "underscore must sit between digits"));
        }
        (8, rest.chars().filter(|&c| c != '_').collect())
    } else {
        (10, strip_underscores(KIND, raw, body)?)
    };

    if digits.is_empty() {
        return Err(Error::literal_error(KIND, raw, "no digits after radix prefix"));
    }

    let mut magnitude: u64 = 0;
    for c in digits.chars() {
        let digit = c
            .to_digit(radix)
            .ok_or_else(|| Error::literal_error(KIND, raw, format!("`{}` is not a base-{} digit", c, radix)))?;
        magnitude = magnitude
            .checked_mul(radix as u64)
            .and_then(|m| m.checked_add(digit as u64))
            .ok_or_else(|| Error::literal_error(KIND, raw, "value out of range"))?;
    }

    let value = match (long, radix == 10) {
        (true, true) if magnitude <= i64::MAX as u64 => magnitude as i64,
        (true, false) => magnitude as i64,
        (false, true) if magnitude <= i32::MAX as u64 => magnitude as i64,
        (false, false) if magnitude <= u32::MAX as u64 => (magnitude as u32 as i32) as i64,
        _ => return Err(Error::literal_error(KIND, raw, "value out of range")),
    };
    Ok((value, long))
}

/// Canonical raw text of an int; negative values only exist as hex literals
pub fn encode_int(value: i32) -> String {
    if value >= 0 {
        value.to_string()
    } else {
        format!("0x{:X}", value as u32)
    }
}

/// Canonical raw text of a long
pub fn encode_long(value: i64) -> String {
    if value >= 0 {
        format!("{}L", value)
    } else {
        format!("0x{:X}L", value as u64)
    }
}

/// Decode a floating point literal into its value and whether it carries a float suffix
pub fn decode_floating(raw: &str) -> Result<(f64, bool)> {
    const KIND: &str = "floating point";
    let hex = is_hex_prefixed(raw);
    let (body, is_float, suffixed) = match raw.chars().last() {
        Some('f' | 'F') if !hex || raw.contains(['p', 'P']) => (&raw[..raw.len() - 1], true, true),
        Some('d' | 'D') if !hex || raw.contains(['p', 'P']) => (&raw[..raw.len() - 1], false, true),
        _ => (raw, false, false),
    };
    let value = if hex {
        decode_hex_floating(raw, &strip_underscores(KIND, raw, &body[2..])?)?
    } else {
        if ["_.", "._", "_e", "_E", "e_", "E_"].iter().any(|glue| body.contains(glue)) {
            return Err(Error::literal_error(KIND, raw, "underscore must sit between digits"));
        }
        let text = strip_underscores(KIND, raw, body)?;
        check_decimal_shape(raw, &text, suffixed)?;
        if is_float {
            text.parse::<f32>().map(f64::from)
        } else {
            text.parse::<f64>()
        }
        .map_err(|e| Error::literal_error(KIND, raw, e.to_string()))?
    };

    let value = if is_float { f64::from(value as f32) } else { value };
    if value.is_infinite() {
        return Err(Error::literal_error(KIND, raw, "value out of range"));
    }
    if value == 0.0 && has_nonzero_mantissa(body) {
        return Err(Error::literal_error(KIND, raw, "value rounds to zero"));
    }
    Ok((value, is_float))
}

fn has_nonzero_mantissa(body: &str) -> bool {
    let mantissa = if is_hex_prefixed(body) {
        body[2..].split(['p', 'P']).next().unwrap_or("")
    } else {
        body.split(['e', 'E']).next().unwrap_or("")
    };
    mantissa.chars().any(|c| c.is_ascii_hexdigit() && c != '0')
}

// digits? ('.' digits?)? ([eE] [+-]? digits)?, at least one mantissa digit, and
// something that makes it floating rather than integral
fn check_decimal_shape(raw: &str, text: &str, suffixed: bool) -> Result<()> {
    let bad = |message: &str| Err(Error::literal_error("floating point", raw, message));
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], Some(&text[at + 1..])),
        None => (text, None),
    };
    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (mantissa, None),
    };
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.unwrap_or("").chars().all(|c| c.is_ascii_digit()) {
        return bad("unexpected character in mantissa");
    }
    if whole.is_empty() && fraction.map_or(true, str::is_empty) {
        return bad("no digits in mantissa");
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return bad("malformed exponent");
        }
    }
    if fraction.is_none() && exponent.is_none() && !suffixed {
        return bad("integral text is not a floating point literal");
    }
    Ok(())
}

fn decode_hex_floating(raw: &str, text: &str) -> Result<f64> {
    let bad = |message: &str| Error::literal_error("floating point", raw, message);
    let (mantissa, exponent) = text.split_once(['p', 'P']).ok_or_else(|| bad("hex floating literal needs a `p` exponent"))?;
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(bad("no digits in mantissa"));
    }
    let exponent: i32 = exponent.parse().map_err(|_| bad("malformed exponent"))?;

    let mut value = 0f64;
    for c in whole.chars().chain(fraction.chars()) {
        let digit = c.to_digit(16).ok_or_else(|| bad("unexpected character in mantissa"))?;
        value = value * 16.0 + digit as f64;
    }
    let scale = exponent.saturating_sub(4 * fraction.len() as i32);
    Ok(value * 2f64.powi(scale))
}

/// Shortest raw text that decodes back to `value` as a double
pub fn encode_double(value: f64) -> Result<String> {
    if !value.is_finite() || value.is_sign_negative() {
        return Err(Error::literal_error("floating point", value.to_string(), "value has no literal form"));
    }
    Ok(format!("{:?}", value))
}

/// Shortest raw text that decodes back to `value` as a float
pub fn encode_float(value: f32) -> Result<String> {
    if !value.is_finite() || value.is_sign_negative() {
        return Err(Error::literal_error("floating point", value.to_string(), "value has no literal form"));
    }
    Ok(format!("{:?}F", value))
}

pub fn decode_boolean(raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::literal_error("boolean", raw, "expected `true` or `false`")),
    }
}

/// Decode the body of a quoted literal into UTF-16 code units
fn unescape(kind: &'static str, raw: &str, quote: char) -> Result<Vec<u16>> {
    let bad = |message: String| Error::literal_error(kind, raw, message);
    let body = raw
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .filter(|_| raw.len() >= 2)
        .ok_or_else(|| bad(format!("must be enclosed in {}", quote)))?;

    let mut units = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escape = chars.next().ok_or_else(|| bad("dangling backslash".into()))?;
                match escape {
                    'b' => units.push(0x08),
                    't' => units.push(0x09),
                    'n' => units.push(0x0a),
                    'f' => units.push(0x0c),
                    'r' => units.push(0x0d),
                    '"' | '\'' | '\\' => units.push(escape as u16),
                    '0'..='7' => {
                        // up to three digits, and only `\0`-`\377`
                        let max_digits = if escape <= '3' { 3 } else { 2 };
                        let mut value = escape.to_digit(8).unwrap_or(0);
                        for _ in 1..max_digits {
                            match chars.peek().and_then(|d| d.to_digit(8)) {
                                Some(d) => {
                                    value = value * 8 + d;
                                    chars.next();
                                }
                                None => break,
                            }
                        }
                        units.push(value as u16);
                    }
                    'u' => {
                        while chars.peek() == Some(&'u') {
                            chars.next();
                        }
                        let hex: String = chars.by_ref().take(4).collect();
                        if hex.chars().count() != 4 {
                            return Err(bad("truncated unicode escape".into()));
                        }
                        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                            return Err(bad(format!("invalid unicode escape `\\u{}`", hex)));
                        }
                        let unit = u16::from_str_radix(&hex, 16)
                            .map_err(|_| bad(format!("invalid unicode escape `\\u{}`", hex)))?;
                        units.push(unit);
                    }
                    other => return Err(bad(format!("invalid escape `\\{}`", other))),
                }
            }
            '\n' | '\r' => return Err(bad("line break inside literal".into())),
            c if c == quote => return Err(bad(format!("unescaped {}", quote))),
            c => {
                let mut buf = [0u16; 2];
                units.extend_from_slice(c.encode_utf16(&mut buf));
            }
        }
    }
    Ok(units)
}

pub fn decode_char(raw: &str) -> Result<char> {
    let units = unescape("char", raw, '\'')?;
    match units.as_slice() {
        [unit] => char::from_u32(*unit as u32)
            .ok_or_else(|| Error::literal_error("char", raw, "lone surrogate has no char value")),
        [_, _] if String::from_utf16(&units).is_ok() => {
            Err(Error::literal_error("char", raw, "supplementary character does not fit in a char literal"))
        }
        [] => Err(Error::literal_error("char", raw, "empty char literal")),
        _ => Err(Error::literal_error("char", raw, "more than one character")),
    }
}

pub fn decode_string(raw: &str) -> Result<String> {
    let units = unescape("string", raw, '"')?;
    String::from_utf16(&units).map_err(|_| Error::literal_error("string", raw, "lone surrogate in string"))
}

fn escape_into(out: &mut String, c: char, quote: char) {
    match c {
        '\u{8}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        '\\' => out.push_str("\\\\"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        // `\uXXXX` would be translated before lexing, so control characters use octal
        c if (c as u32) < 0x20 || c == '\u{7f}' => out.push_str(&format!("\\{:03o}", c as u32)),
        c => out.push(c),
    }
}

pub fn encode_char(value: char) -> Result<String> {
    if value.len_utf16() != 1 {
        return Err(Error::literal_error("char", value.to_string(), "supplementary character does not fit in a char literal"));
    }
    let mut out = String::from("'");
    escape_into(&mut out, value, '\'');
    out.push('\'');
    Ok(out)
}

pub fn encode_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        escape_into(&mut out, c, '"');
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_radixes_and_underscores() {
        assert_eq!(decode_integral("42"), Ok((42, false)));
        assert_eq!(decode_integral("0x1F"), Ok((31, false)));
        assert_eq!(decode_integral("017"), Ok((15, false)));
        assert_eq!(decode_integral("0b101"), Ok((5, false)));
        assert_eq!(decode_integral("1_000_000"), Ok((1_000_000, false)));
        assert_eq!(decode_integral("0"), Ok((0, false)));
        assert_eq!(decode_integral("7L"), Ok((7, true)));
    }

    #[test]
    fn integral_ranges() {
        assert_eq!(decode_integral("2147483647"), Ok((i32::MAX as i64, false)));
        assert!(decode_integral("2147483648").is_err());
        assert_eq!(decode_integral("0x80000000"), Ok((i32::MIN as i64, false)));
        assert!(decode_integral("0x100000000").is_err());
        assert_eq!(decode_integral("0xFFFFFFFFFFFFFFFFL"), Ok((-1, true)));
        assert!(decode_integral("9223372036854775808L").is_err());
    }

    #[test]
    fn integral_rejects_garbage() {
        assert!(decode_integral("").is_err());
        assert!(decode_integral("L").is_err());
        assert!(decode_integral("0x").is_err());
        assert!(decode_integral("_1").is_err());
        assert!(decode_integral("1_").is_err());
        assert!(decode_integral("08").is_err());
        assert!(decode_integral("12a").is_err());
    }

    #[test]
    fn negative_values_encode_as_hex() {
        assert_eq!(encode_int(-1), "0xFFFFFFFF");
        assert_eq!(encode_int(12), "12");
        assert_eq!(encode_long(-2), "0xFFFFFFFFFFFFFFFEL");
        assert_eq!(decode_integral(&encode_int(i32::MIN)), Ok((i32::MIN as i64, false)));
    }

    #[test]
    fn floating_forms() {
        assert_eq!(decode_floating("1.5"), Ok((1.5, false)));
        assert_eq!(decode_floating("1."), Ok((1.0, false)));
        assert_eq!(decode_floating(".25"), Ok((0.25, false)));
        assert_eq!(decode_floating("1e3"), Ok((1000.0, false)));
        assert_eq!(decode_floating("2.5f"), Ok((2.5, true)));
        assert_eq!(decode_floating("3d"), Ok((3.0, false)));
        assert_eq!(decode_floating("1_0.5"), Ok((10.5, false)));
        assert_eq!(decode_floating("0x1.8p1"), Ok((3.0, false)));
        assert_eq!(decode_floating("0x1p-2f"), Ok((0.25, true)));
    }

    #[test]
    fn floating_rejects_garbage() {
        assert!(decode_floating("1").is_err());
        assert!(decode_floating("inf").is_err());
        assert!(decode_floating("NaN").is_err());
        assert!(decode_floating("1e").is_err());
        assert!(decode_floating("1e999").is_err());
        assert!(decode_floating("1e-999").is_err());
        assert!(decode_floating("1._5").is_err());
        assert!(decode_floating("0x1.8").is_err());
    }

    #[test]
    fn floating_encoding() {
        assert_eq!(encode_double(1.0).unwrap(), "1.0");
        assert_eq!(encode_float(0.1).unwrap(), "0.1F");
        assert!(encode_double(f64::NAN).is_err());
        assert!(encode_double(-1.0).is_err());
        let raw = encode_double(1e300).unwrap();
        assert_eq!(decode_floating(&raw), Ok((1e300, false)));
    }

    #[test]
    fn char_and_string_escapes() {
        assert_eq!(decode_char("'a'"), Ok('a'));
        assert_eq!(decode_char("'\\n'"), Ok('\n'));
        assert_eq!(decode_char("'\\''"), Ok('\''));
        assert_eq!(decode_char("'\\u0041'"), Ok('A'));
        assert_eq!(decode_char("'\\uu0041'"), Ok('A'));
        assert_eq!(decode_char("'\\101'"), Ok('A'));
        assert_eq!(decode_char("'\\0'"), Ok('\0'));
        assert!(decode_char("'ab'").is_err());
        assert!(decode_char("''").is_err());
        assert!(decode_char("'\\uD800'").is_err());
        assert!(decode_char("'\\q'").is_err());
        assert!(decode_char("'\\u+041'").is_err());
        assert!(decode_char("'\\u-041'").is_err());
        assert!(decode_string("\"\\u00g1\"").is_err());

        assert_eq!(decode_string("\"x\""), Ok("x".to_string()));
        assert_eq!(decode_string("\"a\\tb\\\"c\""), Ok("a\tb\"c".to_string()));
        assert_eq!(decode_string("\"\\uD83D\\uDE00\""), Ok("\u{1F600}".to_string()));
        assert_eq!(decode_string("\"\\377\""), Ok("\u{ff}".to_string()));
        assert!(decode_string("\"unterminated").is_err());
        assert!(decode_string("\"").is_err());
        assert!(decode_string("\"a\"b\"").is_err());
    }

    #[test]
    fn escaping_uses_octal_for_controls() {
        assert_eq!(encode_string("a\"b\n\u{1}7"), "\"a\\\"b\\n\\0017\"");
        assert_eq!(decode_string(&encode_string("\u{1}7")), Ok("\u{1}7".to_string()));
        assert_eq!(encode_char('\'').unwrap(), "'\\''");
        assert_eq!(encode_char('"').unwrap(), "'\"'");
        assert!(encode_char('\u{1F600}').is_err());
    }
}
