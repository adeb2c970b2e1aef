//! Best-effort reading of integers from loosely formatted text.

/// Read the integer at the start of `text`, ignoring whatever follows it.
///
/// Leading whitespace is skipped, a single `+` or `-` sign is accepted, and a `0x` or `0X` prefix
/// switches to hexadecimal. The longest run of digits after that is the value, so `"12abc"` reads
/// as 12 and `"3.7"` as 3.
///
/// Returns [`None`] ("not a number") if there are no digits to read, or if they do not fit in an
/// [`i64`].
#[inline]
#[must_use]
pub fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, body) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .map_or((10, unsigned), |rest| (16, rest));

    let end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    let digits = &body[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i64::from_str_radix(digits, radix).ok()?;
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain() {
        assert_eq!(leading_integer("7"), Some(7));
        assert_eq!(leading_integer("0"), Some(0));
        assert_eq!(leading_integer("-0"), Some(0));
        assert_eq!(leading_integer("+12"), Some(12));
        assert_eq!(leading_integer("-12"), Some(-12));
    }

    #[test]
    fn surrounding_noise() {
        assert_eq!(leading_integer("  \t42"), Some(42));
        assert_eq!(leading_integer("42  "), Some(42));
        assert_eq!(leading_integer("3abc"), Some(3));
        assert_eq!(leading_integer("3.7"), Some(3));
        assert_eq!(leading_integer("1e3"), Some(1));
        assert_eq!(leading_integer("2,5"), Some(2));
    }

    #[test]
    fn hexadecimal() {
        assert_eq!(leading_integer("0x4"), Some(4));
        assert_eq!(leading_integer("0XfF"), Some(255));
        assert_eq!(leading_integer("-0x10"), Some(-16));
        assert_eq!(leading_integer("0x1g"), Some(1));
    }

    #[test]
    fn not_a_number() {
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("   "), None);
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("+-1"), None);
        assert_eq!(leading_integer("0x"), None);
        assert_eq!(leading_integer(".5"), None);
    }

    #[test]
    fn too_large() {
        assert_eq!(leading_integer("9223372036854775807"), Some(i64::MAX));
        assert_eq!(leading_integer("9223372036854775808"), None);
        assert_eq!(leading_integer("-9223372036854775808"), None);
    }
}
