use crate::menu::Money;

const MAX_DIGITS: u32 = 30;
const MAX_SCALE: i64 = 18;

/// A typed answer held exactly as `mantissa / 10^scale`.
///
/// Comparisons against a [`Money`] total are done in integers, so the one-cent
/// tolerance is exact: `10.505` is within a cent of `10.50`, `10.49` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    mantissa: i128,
    scale: u32,
}

impl Answer {
    /// Strictly less than one cent away from `total`.
    pub fn within_cent(&self, total: Money) -> bool {
        let unit = 10i128.pow(self.scale);
        let target = i128::from(total.cents()) * unit;
        self.mantissa
            .checked_mul(100)
            .and_then(|scaled| scaled.checked_sub(target))
            .is_some_and(|diff| diff.unsigned_abs() < unit.unsigned_abs())
    }
}

/// Reads the leading decimal number of `input`.
///
/// Leading whitespace is skipped, a sign and an exponent are accepted, and anything
/// after the number is ignored (`"12.5 dollars"` reads as 12.5). Returns `None`
/// when no digit is found before the first other character. Digits past the
/// thirtieth significant one, and fractions finer than 10^-18, are truncated.
pub fn parse_answer(input: &str) -> Option<Answer> {
    let bytes = input.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut mantissa: i128 = 0;
    let mut scale: i64 = 0;
    let mut kept = 0;
    let mut seen_digit = false;

    while let Some(d) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        seen_digit = true;
        if kept < MAX_DIGITS {
            mantissa = mantissa * 10 + i128::from(d - b'0');
            if mantissa != 0 {
                kept += 1;
            }
        } else {
            scale -= 1;
        }
        pos += 1;
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(d) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
            seen_digit = true;
            if kept < MAX_DIGITS {
                mantissa = mantissa * 10 + i128::from(d - b'0');
                scale += 1;
                if mantissa != 0 {
                    kept += 1;
                }
            }
            pos += 1;
        }
    }

    if !seen_digit {
        return None;
    }

    if let Some(exponent) = parse_exponent(&bytes[pos..]) {
        scale = scale.saturating_sub(exponent);
    }

    if mantissa == 0 {
        scale = 0;
    } else if scale > MAX_SCALE + i64::from(MAX_DIGITS) {
        // Below 10^-18 whatever the mantissa holds.
        mantissa = 0;
        scale = MAX_SCALE;
    } else if scale < -i64::from(MAX_DIGITS) {
        // Far beyond any total; saturates so it never lands within a cent.
        mantissa = i128::MAX;
        scale = 0;
    }

    if negative {
        mantissa = -mantissa;
    }

    while scale > MAX_SCALE {
        mantissa /= 10;
        scale -= 1;
    }
    while scale < 0 {
        // Overflow here means the number is astronomically far from any total.
        mantissa = mantissa.saturating_mul(10);
        scale += 1;
    }

    Some(Answer {
        mantissa,
        scale: scale as u32,
    })
}

fn parse_exponent(bytes: &[u8]) -> Option<i64> {
    let rest = match bytes.first() {
        Some(b'e' | b'E') => &bytes[1..],
        _ => return None,
    };
    let (negative, digits) = match rest.first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let count = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if count == 0 {
        return None;
    }
    let value = digits[..count].iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -value } else { value })
}
