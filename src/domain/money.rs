use std::fmt;

/// Money is represented as integer cents so expense sums stay exact.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a human-readable amount.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000, "1e3" -> 100000
///
/// Values are never rounded: an input that is not a whole number of cents
/// ("0.001", "1.5e-3") is rejected with `TooPrecise`. Trailing zeros past the
/// second decimal ("1.500") are fine.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (negative, unsigned) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent)?),
        None => (unsigned, 0),
    };

    let (units_str, decimal_str) = match mantissa.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (mantissa, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !all_digits(units_str) || !all_digits(decimal_str) {
        return Err(ParseCentsError::InvalidFormat);
    }

    // value = digits * 10^-scale, so cents = digits * 10^(2 - scale)
    let digits = format!("{}{}", units_str, decimal_str);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(0);
    }
    let scale = decimal_str.len() as i128 - exponent;

    let cents = if scale > 2 {
        // Digits below the cent must all be zero
        let cut = usize::try_from(scale - 2).unwrap_or(usize::MAX);
        if cut >= digits.len() {
            return Err(ParseCentsError::TooPrecise);
        }
        let (kept, dropped) = digits.split_at(digits.len() - cut);
        if !dropped.bytes().all(|b| b == b'0') {
            return Err(ParseCentsError::TooPrecise);
        }
        kept.parse::<i64>().map_err(|_| ParseCentsError::Overflow)?
    } else {
        let shift = u32::try_from(2 - scale).map_err(|_| ParseCentsError::Overflow)?;
        let base: i64 = digits.parse().map_err(|_| ParseCentsError::Overflow)?;
        10i64
            .checked_pow(shift)
            .and_then(|factor| base.checked_mul(factor))
            .ok_or(ParseCentsError::Overflow)?
    };

    Ok(if negative { -cents } else { cents })
}

fn parse_exponent(s: &str) -> Result<i128, ParseCentsError> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !all_digits(digits) {
        return Err(ParseCentsError::InvalidFormat);
    }
    let exponent: i64 = s.parse().map_err(|_| ParseCentsError::Overflow)?;
    Ok(i128::from(exponent))
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    Empty,
    InvalidFormat,
    TooPrecise,
    Overflow,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::Empty => write!(f, "empty amount"),
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::TooPrecise => write!(f, "more than two decimal places"),
            ParseCentsError::Overflow => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
