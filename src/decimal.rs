//! Fixed-point currency type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so balances never
//! carry sub-cent digits and never pick up floating-point error.

use crate::error::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// A decimal currency value that maintains exactly 2 decimal places.
///
/// Every constructor rounds to the nearest cent using round-half-away-from-zero,
/// so `1.005` becomes `1.01` and `1.004` becomes `1.00`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use account_manager::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::from_parts(0, 0, 0, false, Self::SCALE));

    /// Largest balance the ledger may hold: `999999.99`.
    pub const MAX: Self = Money(Decimal::from_parts(99_999_999, 0, 0, false, Self::SCALE));

    /// Balance every new ledger starts with: `1000.00`.
    pub const OPENING: Self = Money(Decimal::from_parts(100_000, 0, 0, false, Self::SCALE));

    /// Stand-in for amounts too large for `Decimal`; always above `MAX`.
    const ABOVE_MAX: Self = Money(Decimal::from_parts(u32::MAX, u32::MAX, 0, false, Self::SCALE));

    /// Creates a new `Money` from a `Decimal`, rounding to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(Self::SCALE);
        if normalized.is_zero() {
            normalized.set_sign_positive(true);
        }
        Money(normalized)
    }

    /// Parses user-supplied amount text into a non-negative value.
    ///
    /// Accepts surrounding whitespace and scientific notation (`1e3`).
    /// The sign is checked before rounding, so `-0.001` is rejected.
    /// Well-formed numbers outside the decimal range still parse: huge ones
    /// come back above [`Money::MAX`] and vanishingly small ones as zero.
    pub fn parse_amount(raw: &str) -> std::result::Result<Self, AmountError> {
        let trimmed = raw.trim();
        let decimal = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))
        {
            Ok(decimal) => decimal,
            Err(_) => return Self::from_unrepresentable(trimmed),
        };

        if decimal < Decimal::ZERO {
            return Err(AmountError::Negative);
        }

        Ok(Money::new(decimal))
    }

    /// Classifies number text that `rust_decimal` refused to hold.
    fn from_unrepresentable(text: &str) -> std::result::Result<Self, AmountError> {
        let scanned = ScannedNumber::scan(text).ok_or(AmountError::Malformed)?;

        if scanned.digits.is_empty() {
            return Ok(Money::ZERO);
        }
        if scanned.negative {
            return Err(AmountError::Negative);
        }
        // 10^6 already exceeds MAX; below 10^-3 everything rounds to 0.00.
        if scanned.magnitude >= 6 {
            return Ok(Self::ABOVE_MAX);
        }
        if scanned.magnitude < -3 {
            return Ok(Money::ZERO);
        }

        let significant: String = scanned.digits.chars().take(20).collect();
        let text = format!("0.{}e{}", significant, scanned.magnitude + 1);
        Decimal::from_scientific(&text)
            .map(Money::new)
            .map_err(|_| AmountError::Malformed)
    }

    /// Adds two values, returning `None` if the decimal range is exceeded.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

/// Number text reduced to its significant digits and order of magnitude.
struct ScannedNumber {
    negative: bool,
    /// Significant digits without leading zeros; empty for zero.
    digits: String,
    /// Power of ten of the leading significant digit.
    magnitude: i64,
}

impl ScannedNumber {
    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`; `None` if malformed.
    fn scan(text: &str) -> Option<Self> {
        let (negative, rest) = split_sign(text);
        let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => (&rest[..pos], parse_exponent(&rest[pos + 1..])?),
            None => (rest, 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let int_digits = int_part.trim_start_matches('0');
        let magnitude = if int_digits.is_empty() {
            let leading_zeros = frac_part.len() - frac_part.trim_start_matches('0').len();
            -(leading_zeros as i64) - 1
        } else {
            int_digits.len() as i64 - 1
        };
        let digits = format!("{}{}", int_digits, frac_part)
            .trim_start_matches('0')
            .to_string();

        Some(ScannedNumber {
            negative,
            digits,
            magnitude: magnitude.saturating_add(exponent),
        })
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    }
}

/// Parses an exponent, saturating instead of failing on huge values.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = split_sign(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
