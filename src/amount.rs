use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed-point money with 2 decimal places, stored as signed cents.
///
/// Amounts are parsed directly from decimal text, never routed through
/// binary floating point, so repeated deposits and withdrawals stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

/// Errors that can occur when parsing an amount from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid character in amount")]
    InvalidCharacter,
    #[error("more than two decimal places")]
    TooPrecise,
    #[error("amount out of range")]
    OutOfRange,
}

impl Amount {
    const SCALE: i64 = 100;

    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Parses decimal text like "1000", "12.5" or "-3.07" into cents.
    /// At most two fraction digits are accepted; a lone "." or "-" is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        if frac.len() > 2 {
            return Err(ParseAmountError::TooPrecise);
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseAmountError::InvalidCharacter);
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseAmountError::OutOfRange)?
        };

        // "5" means 50 cents, "05" means 5 cents
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().unwrap_or(0) * 10,
            _ => frac.parse::<i64>().unwrap_or(0),
        };

        let cents = whole
            .checked_mul(Self::SCALE)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or(ParseAmountError::OutOfRange)?;

        Ok(Amount(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let whole = abs / Self::SCALE;
        let frac = abs % Self::SCALE;
        write!(f, "{sign}{whole}.{frac:02}")
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cents_preserves_value() {
        let amount = Amount::from_cents(123456);
        assert_eq!(amount.cents(), 123456);
    }

    #[test]
    fn parse_whole_amounts() {
        assert_eq!("1000".parse(), Ok(Amount::from_cents(100_000)));
        assert_eq!("0".parse(), Ok(Amount::ZERO));
    }

    #[test]
    fn parse_fractional_amounts() {
        assert_eq!("12.5".parse(), Ok(Amount::from_cents(1250)));
        assert_eq!("12.50".parse(), Ok(Amount::from_cents(1250)));
        assert_eq!("0.05".parse(), Ok(Amount::from_cents(5)));
        assert_eq!(".75".parse(), Ok(Amount::from_cents(75)));
        assert_eq!("200.".parse(), Ok(Amount::from_cents(20_000)));
    }

    #[test]
    fn parse_negative_amounts() {
        assert_eq!("-50.25".parse(), Ok(Amount::from_cents(-5025)));
        assert_eq!("-1".parse(), Ok(Amount::from_cents(-100)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("abc".parse::<Amount>(), Err(ParseAmountError::InvalidCharacter));
        assert_eq!("12a4".parse::<Amount>(), Err(ParseAmountError::InvalidCharacter));
        assert_eq!("1,000".parse::<Amount>(), Err(ParseAmountError::InvalidCharacter));
        assert_eq!("1.2.3".parse::<Amount>(), Err(ParseAmountError::InvalidCharacter));
        assert_eq!("".parse::<Amount>(), Err(ParseAmountError::Empty));
        assert_eq!("-".parse::<Amount>(), Err(ParseAmountError::Empty));
        assert_eq!(".".parse::<Amount>(), Err(ParseAmountError::Empty));
    }

    #[test]
    fn parse_rejects_sub_cent_precision() {
        assert_eq!("1.234".parse::<Amount>(), Err(ParseAmountError::TooPrecise));
    }

    #[test]
    fn parse_rejects_overflow() {
        assert_eq!(
            "99999999999999999999".parse::<Amount>(),
            Err(ParseAmountError::OutOfRange)
        );
    }

    #[test]
    fn parse_has_no_float_drift() {
        let a: Amount = "0.1".parse().unwrap();
        let b: Amount = "0.2".parse().unwrap();
        assert_eq!(a + b, "0.3".parse().unwrap());
    }

    #[test]
    fn display_formats_two_decimals() {
        assert_eq!(Amount::from_cents(100_000).to_string(), "1000.00");
        assert_eq!(Amount::from_cents(1250).to_string(), "12.50");
        assert_eq!(Amount::from_cents(5).to_string(), "0.05");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn display_formats_negative() {
        assert_eq!(Amount::from_cents(-5025).to_string(), "-50.25");
        assert_eq!(Amount::from_cents(-1).to_string(), "-0.01");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let amount = Amount::from_cents(80_000);
        assert_eq!(amount.to_string().parse(), Ok(amount));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn arithmetic() {
        let mut a = Amount::from_cents(100);
        a += Amount::from_cents(50);
        assert_eq!(a, Amount::from_cents(150));
        a -= Amount::from_cents(30);
        assert_eq!(a, Amount::from_cents(120));
        assert_eq!(a + Amount::from_cents(30), Amount::from_cents(150));
        assert_eq!(a - Amount::from_cents(20), Amount::from_cents(100));
    }

    #[test]
    fn ordering() {
        assert!(Amount::from_cents(-100) < Amount::ZERO);
        assert!(Amount::ZERO < Amount::from_cents(100));
        assert!(Amount::from_cents(100) < Amount::from_cents(200));
    }
}
