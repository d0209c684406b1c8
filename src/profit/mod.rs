//! Summation of the real numbers found in a text.
//!
//! Every `\d+\.\d+` token is read as an exact decimal [`Amount`]; the
//! total is computed without floating point and only converted at the end.
//! Sums are not rounded to a fixed number of significant digits: large
//! amounts keep every digit until the final `f64` conversion. A token or
//! total that does not fit in 128 bits is an error, never a dropped term.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{AssistantError, AssistantResult};

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("Invalid regex pattern"));

/// Exact non-negative decimal: `units / 10^scale`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amount {
    units: u128,
    scale: u32,
}

impl Amount {
    /// Adds two amounts, `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        let scale = self.scale.max(other.scale);
        let a = self.units.checked_mul(10u128.checked_pow(scale - self.scale)?)?;
        let b = other.units.checked_mul(10u128.checked_pow(scale - other.scale)?)?;
        Some(Amount {
            units: a.checked_add(b)?,
            scale,
        })
    }

    pub fn to_f64(self) -> f64 {
        self.units as f64 / 10f64.powi(self.scale as i32)
    }
}

impl FromStr for Amount {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AssistantError::other(format!("'{}' is not a decimal amount", s));

        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        if int_part.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }
        if frac_part.contains('.') {
            return Err(invalid());
        }

        let digits = format!("{}{}", int_part, frac_part);
        let units = digits
            .parse::<u128>()
            .map_err(|_| AssistantError::other(format!("'{}' has too many digits", s)))?;
        Ok(Amount {
            units,
            scale: frac_part.len() as u32,
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format!("{:0>width$}", self.units, width = self.scale as usize + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - self.scale as usize);
        if frac_part.is_empty() {
            write!(f, "{}", int_part)
        } else {
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

/// Yields every real number in `text`, in order of appearance.
///
/// Tokens too long to represent yield an error.
pub fn generate_numbers(text: &str) -> impl Iterator<Item = AssistantResult<Amount>> + '_ {
    NUMBER_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().parse::<Amount>())
}

/// Sums the amounts produced by `generator` exactly.
pub fn total_amount<'a, F, I>(text: &'a str, generator: F) -> AssistantResult<Amount>
where
    F: Fn(&'a str) -> I,
    I: Iterator<Item = AssistantResult<Amount>>,
{
    generator(text).try_fold(Amount::default(), |acc, amount| {
        acc.checked_add(amount?)
            .ok_or_else(|| AssistantError::other("total does not fit in 128 bits"))
    })
}

/// Sums the amounts produced by `generator` and returns the total as `f64`.
pub fn sum_profit<'a, F, I>(text: &'a str, generator: F) -> AssistantResult<f64>
where
    F: Fn(&'a str) -> I,
    I: Iterator<Item = AssistantResult<Amount>>,
{
    Ok(total_amount(text, generator)?.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCOME: &str = "The total income of the employee consists of several parts: \
        1000.01 as the main income, supplemented by additional receipts \
        27.45 and 324.00 dollars.";

    #[test]
    fn test_generate_numbers() {
        let found: Vec<String> = generate_numbers(INCOME)
            .map(|a| a.unwrap().to_string())
            .collect();
        assert_eq!(found, vec!["1000.01", "27.45", "324.00"]);
    }

    #[test]
    fn test_sum_profit() {
        assert_eq!(sum_profit(INCOME, generate_numbers).unwrap(), 1351.46);
        assert_eq!(
            total_amount(INCOME, generate_numbers).unwrap().to_string(),
            "1351.46"
        );
    }

    #[test]
    fn test_integers_are_ignored() {
        assert_eq!(sum_profit("paid 100 and 2.5 and 7.", generate_numbers).unwrap(), 2.5);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(sum_profit("", generate_numbers).unwrap(), 0.0);
        assert_eq!(total_amount("no numbers", generate_numbers).unwrap().to_string(), "0");
    }

    #[test]
    fn test_mixed_scales_sum_exactly() {
        let total = total_amount("0.1 0.2 0.005", generate_numbers).unwrap();
        assert_eq!(total.to_string(), "0.305");
        assert_eq!(total.to_f64(), 0.305);
    }

    #[test]
    fn test_custom_generator() {
        let first_only = |t: &str| generate_numbers(t).take(1).collect::<Vec<_>>().into_iter();
        assert_eq!(sum_profit(INCOME, first_only).unwrap(), 1000.01);
    }

    #[test]
    fn test_amount_parse() {
        assert_eq!("0.50".parse::<Amount>().unwrap().to_string(), "0.50");
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!(".5".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
    }

    #[test]
    fn test_overlong_token_fails_the_sum() {
        let text = format!("bonus {}.00 and salary 1.50", "9".repeat(50));
        let err = sum_profit(&text, generate_numbers).unwrap_err();
        assert!(err.to_string().contains("too many digits"));
    }

    #[test]
    fn test_large_token_is_summed() {
        let text = format!("bonus {}.00 and salary 1.50", "1".repeat(36));
        let total = sum_profit(&text, generate_numbers).unwrap();
        assert!(total > 1e35);
    }

    #[test]
    fn test_total_overflow_fails() {
        let big = format!("{}.0", "9".repeat(37));
        let text = vec![big; 11].join(" ");
        let err = total_amount(&text, generate_numbers).unwrap_err();
        assert!(err.to_string().contains("128 bits"));
    }
}
