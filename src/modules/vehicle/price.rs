use crate::modules::common::validators::REGEX_IS_PLAIN_DECIMAL;
use anyhow::{bail, Result};
use serde::Deserialize;

/// Separators used when reading a price typed by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLocale {
    /// `1.234,56` or `1 234,56`
    European,
    /// `1,234.56`
    English,
}

impl PriceLocale {
    fn decimal_separator(&self) -> char {
        match self {
            PriceLocale::European => ',',
            PriceLocale::English => '.',
        }
    }

    fn is_grouping_separator(&self, c: char) -> bool {
        match self {
            PriceLocale::European => matches!(c, '.' | ' ' | '\u{00A0}' | '\u{202F}'),
            PriceLocale::English => c == ',',
        }
    }
}

/// Parses a price, grouping separators are ignored wherever they are.
///
/// The whole trimmed text must be a number, words such as `inf` or `NaN` are
/// rejected, but the result may still be infinite if the number overflows.
pub fn parse_price(text: &str, locale: PriceLocale) -> Result<f64> {
    let trimmed = text.trim();

    let canonical: String = trimmed
        .chars()
        .filter(|c| !locale.is_grouping_separator(*c))
        .map(|c| {
            if c == locale.decimal_separator() {
                '.'
            } else {
                c
            }
        })
        .collect();

    if !REGEX_IS_PLAIN_DECIMAL.is_match(&canonical) {
        bail!("'{}' is not a number", trimmed);
    }

    Ok(canonical.parse::<f64>()?)
}
