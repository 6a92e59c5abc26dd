//! Display formatting for monetary amounts.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DigitGrouping {
    /// Thousands, then every two digits: `12,34,567`.
    #[default]
    Indian,
    /// Every three digits: `1,234,567`.
    Western,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyFormat {
    pub code: CurrencyCode,
    pub symbol: String,
    #[serde(default)]
    pub grouping: DigitGrouping,
    #[serde(default)]
    pub negative_style: NegativeStyle,
    pub fraction_digits: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            code: CurrencyCode::default(),
            symbol: "₹".into(),
            grouping: DigitGrouping::Indian,
            negative_style: NegativeStyle::Sign,
            fraction_digits: 2,
        }
    }
}

impl CurrencyFormat {
    /// Same format without the fractional part, as used for headline totals.
    pub fn whole(&self) -> Self {
        Self {
            fraction_digits: 0,
            ..self.clone()
        }
    }
}

/// Renders `amount` with the configured symbol, grouping, and precision.
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    if !amount.is_finite() {
        return format!("{}{}", format.symbol, amount);
    }
    let digits = usize::from(format.fraction_digits);
    let fixed = format!("{:.*}", digits, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut body = format!("{}{}", format.symbol, group_digits(int_part, format.grouping));
    if let Some(frac) = frac_part {
        body.push('.');
        body.push_str(frac);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if amount < 0.0 && !is_zero {
        match format.negative_style {
            NegativeStyle::Sign => format!("-{body}"),
            NegativeStyle::Parentheses => format!("({body})"),
        }
    } else {
        body
    }
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let chars: Vec<char> = digits.chars().collect();
    if chars.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = chars.split_at(chars.len() - 3);
    let group = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups: Vec<String> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(head[start..end].iter().collect());
        end = start;
    }
    groups.reverse();
    groups.push(tail.iter().collect());
    groups.join(",")
}
