use rust_decimal::Decimal;

use super::error::{Error, Result};

/// Parse a ledger amount, tolerating a leading currency symbol and
/// thousands separators (`$1,234.56`, `-$40.00`).
pub fn parse(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

    unsigned
        .replace(',', "")
        .parse::<Decimal>()
        .map(|value| if negative { -value } else { value })
        .map_err(|_| Error::InvalidAmount(text.to_string()))
}

/// Render with exactly two digits after the decimal point, rounding half to
/// even first.
pub fn format(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// How the ledger's raw sign maps onto the Simplifi sign convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPolicy {
    /// Negate every amount; the ledger reports charges as positive and
    /// payments as negative, Simplifi expects the opposite.
    Invert,
    /// Negate only `PURCHASE` rows, leaving payments and credits untouched.
    InvertPurchases,
}

impl SignPolicy {
    pub fn apply(self, kind: &str, amount: Decimal) -> Decimal {
        match self {
            SignPolicy::Invert => -amount,
            SignPolicy::InvertPurchases if kind == "PURCHASE" => -amount,
            SignPolicy::InvertPurchases => amount,
        }
    }
}
