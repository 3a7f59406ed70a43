use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Rupee amounts are carried to paise (2 decimal places)
pub const INR_SCALE: u32 = 2;

/// Largest rupee amount accepted as input (₹1 lakh crore); keeps every
/// tax and TCS product well inside `Decimal` range
pub const MAX_INR_AMOUNT: i64 = 1_000_000_000_000;

const LAKH: i64 = 100_000;
const CRORE: i64 = 10_000_000;

/// Rounds a rupee amount to paise
pub fn round_inr(amount: Decimal) -> Decimal {
    amount.round_dp(INR_SCALE)
}

/// Percentage of an amount: `amount × percent / 100`
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Validates a rupee amount supplied by a caller or the CMS
pub fn validate_amount(field: &str, amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("{} cannot be negative, got {}", field, amount));
    }

    if amount > Decimal::from(MAX_INR_AMOUNT) {
        return Err(format!(
            "{} cannot exceed {}, got {}",
            field, MAX_INR_AMOUNT, amount
        ));
    }

    if amount.scale() > INR_SCALE && amount != round_inr(amount) {
        return Err(format!(
            "{} must have at most {} decimal places, got {}",
            field, INR_SCALE, amount
        ));
    }

    Ok(())
}

/// Formats whole rupees with Indian digit grouping, e.g. `₹12,34,567`
pub fn format_inr(amount: Decimal) -> String {
    let rupees = amount.round_dp(0).abs().normalize().to_string();
    let sign = if amount < Decimal::ZERO { "-" } else { "" };

    format!("{}₹{}", sign, group_indian(&rupees))
}

/// Short form used on listing cards: `8.45 Lakh`, `1.20 Crore`
pub fn format_lakh_crore(amount: Decimal) -> String {
    let whole = amount.round_dp(0).to_i64().unwrap_or(0);

    if whole >= CRORE {
        format!("{:.2} Crore", amount / Decimal::from(CRORE))
    } else if whole >= LAKH {
        format!("{:.2} Lakh", amount / Decimal::from(LAKH))
    } else {
        format_inr(amount)
    }
}

// Last three digits, then pairs: 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
