use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a price for display in euros with a decimal comma: `€12,34`.
/// A missing price displays as `€0,00`. Halves round away from zero.
#[must_use]
pub fn format_price(price: Option<Decimal>) -> String {
    let amount = price
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("€{amount:.2}").replace('.', ",")
}

/// Renders an amount as a plain wire string without trailing zeros
/// (`20`, `25.5`), the format the order endpoint expects for `orderTotal`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}
