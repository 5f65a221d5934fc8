use rust_decimal::Decimal;

/// Decimal places for shop prices. The shop trades in one currency with
/// two-decimal pricing; amounts are rounded with banker's rounding.
pub const PRICE_SCALE: u32 = 2;

/// Rounds a monetary amount to the shop's price scale.
pub fn round_price(amount: Decimal) -> Decimal {
    amount.round_dp(PRICE_SCALE)
}

/// Formats an amount with exactly two decimal places, as printed on
/// receipts and stickers.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", round_price(amount))
}

/// Converts a GST percentage (0–100) into the multiplier applied to the
/// buy-side gross. A 5% rate yields 1.05.
pub fn tax_factor(rate_percent: Decimal) -> Decimal {
    Decimal::ONE + rate_percent / Decimal::ONE_HUNDRED
}

/// Checks that a GST percentage is within 0–100.
pub fn is_valid_tax_rate(rate_percent: Decimal) -> bool {
    rate_percent >= Decimal::ZERO && rate_percent <= Decimal::ONE_HUNDRED
}
