//! Rand price bounds, parsing and display.

/// Lowest accepted asking price, in rand.
pub const MIN_PRICE: f64 = 100_000.0;
/// Highest accepted asking price, in rand.
pub const MAX_PRICE: f64 = 500_000_000.0;

/// Whether `price` is a finite value inside the accepted range.
pub fn price_in_range(price: f64) -> bool {
    price.is_finite() && (MIN_PRICE..=MAX_PRICE).contains(&price)
}

/// Parse a price typed as text, e.g. `"R 1,250,000"` or `"R 1 250 000,00"`.
///
/// A comma followed by one or two trailing digits is the decimal mark, as
/// printed by [`format_rand`]. Any other comma groups thousands. Everything
/// except digits, `.`, `,` and `-` is discarded before parsing.
pub fn parse_price_text(text: &str) -> Option<f64> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let cleaned = match kept.rfind(',') {
        Some(pos) if !kept.contains('.') && (1..=2).contains(&(kept.len() - pos - 1)) => {
            format!("{}.{}", kept[..pos].replace(',', ""), &kept[pos + 1..])
        }
        _ => kept.replace(',', ""),
    };
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount as South African rand: `R 1 250 000,00`.
pub fn format_rand(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R {grouped},{fraction:02}")
}
