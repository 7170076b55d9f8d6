//! Display formatting for token counts and costs.

/// Format a token count, abbreviating thousands and millions.
///
/// One decimal place, rounded half up: 1250 -> "1.3K".
pub fn format_token_count(tokens: u64) -> String {
    if tokens < 1_000 {
        tokens.to_string()
    } else if tokens < 1_000_000 {
        tenths(tokens, 1_000, "K")
    } else {
        tenths(tokens, 1_000_000, "M")
    }
}

fn tenths(value: u64, unit: u64, suffix: &str) -> String {
    let step = unit / 10;
    let scaled = (value + step / 2) / step;
    format!("{}.{}{}", scaled / 10, scaled % 10, suffix)
}

/// Format a USD cost with precision that depends on its magnitude.
pub fn format_cost(cost: f64) -> String {
    if cost < 0.000001 {
        "< $0.000001".to_string()
    } else if cost < 0.01 {
        format!("${:.6}", cost)
    } else if cost < 1.0 {
        format!("${:.4}", cost)
    } else {
        format!("${:.2}", cost)
    }
}
