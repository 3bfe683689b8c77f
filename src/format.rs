//! USD and percentage formatting for display.

/// Whole-dollar amount with thousands separators, e.g. `"$1,235"`.
pub fn currency(amount: f64) -> String {
    format_usd(amount, 0)
}

/// Amount with cents, e.g. `"$1,234.50"`.
pub fn currency_with_decimals(amount: f64) -> String {
    format_usd(amount, 2)
}

/// Fraction as a whole percentage, e.g. `0.25` -> `"25%"`.
pub fn percentage(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "0%".to_string();
    }
    format!("{:.0}%", fraction * 100.0)
}

fn format_usd(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return if decimals == 0 { "$0".into() } else { "$0.00".into() };
    }

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, frac) = match fixed.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 2);
    // "-0" after rounding is shown as "$0".
    if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push('$');
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}
