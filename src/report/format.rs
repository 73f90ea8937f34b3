//! Display formatting. Values stay full-precision `Decimal` everywhere
//! else; rounding only happens here.

use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub places: u32,
    pub suffix: Option<String>,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            places: 2,
            suffix: Some("COP".to_string()),
        }
    }
}

/// Fixed-scale number without separators, e.g. `1560.00`.
pub fn format_plain(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

/// Currency with thousands separators and optional suffix, e.g. `1,560.00 COP`.
pub fn format_currency(value: Decimal, format: &CurrencyFormat) -> String {
    let grouped = group_thousands(&format_plain(value, format.places));
    match &format.suffix {
        Some(suffix) => format!("{grouped} {suffix}"),
        None => grouped,
    }
}

/// Percentage to two places, `n/a` when undefined (zero amount).
pub fn format_percentage(value: Option<Decimal>) -> String {
    match value {
        Some(pct) => format!("{}%", format_plain(pct, 2)),
        None => "n/a".to_string(),
    }
}

pub fn savings_summary(
    total: Decimal,
    cheaper: &str,
    other: &str,
    format: &CurrencyFormat,
) -> String {
    format!(
        "Total savings using {} instead of {}: {}",
        cheaper,
        other,
        format_currency(total, format)
    )
}

fn group_thousands(plain: &str) -> String {
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_that_plain_format_has_fixed_scale() {
        assert_eq!(format_plain(dec!(1560), 2), "1560.00");
        assert_eq!(format_plain(dec!(4.4900), 2), "4.49");
        assert_eq!(format_plain(dec!(2.005), 2), "2.01");
        assert_eq!(format_plain(dec!(-0.001), 2), "0.00");
        assert_eq!(format_plain(dec!(12.5), 0), "13");
    }

    #[test]
    fn test_that_currency_is_grouped_by_thousands() {
        let cop = CurrencyFormat::default();
        assert_eq!(format_currency(dec!(1560), &cop), "1,560.00 COP");
        assert_eq!(format_currency(dec!(999.999), &cop), "1,000.00 COP");
        assert_eq!(format_currency(dec!(123456789.5), &cop), "123,456,789.50 COP");
        assert_eq!(format_currency(dec!(-2440), &cop), "-2,440.00 COP");
        assert_eq!(format_currency(dec!(12), &cop), "12.00 COP");

        let bare = CurrencyFormat {
            places: 0,
            suffix: None,
        };
        assert_eq!(format_currency(dec!(1234567), &bare), "1,234,567");
    }

    #[test]
    fn test_that_percentage_handles_sentinel() {
        assert_eq!(format_percentage(Some(dec!(6.05))), "6.05%");
        assert_eq!(format_percentage(Some(dec!(4.986666))), "4.99%");
        assert_eq!(format_percentage(None), "n/a");
    }

    #[test]
    fn test_that_summary_mentions_total() {
        let summary = savings_summary(dec!(2440), "Scheme A", "Scheme B", &CurrencyFormat::default());
        assert_eq!(
            summary,
            "Total savings using Scheme A instead of Scheme B: 2,440.00 COP"
        );
    }
}
