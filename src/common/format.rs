// src/common/format.rs

use rust_decimal::Decimal;

// Formata valores monetários no padrão do painel: duas casas fixas e
// separador de milhar. Ex.: 1234.5 -> "$1,234.50".
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{:0<2}", frac_part)),
        None => (text, "00".to_string()),
    };

    let grouped = group_thousands(&int_part);

    if negative {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}

// Contadores inteiros com separador de milhar. Ex.: 1234 -> "1,234".
pub fn format_count(value: i64) -> String {
    let negative = value < 0;
    let grouped = group_thousands(&value.unsigned_abs().to_string());

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn currency_adds_two_decimals_and_thousands_separator() {
        assert_eq!(format_currency(dec("1234.5")), "$1,234.50");
    }

    #[test]
    fn currency_handles_small_and_zero_values() {
        assert_eq!(format_currency(dec("0")), "$0.00");
        assert_eq!(format_currency(dec("7.1")), "$7.10");
        assert_eq!(format_currency(dec("999.999")), "$1,000.00");
    }

    #[test]
    fn currency_rounds_to_two_decimals() {
        assert_eq!(format_currency(dec("1234567.894")), "$1,234,567.89");
    }

    #[test]
    fn currency_keeps_sign_of_negative_values() {
        assert_eq!(format_currency(dec("-1234.5")), "-$1,234.50");
    }

    #[test]
    fn count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
