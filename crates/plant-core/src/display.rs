//! The single display format: whole rupees with Indian digit grouping.

use rust_decimal::Decimal;

/// Round to whole units and group digits the Indian way (`12,34,56,789`).
pub fn indian(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_indian(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Value in crore (1 Cr = 10^7) with two decimals, e.g. `20.00 Cr`.
pub fn crore(value: Decimal) -> String {
    format!("{:.2} Cr", (value / Decimal::from(10_000_000)).round_dp(2))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(indian(dec!(0)), "0");
        assert_eq!(indian(dec!(999)), "999");
        assert_eq!(indian(dec!(1000)), "1,000");
        assert_eq!(indian(dec!(123456)), "1,23,456");
        assert_eq!(indian(dec!(123456789)), "12,34,56,789");
    }

    #[test]
    fn rounds_half_to_even_and_keeps_sign() {
        assert_eq!(indian(dec!(2.5)), "2");
        assert_eq!(indian(dec!(3.5)), "4");
        assert_eq!(indian(dec!(-1234567.4)), "-12,34,567");
        assert_eq!(indian(dec!(-0.4)), "0");
    }

    #[test]
    fn crore_has_two_decimals() {
        assert_eq!(crore(dec!(200000000)), "20.00 Cr");
        assert_eq!(crore(dec!(12345678)), "1.23 Cr");
    }
}
