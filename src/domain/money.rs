//! Indian-locale number formatting (lakh/crore digit grouping).

/// Formats a number with Indian digit grouping: the last three integer digits
/// form one group, every two digits after that form another.
///
/// `1234567.5` renders as `"12,34,567.5"`. The fractional part is whatever
/// the shortest `f64` display produces; no decimals are padded on.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().to_string();
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (magnitude.as_str(), None),
    };

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_with_lakh_crore_pattern() {
        assert_eq!(format_currency(1_234_567.5), "12,34,567.5");
        assert_eq!(format_currency(12_34_56_789.0), "12,34,56,789");
        assert_eq!(format_currency(100_000.0), "1,00,000");
    }

    #[test]
    fn small_magnitudes_are_untouched() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(123.0), "123");
        assert_eq!(format_currency(999.75), "999.75");
    }

    #[test]
    fn four_digits_split_off_the_last_three() {
        assert_eq!(format_currency(1_000.0), "1,000");
        assert_eq!(format_currency(9_999.5), "9,999.5");
    }

    #[test]
    fn negative_values_keep_the_sign_up_front() {
        assert_eq!(format_currency(-54_321.25), "-54,321.25");
        assert_eq!(format_currency(-1_234_567.5), "-12,34,567.5");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(format_currency(f64::INFINITY), "inf");
        assert_eq!(format_currency(f64::NAN), "NaN");
    }

    proptest! {
        #[test]
        fn stripping_separators_recovers_the_plain_rendering(v in -1.0e12f64..1.0e12) {
            let formatted = format_currency(v);
            let stripped: String = formatted.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, v.to_string());
        }

        #[test]
        fn integer_groups_are_well_formed(n in 0u64..10_000_000_000_000) {
            let formatted = format_currency(n as f64);
            let groups: Vec<&str> = formatted.split(',').collect();
            // Last group is up to 3 digits, every earlier group exactly 2
            // except the leading one which is 1 or 2.
            prop_assert!(groups.last().unwrap().len() <= 3);
            for g in &groups[..groups.len().saturating_sub(1)] {
                prop_assert!(g.len() <= 2 && !g.is_empty());
            }
            for g in groups.iter().skip(1).take(groups.len().saturating_sub(2)) {
                prop_assert_eq!(g.len(), 2);
            }
        }
    }
}
