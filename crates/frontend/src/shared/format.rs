//! Number and price formatting

/// Formats a number with a space as thousands separator
///
/// ```
/// use frontend::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price in NOK; whole amounts are shown without decimals
pub fn format_price(value: f64) -> String {
    let decimals = if (value.fract()).abs() < 0.005 { 0 } else { 2 };
    format!("NOK {}", format_number_with_decimals(value, decimals))
}

pub fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}

pub fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1 234 567.89");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1 234");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1200.0), "NOK 1 200");
        assert_eq!(format_price(99.99), "NOK 99.99");
        assert_eq!(format_price(0.0), "NOK 0");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "night", "nights"), "1 night");
        assert_eq!(plural(3, "night", "nights"), "3 nights");
        assert_eq!(plural(0, "guest", "guests"), "0 guests");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(3.456), "3.5");
    }
}
