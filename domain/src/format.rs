/// Insert a comma between every group of three digits
pub fn with_thousands_separator(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_amount(value: u64) -> String {
    with_thousands_separator(i64::try_from(value).unwrap_or(i64::MAX))
}

pub fn format_currency(value: u64, symbol: &str) -> String {
    format!("{}{}", symbol, format_amount(value))
}

/// One decimal place, the way chart labels show shares
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}", percentage)
}
